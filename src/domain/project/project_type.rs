//! Project type classification.

use serde::{Deserialize, Serialize};

/// Classification of a generated project. Each type has a lexicon template
/// defining its name vocabulary, technology categories and resource ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Finance,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    Infrastructure,
    #[serde(rename = "AI/ML")]
    AiMl,
    Security,
    Engineering,
    Business,
    #[serde(rename = "Data Science")]
    DataScience,
    Research,
}

impl ProjectType {
    /// Returns the display name for this type.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Finance => "Finance",
            ProjectType::SoftwareDevelopment => "Software Development",
            ProjectType::Infrastructure => "Infrastructure",
            ProjectType::AiMl => "AI/ML",
            ProjectType::Security => "Security",
            ProjectType::Engineering => "Engineering",
            ProjectType::Business => "Business",
            ProjectType::DataScience => "Data Science",
            ProjectType::Research => "Research",
        }
    }

    /// Returns true if this type carries a heavy data footprint, which
    /// drives its budget and storage quota ranges up by one to two orders
    /// of magnitude.
    pub fn is_data_heavy(&self) -> bool {
        matches!(
            self,
            ProjectType::AiMl | ProjectType::DataScience | ProjectType::Research
        )
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
