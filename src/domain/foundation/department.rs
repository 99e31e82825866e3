//! Department definitions.

use serde::{Deserialize, Serialize};

/// Department a user or project belongs to.
///
/// The generator does not force a user's department to match their
/// superior's, nor a project's department to match its staff's. That
/// looseness is intentional in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Business,
    Operations,
    #[serde(rename = "IT")]
    It,
    Engineering,
    Finance,
    Development,
    Design,
    Data,
}

impl Department {
    /// Returns the display name for this department.
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Business => "Business",
            Department::Operations => "Operations",
            Department::It => "IT",
            Department::Engineering => "Engineering",
            Department::Finance => "Finance",
            Department::Development => "Development",
            Department::Design => "Design",
            Department::Data => "Data",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
