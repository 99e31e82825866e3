//! Three-step grade scale used for project priority and complexity.

use serde::{Deserialize, Serialize};

/// High/Medium/Low grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    High,
    Medium,
    Low,
}

impl Grade {
    /// All grades, for uniform sampling.
    pub const ALL: [Grade; 3] = [Grade::High, Grade::Medium, Grade::Low];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::High => "High",
            Grade::Medium => "Medium",
            Grade::Low => "Low",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_serializes_with_label() {
        assert_eq!(serde_json::to_string(&Grade::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Grade::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn grade_roundtrips_through_json() {
        for grade in Grade::ALL {
            let json = serde_json::to_string(&grade).unwrap();
            let back: Grade = serde_json::from_str(&json).unwrap();
            assert_eq!(back, grade);
        }
    }
}
