//! Organizational level definitions.
//!
//! Levels form a strict seniority ranking: Executive > Director > Manager >
//! Individual. Every non-executive reports to a user exactly one level up.

use serde::{Deserialize, Serialize};

/// Seniority level of a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrgLevel {
    Executive,
    Director,
    Manager,
    Individual,
}

impl OrgLevel {
    /// All levels, ordered from most to least senior. Generation walks this
    /// top-down so every superior exists before its subordinates.
    pub const ALL: [OrgLevel; 4] = [
        OrgLevel::Executive,
        OrgLevel::Director,
        OrgLevel::Manager,
        OrgLevel::Individual,
    ];

    /// Returns the numeric seniority rank. Higher rank = more senior.
    pub fn rank(&self) -> u8 {
        match self {
            OrgLevel::Executive => 3,
            OrgLevel::Director => 2,
            OrgLevel::Manager => 1,
            OrgLevel::Individual => 0,
        }
    }

    /// Returns the level a user at this level reports to, if any.
    pub fn superior(&self) -> Option<OrgLevel> {
        match self {
            OrgLevel::Executive => None,
            OrgLevel::Director => Some(OrgLevel::Executive),
            OrgLevel::Manager => Some(OrgLevel::Director),
            OrgLevel::Individual => Some(OrgLevel::Manager),
        }
    }

    /// Returns the display name for this level.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrgLevel::Executive => "Executive",
            OrgLevel::Director => "Director",
            OrgLevel::Manager => "Manager",
            OrgLevel::Individual => "Individual",
        }
    }

    /// Returns true if this level carries people-management duties.
    pub fn is_leadership(&self) -> bool {
        !matches!(self, OrgLevel::Individual)
    }
}

impl std::fmt::Display for OrgLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
