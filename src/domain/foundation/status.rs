//! Project status definitions.
//!
//! Status is derived from the timeline: projects without an end date are
//! still open (Active or On Hold); projects with an end date are closed
//! (Completed or, less often, Cancelled).

use serde::{Deserialize, Serialize};

/// Lifecycle status of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// Statuses valid for a project without an end date.
    pub const OPEN: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::OnHold];

    /// Returns true if the project is still open.
    pub fn is_open(&self) -> bool {
        matches!(self, ProjectStatus::Active | ProjectStatus::OnHold)
    }

    /// Returns true if this status is consistent with the presence or
    /// absence of an end date.
    pub fn matches_end_date(&self, has_end_date: bool) -> bool {
        self.is_open() != has_end_date
    }

    /// Returns the display name for this status.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_statuses_are_open() {
        assert!(ProjectStatus::Active.is_open());
        assert!(ProjectStatus::OnHold.is_open());
        assert!(!ProjectStatus::Completed.is_open());
        assert!(!ProjectStatus::Cancelled.is_open());
    }

    #[test]
    fn open_status_requires_no_end_date() {
        assert!(ProjectStatus::Active.matches_end_date(false));
        assert!(!ProjectStatus::Active.matches_end_date(true));
    }

    #[test]
    fn closed_status_requires_end_date() {
        assert!(ProjectStatus::Completed.matches_end_date(true));
        assert!(!ProjectStatus::Cancelled.matches_end_date(false));
    }

    #[test]
    fn on_hold_serializes_with_space() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"On Hold\"");
    }

    #[test]
    fn on_hold_deserializes_from_spaced_form() {
        let status: ProjectStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
    }
}
