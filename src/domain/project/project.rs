//! Project aggregate entity.
//!
//! A project is a synthetic initiative record. Everything except the
//! staffing slate is fixed at construction; the slate is installed exactly
//! once by the staffing assignor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Department, Grade, ProjectId, ProjectStatus, UserId, ValidationError};
use crate::domain::project::ProjectType;

/// Synthetic initiative record.
///
/// # Invariants
///
/// - `status` is consistent with `end_date` presence (open statuses have no
///   end date, closed statuses have one)
/// - `end_date`, when present, is after `start_date`
/// - `end_date` serializes as an explicit `null` while the project is open;
///   downstream tools key off the field being present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, duplicated inside the record for downstream
    /// tools that look at values without their map keys.
    id: ProjectId,

    /// Human-readable name.
    name: String,

    /// Project type classification.
    #[serde(rename = "type")]
    project_type: ProjectType,

    /// Department affinity.
    department: Department,

    /// Short project code, `P` + four digits.
    number: String,

    /// Staffing slate, in selection order. Installed once by staffing.
    assigned_users: Vec<UserId>,

    /// Technology footprint sampled from the type's categories.
    likely_technologies: BTreeSet<String>,

    /// Project kick-off date.
    start_date: NaiveDate,

    /// Completion date, `null` while the project is open.
    end_date: Option<NaiveDate>,

    /// Derived lifecycle status.
    status: ProjectStatus,

    /// Budget in whole currency units.
    budget: u64,

    /// Priority grade.
    priority: Grade,

    /// Complexity grade.
    complexity: Grade,

    /// Storage quota in GB.
    quota_gb: u64,
}

impl Project {
    /// Creates a new, unstaffed project.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name or technology footprint is empty
    /// - `InvalidField` if the status contradicts the end date, or the end
    ///   date does not come after the start date
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        project_type: ProjectType,
        department: Department,
        number: impl Into<String>,
        likely_technologies: BTreeSet<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        status: ProjectStatus,
        budget: u64,
        priority: Grade,
        complexity: Grade,
        quota_gb: u64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if likely_technologies.is_empty() {
            return Err(ValidationError::empty_field("likely_technologies"));
        }
        if !status.matches_end_date(end_date.is_some()) {
            return Err(ValidationError::invalid_field(
                "status",
                format!(
                    "{} is inconsistent with end_date presence ({})",
                    status,
                    end_date.is_some()
                ),
            ));
        }
        if let Some(end) = end_date {
            if end <= start_date {
                return Err(ValidationError::invalid_field(
                    "end_date",
                    "must come after start_date",
                ));
            }
        }

        Ok(Self {
            id,
            name,
            project_type,
            department,
            number: number.into(),
            assigned_users: Vec::new(),
            likely_technologies,
            start_date,
            end_date,
            status,
            budget,
            priority,
            complexity,
            quota_gb,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the project ID.
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type classification.
    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Returns the department affinity.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Returns the short project code.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the staffing slate in selection order.
    pub fn assigned_users(&self) -> &[UserId] {
        &self.assigned_users
    }

    /// Returns the technology footprint.
    pub fn likely_technologies(&self) -> &BTreeSet<String> {
        &self.likely_technologies
    }

    /// Returns the start date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date, if the project has closed.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the budget.
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Returns the priority grade.
    pub fn priority(&self) -> Grade {
        self.priority
    }

    /// Returns the complexity grade.
    pub fn complexity(&self) -> Grade {
        self.complexity
    }

    /// Returns the storage quota in GB.
    pub fn quota_gb(&self) -> u64 {
        self.quota_gb
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Installs the staffing slate. Called exactly once per project; an
    /// understaffed (even empty) slate is accepted.
    pub fn set_staffing(&mut self, slate: Vec<UserId>) {
        debug_assert!(self.assigned_users.is_empty(), "slate installed twice");
        self.assigned_users = slate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tech(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn open_project() -> Project {
        Project::new(
            ProjectId::new(),
            "Web Portal Development",
            ProjectType::SoftwareDevelopment,
            Department::It,
            "P4821",
            tech(&["Python", "AWS"]),
            date(2024, 6, 1),
            None,
            ProjectStatus::Active,
            500_000,
            Grade::High,
            Grade::Medium,
            2048,
        )
        .unwrap()
    }

    #[test]
    fn new_project_is_unstaffed() {
        let project = open_project();
        assert!(project.assigned_users().is_empty());
    }

    #[test]
    fn open_status_with_end_date_is_rejected() {
        let result = Project::new(
            ProjectId::new(),
            "Budget Planning Upgrade",
            ProjectType::Finance,
            Department::Finance,
            "P1000",
            tech(&["SAP Finance"]),
            date(2023, 1, 1),
            Some(date(2023, 6, 1)),
            ProjectStatus::Active,
            100_000,
            Grade::Low,
            Grade::Low,
            150,
        );
        assert!(result.is_err());
    }

    #[test]
    fn closed_status_without_end_date_is_rejected() {
        let result = Project::new(
            ProjectId::new(),
            "Budget Planning Upgrade",
            ProjectType::Finance,
            Department::Finance,
            "P1000",
            tech(&["SAP Finance"]),
            date(2023, 1, 1),
            None,
            ProjectStatus::Completed,
            100_000,
            Grade::Low,
            Grade::Low,
            150,
        );
        assert!(result.is_err());
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let result = Project::new(
            ProjectId::new(),
            "Network Migration",
            ProjectType::Infrastructure,
            Department::Operations,
            "P2000",
            tech(&["AWS"]),
            date(2024, 1, 1),
            Some(date(2023, 1, 1)),
            ProjectStatus::Completed,
            200_000,
            Grade::Medium,
            Grade::Medium,
            300,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_technology_footprint_is_rejected() {
        let result = Project::new(
            ProjectId::new(),
            "CRM Integration",
            ProjectType::Business,
            Department::Business,
            "P3000",
            BTreeSet::new(),
            date(2023, 3, 1),
            None,
            ProjectStatus::OnHold,
            80_000,
            Grade::Low,
            Grade::Low,
            120,
        );
        assert!(result.is_err());
    }

    #[test]
    fn set_staffing_installs_slate() {
        let mut project = open_project();
        let slate = vec![UserId::new(), UserId::new()];
        project.set_staffing(slate.clone());
        assert_eq!(project.assigned_users(), slate.as_slice());
    }

    #[test]
    fn open_project_serializes_end_date_as_null() {
        let project = open_project();
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("end_date").is_some());
        assert!(json["end_date"].is_null());
    }

    #[test]
    fn type_field_uses_json_name() {
        let project = open_project();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["type"], "Software Development");
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let project = open_project();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["start_date"], "2024-06-01");
    }
}
