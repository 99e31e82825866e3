//! User aggregate entity.
//!
//! A user is a synthetic employee record. Identity and classification are
//! fixed at construction; only the project assignment list grows, and only
//! through the staffing assignor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Department, OrgLevel, ProjectId, UserId, ValidationError};
use crate::domain::user::Identity;

/// Synthetic employee record.
///
/// # Invariants
///
/// - `username` is unique across the generation run (allocator-enforced)
/// - `reports_to` is present exactly when the level is not Executive
/// - `current_technologies` is non-empty
/// - `assigned_projects` is append-only and duplicate-free
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// ASCII display name.
    name: String,

    /// Locale-flavored rendering of the same name (kanji, accents). Equals
    /// `name` for English identities.
    true_name: String,

    /// Unique login handle derived from the name.
    username: String,

    /// Job title, drawn from the level's role catalog.
    role: String,

    /// Seniority level.
    level: OrgLevel,

    /// Department the role was drawn from.
    department: Department,

    /// Technology tags this person is assumed to use.
    current_technologies: BTreeSet<String>,

    /// Projects this user is staffed on. Grows only via staffing.
    assigned_projects: Vec<ProjectId>,

    /// Direct superior. Absent (not null) for executives; downstream
    /// tooling keys off the key's presence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reports_to: Option<UserId>,

    /// Storage-misuse findings. Only executives carry this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    problems: Option<Vec<String>>,
}

impl User {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the role or technology set is empty
    /// - `InvalidField` if `reports_to` presence contradicts the level
    pub fn new(
        identity: Identity,
        role: impl Into<String>,
        level: OrgLevel,
        department: Department,
        current_technologies: BTreeSet<String>,
        reports_to: Option<UserId>,
    ) -> Result<Self, ValidationError> {
        let role = role.into();
        if role.trim().is_empty() {
            return Err(ValidationError::empty_field("role"));
        }
        if current_technologies.is_empty() {
            return Err(ValidationError::empty_field("current_technologies"));
        }
        match (level, reports_to) {
            (OrgLevel::Executive, Some(_)) => {
                return Err(ValidationError::invalid_field(
                    "reports_to",
                    "executives are top-level and report to nobody",
                ));
            }
            (OrgLevel::Executive, None) => {}
            (_, None) => {
                return Err(ValidationError::invalid_field(
                    "reports_to",
                    format!("{} level requires a superior", level),
                ));
            }
            (_, Some(_)) => {}
        }

        let (name, true_name, username) = identity.into_parts();
        Ok(Self {
            name,
            true_name,
            username,
            role,
            level,
            department,
            current_technologies,
            assigned_projects: Vec::new(),
            reports_to,
            problems: None,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the ASCII display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the locale-flavored name rendering.
    pub fn true_name(&self) -> &str {
        &self.true_name
    }

    /// Returns the unique login handle.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the job title.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the seniority level.
    pub fn level(&self) -> OrgLevel {
        self.level
    }

    /// Returns the department.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Returns the technology tag set.
    pub fn current_technologies(&self) -> &BTreeSet<String> {
        &self.current_technologies
    }

    /// Returns the projects this user is staffed on.
    pub fn assigned_projects(&self) -> &[ProjectId] {
        &self.assigned_projects
    }

    /// Returns the current concurrent-project load.
    pub fn assignment_count(&self) -> usize {
        self.assigned_projects.len()
    }

    /// Returns the direct superior, if any.
    pub fn reports_to(&self) -> Option<UserId> {
        self.reports_to
    }

    /// Returns the storage-misuse findings, if the user carries any.
    pub fn problems(&self) -> Option<&[String]> {
        self.problems.as_deref()
    }

    /// Returns true if the role title contains the given fragment.
    pub fn role_contains(&self, fragment: &str) -> bool {
        self.role.contains(fragment)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a project to this user's assignment list.
    ///
    /// Returns false if the project was already assigned. Assignments are
    /// never removed within a generation run.
    pub fn assign_project(&mut self, project_id: ProjectId) -> bool {
        if self.assigned_projects.contains(&project_id) {
            return false;
        }
        self.assigned_projects.push(project_id);
        true
    }

    /// Attaches storage-misuse findings. Used for executives only; an empty
    /// sample still materializes the field, matching the document contract.
    pub fn set_problems(&mut self, problems: Vec<String>) {
        self.problems = Some(problems);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> Identity {
        Identity::new("Ann Lee", "Ann Lee", "ann_lee").unwrap()
    }

    fn tech(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn test_individual() -> User {
        User::new(
            test_identity(),
            "Developer",
            OrgLevel::Individual,
            Department::Development,
            tech(&["Python", "Git"]),
            Some(UserId::new()),
        )
        .unwrap()
    }

    #[test]
    fn new_user_has_no_assignments() {
        let user = test_individual();
        assert!(user.assigned_projects().is_empty());
        assert_eq!(user.assignment_count(), 0);
    }

    #[test]
    fn executive_must_not_report_to_anyone() {
        let result = User::new(
            test_identity(),
            "CEO",
            OrgLevel::Executive,
            Department::Business,
            tech(&["Salesforce"]),
            Some(UserId::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_executive_requires_superior() {
        let result = User::new(
            test_identity(),
            "IT Director",
            OrgLevel::Director,
            Department::It,
            tech(&["AWS"]),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_technology_set_is_rejected() {
        let result = User::new(
            test_identity(),
            "Developer",
            OrgLevel::Individual,
            Department::Development,
            BTreeSet::new(),
            Some(UserId::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_role_is_rejected() {
        let result = User::new(
            test_identity(),
            "  ",
            OrgLevel::Individual,
            Department::Development,
            tech(&["Git"]),
            Some(UserId::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn assign_project_appends_once() {
        let mut user = test_individual();
        let pid = ProjectId::new();
        assert!(user.assign_project(pid));
        assert!(!user.assign_project(pid));
        assert_eq!(user.assigned_projects(), &[pid]);
    }

    #[test]
    fn role_contains_matches_fragments() {
        let user = test_individual();
        assert!(user.role_contains("Developer"));
        assert!(!user.role_contains("Senior"));
    }

    #[test]
    fn reports_to_is_omitted_from_json_when_absent() {
        let exec = User::new(
            test_identity(),
            "CEO",
            OrgLevel::Executive,
            Department::Business,
            tech(&["Salesforce"]),
            None,
        )
        .unwrap();
        let json = serde_json::to_value(&exec).unwrap();
        assert!(json.get("reports_to").is_none());
        assert!(json.get("problems").is_none());
    }

    #[test]
    fn reports_to_is_present_in_json_for_subordinates() {
        let user = test_individual();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("reports_to").is_some());
    }

    #[test]
    fn set_problems_materializes_empty_list() {
        let mut user = test_individual();
        user.set_problems(Vec::new());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["problems"], serde_json::json!([]));
    }
}
