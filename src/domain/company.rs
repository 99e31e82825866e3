//! The generated company document.
//!
//! One generation run produces one [`CompanyData`] snapshot. Downstream
//! provisioning and drive-populator tools consume it read-only, so the
//! document must round-trip losslessly and keep its exact field shape
//! (`end_date: null` for open projects, `reports_to` absent for executives).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::project::Project;
use crate::domain::user::User;

/// Top-level executive list and the full subordinate-to-superior map,
/// duplicated out of the user records for convenient external lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgStructure {
    /// IDs of top-level executives.
    pub executives: Vec<UserId>,

    /// Subordinate ID to superior ID.
    pub reporting_structure: BTreeMap<UserId, UserId>,
}

/// The complete generated snapshot: users, projects, and the org chart.
///
/// Map types are ordered so a seeded run serializes byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyData {
    /// Project ID to project record.
    pub projects: BTreeMap<ProjectId, Project>,

    /// User ID to user record.
    pub users: BTreeMap<UserId, User>,

    /// Reporting structure duplicated for external lookup.
    pub org_structure: OrgStructure,
}

/// Violations of the end-of-run invariants. Any of these indicates a
/// generator bug; a successful run never produces them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("user {user} reports to {superior}, which does not exist")]
    DanglingSuperior { user: UserId, superior: UserId },

    #[error("user {user} reports to {superior}, which is not one level above")]
    SuperiorLevelMismatch { user: UserId, superior: UserId },

    #[error("username '{username}' is held by more than one user")]
    DuplicateUsername { username: String },

    #[error("user {user} lists project {project}, but the project does not list the user")]
    UnmirroredAssignment { user: UserId, project: ProjectId },

    #[error("project {project} lists user {user}, but the user does not list the project")]
    UnmirroredStaffing { project: ProjectId, user: UserId },

    #[error("user {user} lists project {project}, which does not exist")]
    DanglingProject { user: UserId, project: ProjectId },

    #[error("project {project} lists user {user}, which does not exist")]
    DanglingUser { project: ProjectId, user: UserId },

    #[error("project record {actual} is stored under key {key}")]
    ProjectKeyMismatch { key: ProjectId, actual: ProjectId },

    #[error("org_structure disagrees with user records for {user}")]
    OrgStructureMismatch { user: UserId },
}

impl CompanyData {
    /// Returns the number of generated users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of generated projects.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Checks the end-of-run invariants, returning the first violation.
    ///
    /// Verified here: reporting links resolve and land exactly one level
    /// up, usernames are pairwise distinct, user/project assignment lists
    /// mirror each other, and `org_structure` agrees with the user records.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        self.verify_reporting()?;
        self.verify_usernames()?;
        self.verify_staffing_closure()?;
        self.verify_org_structure()?;
        Ok(())
    }

    fn verify_reporting(&self) -> Result<(), ConsistencyError> {
        for (&user_id, user) in &self.users {
            let Some(superior_id) = user.reports_to() else {
                continue;
            };
            let superior = self.users.get(&superior_id).ok_or(
                ConsistencyError::DanglingSuperior {
                    user: user_id,
                    superior: superior_id,
                },
            )?;
            if superior.level().rank() != user.level().rank() + 1 {
                return Err(ConsistencyError::SuperiorLevelMismatch {
                    user: user_id,
                    superior: superior_id,
                });
            }
        }
        Ok(())
    }

    fn verify_usernames(&self) -> Result<(), ConsistencyError> {
        let mut seen = HashSet::new();
        for user in self.users.values() {
            if !seen.insert(user.username()) {
                return Err(ConsistencyError::DuplicateUsername {
                    username: user.username().to_string(),
                });
            }
        }
        Ok(())
    }

    fn verify_staffing_closure(&self) -> Result<(), ConsistencyError> {
        for (&user_id, user) in &self.users {
            for &project_id in user.assigned_projects() {
                let project = self.projects.get(&project_id).ok_or(
                    ConsistencyError::DanglingProject {
                        user: user_id,
                        project: project_id,
                    },
                )?;
                if !project.assigned_users().contains(&user_id) {
                    return Err(ConsistencyError::UnmirroredAssignment {
                        user: user_id,
                        project: project_id,
                    });
                }
            }
        }
        for (&project_id, project) in &self.projects {
            if project.id() != project_id {
                return Err(ConsistencyError::ProjectKeyMismatch {
                    key: project_id,
                    actual: project.id(),
                });
            }
            for &user_id in project.assigned_users() {
                let user = self.users.get(&user_id).ok_or(ConsistencyError::DanglingUser {
                    project: project_id,
                    user: user_id,
                })?;
                if !user.assigned_projects().contains(&project_id) {
                    return Err(ConsistencyError::UnmirroredStaffing {
                        project: project_id,
                        user: user_id,
                    });
                }
            }
        }
        Ok(())
    }

    fn verify_org_structure(&self) -> Result<(), ConsistencyError> {
        for (&user_id, user) in &self.users {
            match user.reports_to() {
                Some(superior_id) => {
                    if self.org_structure.reporting_structure.get(&user_id) != Some(&superior_id) {
                        return Err(ConsistencyError::OrgStructureMismatch { user: user_id });
                    }
                }
                None => {
                    if !self.org_structure.executives.contains(&user_id) {
                        return Err(ConsistencyError::OrgStructureMismatch { user: user_id });
                    }
                }
            }
        }
        for &exec_id in &self.org_structure.executives {
            if !self.users.contains_key(&exec_id) {
                return Err(ConsistencyError::OrgStructureMismatch { user: exec_id });
            }
        }
        Ok(())
    }
}
