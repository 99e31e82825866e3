//! Staffing assignment.
//!
//! The sole place where users and projects are linked. Each project runs
//! five selection passes over the user pool; every pick updates the user's
//! assignment list and the project slate together, so the two sides can
//! never drift apart.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::foundation::{OrgLevel, ProjectId, UserId};
use crate::domain::project::Project;
use crate::domain::user::User;

const MAX_LEAD_LOAD: usize = 3;
const MAX_SENIOR_LOAD: usize = 4;
const MAX_DEVELOPER_LOAD: usize = 3;
const MAX_JUNIOR_LOAD: usize = 2;
const MAX_SPECIALIST_LOAD: usize = 3;

/// Staffs every project from the user pool.
///
/// Projects are processed in key order so a fixed seed yields a fixed
/// staffing. Sparse pools produce understaffed slates, never failures.
pub fn assign_staffing<R: Rng + ?Sized>(
    rng: &mut R,
    users: &mut BTreeMap<UserId, User>,
    projects: &mut BTreeMap<ProjectId, Project>,
) {
    let project_ids: Vec<ProjectId> = projects.keys().copied().collect();
    for project_id in project_ids {
        let mut slate: Vec<UserId> = Vec::new();

        // 1. One lead from the manager/director bench.
        let leads = eligible(users, |u| {
            matches!(u.level(), OrgLevel::Manager | OrgLevel::Director)
                && u.assignment_count() < MAX_LEAD_LOAD
        });
        staff(rng, users, &mut slate, project_id, &leads, 1);

        // 2. Up to two senior developers.
        let seniors = eligible(users, |u| {
            u.role_contains("Senior")
                && u.role_contains("Developer")
                && u.assignment_count() < MAX_SENIOR_LOAD
        });
        staff(rng, users, &mut slate, project_id, &seniors, 2);

        // 3. Up to four mid-level developers.
        let developers = eligible(users, |u| {
            u.role_contains("Developer")
                && !u.role_contains("Senior")
                && !u.role_contains("Junior")
                && u.assignment_count() < MAX_DEVELOPER_LOAD
        });
        staff(rng, users, &mut slate, project_id, &developers, 4);

        // 4. Up to two juniors.
        let juniors = eligible(users, |u| {
            u.role_contains("Junior") && u.assignment_count() < MAX_JUNIOR_LOAD
        });
        staff(rng, users, &mut slate, project_id, &juniors, 2);

        // 5. Up to two specialists not already on the slate.
        let specialists: Vec<UserId> = eligible(users, |u| {
            ["QA", "Designer", "Architect"]
                .iter()
                .any(|fragment| u.role_contains(fragment))
                && u.assignment_count() < MAX_SPECIALIST_LOAD
        })
        .into_iter()
        .filter(|id| !slate.contains(id))
        .collect();
        staff(rng, users, &mut slate, project_id, &specialists, 2);

        if slate.is_empty() {
            debug!(%project_id, "no eligible staff, leaving project unstaffed");
        }
        if let Some(project) = projects.get_mut(&project_id) {
            project.set_staffing(slate);
        }
    }
}

/// Collects user IDs matching a predicate, in pool order.
fn eligible<F>(users: &BTreeMap<UserId, User>, predicate: F) -> Vec<UserId>
where
    F: Fn(&User) -> bool,
{
    users
        .iter()
        .filter(|(_, user)| predicate(user))
        .map(|(id, _)| *id)
        .collect()
}

/// Picks up to `count` users from the candidate pool and records the
/// assignment on both sides.
fn staff<R: Rng + ?Sized>(
    rng: &mut R,
    users: &mut BTreeMap<UserId, User>,
    slate: &mut Vec<UserId>,
    project_id: ProjectId,
    candidates: &[UserId],
    count: usize,
) {
    for &id in candidates.choose_multiple(rng, count.min(candidates.len())) {
        if let Some(user) = users.get_mut(&id) {
            if user.assign_project(project_id) {
                slate.push(id);
            }
        }
    }
}
