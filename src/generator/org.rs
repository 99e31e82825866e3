//! Top-down organization construction.
//!
//! Levels are filled executives-first so every non-executive always has a
//! populated superior pool to attach to. The reporting map is built in the
//! same pass, which keeps `reports_to` and the reporting structure mirror
//! images by construction.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::domain::foundation::{OrgLevel, UserId};
use crate::domain::user::User;
use crate::generator::{assign_technologies, GeneratorError, IdentityAllocator};
use crate::lexicon::{Lexicon, Locale};

/// How many users to create at each level for a requested total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadcountPlan {
    pub executives: usize,
    pub directors: usize,
    pub managers: usize,
    pub individuals: usize,
}

impl HeadcountPlan {
    /// Splits a requested total into the 5/10/15/70 pyramid. The leadership
    /// bands have floors (1/2/3), so tiny totals can leave zero individual
    /// contributors.
    pub fn for_total(total: usize) -> Self {
        let executives = (total * 5 / 100).max(1);
        let directors = (total * 10 / 100).max(2);
        let managers = (total * 15 / 100).max(3);
        let individuals = total.saturating_sub(executives + directors + managers);
        Self {
            executives,
            directors,
            managers,
            individuals,
        }
    }

    /// Returns the quota for one level.
    pub fn for_level(&self, level: OrgLevel) -> usize {
        match level {
            OrgLevel::Executive => self.executives,
            OrgLevel::Director => self.directors,
            OrgLevel::Manager => self.managers,
            OrgLevel::Individual => self.individuals,
        }
    }

    /// Returns the planned total across all levels.
    pub fn total(&self) -> usize {
        self.executives + self.directors + self.managers + self.individuals
    }
}

/// The user side of a generated company: the pool itself plus the
/// org-chart views derived while building it.
#[derive(Debug)]
pub struct OrganizationGraph {
    pub users: BTreeMap<UserId, User>,
    pub executives: Vec<UserId>,
    pub reporting: BTreeMap<UserId, UserId>,
    pub by_level: BTreeMap<OrgLevel, Vec<UserId>>,
}

/// Builds the full user pool for a requested headcount.
///
/// Identity exhaustion on a single slot is logged and skipped, so the
/// resulting pool may be smaller than requested. Lexicon gaps and entity
/// validation failures abort the build.
pub fn build_organization<R: Rng + ?Sized>(
    rng: &mut R,
    total_users: usize,
    lexicon: &Lexicon,
    allocator: &mut IdentityAllocator,
) -> Result<OrganizationGraph, GeneratorError> {
    let plan = HeadcountPlan::for_total(total_users);
    debug!(
        executives = plan.executives,
        directors = plan.directors,
        managers = plan.managers,
        individuals = plan.individuals,
        "planned headcounts"
    );

    let mut users: BTreeMap<UserId, User> = BTreeMap::new();
    let mut by_level: BTreeMap<OrgLevel, Vec<UserId>> = BTreeMap::new();
    let mut reporting: BTreeMap<UserId, UserId> = BTreeMap::new();

    for level in OrgLevel::ALL {
        let catalog = lexicon.role_catalog(level)?;
        for _ in 0..plan.for_level(level) {
            let superior = match level.superior() {
                None => None,
                Some(superior_level) => {
                    let pool = by_level.get(&superior_level).map(Vec::as_slice);
                    match pool.and_then(|p| pick_superior(rng, level, p, &reporting)) {
                        Some(id) => Some(id),
                        None => {
                            warn!(%level, "no superiors available, leaving level short");
                            break;
                        }
                    }
                }
            };

            let Some(entry) = catalog.choose(rng) else {
                break;
            };
            let Some(role) = entry.roles().choose(rng) else {
                continue;
            };

            let locale = sample_locale(rng);
            let pool = lexicon.name_pool(locale)?;
            let identity = match allocator.allocate(rng, pool, locale) {
                Ok(identity) => identity,
                Err(err) => {
                    warn!(%level, %locale, %err, "skipping user slot");
                    continue;
                }
            };

            let technologies = assign_technologies(rng, role, level, lexicon)?;
            let mut user = User::new(
                identity,
                role.clone(),
                level,
                entry.department(),
                technologies,
                superior,
            )?;

            if level == OrgLevel::Executive {
                let count = rng.gen_range(0..=2);
                let picks: Vec<String> = lexicon
                    .problems()
                    .choose_multiple(rng, count)
                    .cloned()
                    .collect();
                user.set_problems(picks);
            }

            let id = UserId::new();
            if let Some(superior) = superior {
                reporting.insert(id, superior);
            }
            users.insert(id, user);
            by_level.entry(level).or_default().push(id);
        }
    }

    let executives = by_level
        .get(&OrgLevel::Executive)
        .cloned()
        .unwrap_or_default();
    Ok(OrganizationGraph {
        users,
        executives,
        reporting,
        by_level,
    })
}

/// Picks a superior for a new user at `level`. Directors and managers
/// attach uniformly; individual contributors go to the least-loaded manager
/// so report counts stay balanced.
fn pick_superior<R: Rng + ?Sized>(
    rng: &mut R,
    level: OrgLevel,
    pool: &[UserId],
    reporting: &BTreeMap<UserId, UserId>,
) -> Option<UserId> {
    match level {
        OrgLevel::Individual => least_loaded(pool, reporting),
        _ => pool.choose(rng).copied(),
    }
}

/// Returns the first superior in `pool` order with the fewest current
/// direct reports.
fn least_loaded(pool: &[UserId], reporting: &BTreeMap<UserId, UserId>) -> Option<UserId> {
    let mut best: Option<(UserId, usize)> = None;
    for &candidate in pool {
        let reports = reporting.values().filter(|&&s| s == candidate).count();
        if best.map_or(true, |(_, fewest)| reports < fewest) {
            best = Some((candidate, reports));
        }
    }
    best.map(|(id, _)| id)
}

/// Samples a locale at the fixed 60/20/20 English/Japanese/Spanish weights.
fn sample_locale<R: Rng + ?Sized>(rng: &mut R) -> Locale {
    match rng.gen_range(0..10) {
        0..=5 => Locale::English,
        6 | 7 => Locale::Japanese,
        _ => Locale::Spanish,
    }
}
