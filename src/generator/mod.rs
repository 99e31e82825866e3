//! Constrained stochastic company synthesis.
//!
//! The pipeline is three stages run off a single RNG stream: build the
//! organization top-down, stamp out unstaffed projects, then link the two
//! sides through the staffing assignor. Seeding the RNG makes the whole
//! document reproducible.

mod error;
mod identity;
mod org;
mod projects;
mod staffing;
mod technology;

pub use error::{GeneratorError, IdentityExhausted};
pub use identity::IdentityAllocator;
pub use org::{build_organization, HeadcountPlan, OrganizationGraph};
pub use projects::build_projects;
pub use staffing::assign_staffing;
pub use technology::{assign_technologies, categories_for_role};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::domain::company::{CompanyData, OrgStructure};
use crate::lexicon::Lexicon;

/// Drives one or more generation runs against a lexicon.
pub struct CompanyGenerator<'a, R: Rng> {
    lexicon: &'a Lexicon,
    rng: R,
}

impl<'a> CompanyGenerator<'a, StdRng> {
    /// Creates a generator with a fixed seed. Two generators with the same
    /// seed and lexicon produce identical documents.
    pub fn seeded(lexicon: &'a Lexicon, seed: u64) -> Self {
        Self::new(lexicon, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy(lexicon: &'a Lexicon) -> Self {
        Self::new(lexicon, StdRng::from_entropy())
    }
}

impl<'a, R: Rng> CompanyGenerator<'a, R> {
    /// Creates a generator over an explicit RNG.
    pub fn new(lexicon: &'a Lexicon, rng: R) -> Self {
        Self { lexicon, rng }
    }

    /// Generates one complete company snapshot.
    ///
    /// The user count is a target: identity exhaustion can leave the pool
    /// slightly short. The project count is exact.
    ///
    /// # Errors
    ///
    /// Lexicon gaps and entity validation failures abort the run.
    pub fn generate(
        &mut self,
        user_count: usize,
        project_count: usize,
    ) -> Result<CompanyData, GeneratorError> {
        info!(user_count, project_count, "generating company snapshot");

        let mut allocator = IdentityAllocator::new();
        let org = build_organization(&mut self.rng, user_count, self.lexicon, &mut allocator)?;
        let mut projects = build_projects(&mut self.rng, project_count, self.lexicon)?;

        let mut users = org.users;
        assign_staffing(&mut self.rng, &mut users, &mut projects);

        let data = CompanyData {
            projects,
            users,
            org_structure: OrgStructure {
                executives: org.executives,
                reporting_structure: org.reporting,
            },
        };
        info!(
            users = data.user_count(),
            projects = data.project_count(),
            names_drawn = allocator.names_used(),
            "generation complete"
        );
        Ok(data)
    }
}
