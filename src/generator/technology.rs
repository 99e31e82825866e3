//! Role-driven technology assignment.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::foundation::OrgLevel;
use crate::generator::GeneratorError;
use crate::lexicon::{Lexicon, TechCategory};

/// Returns the technology categories a role title draws from. Unknown
/// titles fall back to the Business category.
pub fn categories_for_role(role: &str) -> &'static [TechCategory] {
    use TechCategory::*;
    match role {
        "CEO" | "CFO" | "COO" => &[Business],
        "CTO" => &[Business, Cloud, Development],
        "CIO" | "CISO" => &[Business, Cloud],

        "IT Director" | "Operations Director" => &[Business, Cloud],
        "Engineering Director" | "Development Director" => &[Development, Cloud],
        "Security Director" => &[Cloud, Development],

        "Project Manager" => &[Business],
        "Development Manager" | "Team Lead" => &[Development, Cloud],
        "Infrastructure Manager" => &[Cloud],
        "Security Manager" => &[Cloud, Development],
        "Operations Manager" => &[Cloud, Business],

        "Software Engineer" | "Frontend Developer" | "Backend Developer" => &[Development],
        "DevOps Engineer" | "Security Engineer" | "Full Stack Developer" => {
            &[Cloud, Development]
        }
        "UI Designer" | "UX Designer" | "Graphic Designer" => &[Design],
        "Data Scientist" | "Data Engineer" => &[DataScience, Development],
        "Business Analyst" => &[Business, Analytics],
        "System Administrator" | "Network Engineer" => &[Cloud],
        "Support Specialist" => &[Business],

        _ => &[Business],
    }
}

/// Samples a technology set for a role at a level.
///
/// Each mapped category contributes a level-dependent fraction of its tags:
/// 30% for executives and directors, 50% for managers, 70% for individual
/// contributors, with a floor of one tag (two for individuals) and a cap of
/// the category size. The union across categories is the user's set, so it
/// is never empty and never contains duplicates.
pub fn assign_technologies<R: Rng + ?Sized>(
    rng: &mut R,
    role: &str,
    level: OrgLevel,
    lexicon: &Lexicon,
) -> Result<BTreeSet<String>, GeneratorError> {
    let (fraction, floor) = match level {
        OrgLevel::Executive | OrgLevel::Director => (0.3, 1),
        OrgLevel::Manager => (0.5, 1),
        OrgLevel::Individual => (0.7, 2),
    };

    let mut tech_set = BTreeSet::new();
    for &category in categories_for_role(role) {
        let tags = lexicon.technologies_in(category)?;
        let target = ((tags.len() as f64 * fraction) as usize)
            .max(floor)
            .min(tags.len());
        tech_set.extend(tags.choose_multiple(rng, target).cloned());
    }
    Ok(tech_set)
}
