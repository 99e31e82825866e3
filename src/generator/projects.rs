//! Project synthesis.
//!
//! Each project is stamped out of a type template: name vocabulary,
//! technology footprint and resource ranges all come from the template;
//! timeline, status and grades are sampled here. Projects come out
//! unstaffed; the staffing assignor fills the slates afterwards.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::foundation::{Department, Grade, ProjectId, ProjectStatus};
use crate::domain::project::Project;
use crate::generator::GeneratorError;
use crate::lexicon::{Lexicon, ProjectTemplate};

/// Fallback action vocabulary for templates that define none.
const GENERIC_ACTIONS: [&str; 10] = [
    "Migration",
    "Implementation",
    "Integration",
    "Upgrade",
    "Development",
    "Optimization",
    "Deployment",
    "Analysis",
    "Redesign",
    "Enhancement",
];

/// Phase suffixes appended to roughly a third of project names.
const PHASES: [&str; 7] = ["Phase 1", "Phase 2", "Phase 3", "MVP", "Beta", "v2", "2.0"];

const PHASE_PROBABILITY: f64 = 0.3;

/// Departments a project can be filed under, independent of its type.
const PROJECT_DEPARTMENTS: [Department; 4] = [
    Department::It,
    Department::Engineering,
    Department::Operations,
    Department::Business,
];

const MIN_DURATION_DAYS: i64 = 90;
const MAX_DURATION_DAYS: i64 = 365;

/// Synthesizes `count` unstaffed projects keyed by ID.
pub fn build_projects<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    lexicon: &Lexicon,
) -> Result<BTreeMap<ProjectId, Project>, GeneratorError> {
    let templates = lexicon.project_templates()?;
    let mut projects = BTreeMap::new();

    for _ in 0..count {
        let template = &templates[rng.gen_range(0..templates.len())];
        let name = synthesize_name(rng, template)?;
        let likely_technologies = sample_footprint(rng, template, lexicon)?;
        let (start_date, end_date) = sample_timeline(rng);
        let status = derive_status(rng, end_date.is_some());

        let id = ProjectId::new();
        let project = Project::new(
            id,
            name,
            template.project_type(),
            PROJECT_DEPARTMENTS[rng.gen_range(0..PROJECT_DEPARTMENTS.len())],
            format!("P{}", rng.gen_range(1000..=9999)),
            likely_technologies,
            start_date,
            end_date,
            status,
            rng.gen_range(template.budget()),
            Grade::ALL[rng.gen_range(0..Grade::ALL.len())],
            Grade::ALL[rng.gen_range(0..Grade::ALL.len())],
            rng.gen_range(template.quota_gb()),
        )?;
        projects.insert(id, project);
    }
    Ok(projects)
}

/// Builds a "{prefix} {action}" name, with a phase suffix 30% of the time.
fn synthesize_name<R: Rng + ?Sized>(
    rng: &mut R,
    template: &ProjectTemplate,
) -> Result<String, GeneratorError> {
    let prefixes = template.prefixes();
    if prefixes.is_empty() {
        return Err(GeneratorError::EmptyTemplatePrefixes(
            template.project_type(),
        ));
    }
    let prefix = &prefixes[rng.gen_range(0..prefixes.len())];
    let action = match template.actions() {
        [] => GENERIC_ACTIONS[rng.gen_range(0..GENERIC_ACTIONS.len())],
        actions => actions[rng.gen_range(0..actions.len())].as_str(),
    };

    if rng.gen_bool(PHASE_PROBABILITY) {
        let phase = PHASES[rng.gen_range(0..PHASES.len())];
        Ok(format!("{} {} - {}", prefix, action, phase))
    } else {
        Ok(format!("{} {}", prefix, action))
    }
}

/// Samples the technology footprint: half of every required category, a
/// third of each optional category that wins its 50% coin flip.
fn sample_footprint<R: Rng + ?Sized>(
    rng: &mut R,
    template: &ProjectTemplate,
    lexicon: &Lexicon,
) -> Result<BTreeSet<String>, GeneratorError> {
    let mut footprint = BTreeSet::new();
    for &category in template.required_tech() {
        let tags = lexicon.technologies_in(category)?;
        let target = ((tags.len() as f64 * 0.5) as usize).max(1).min(tags.len());
        footprint.extend(tags.choose_multiple(rng, target).cloned());
    }
    for &category in template.optional_tech() {
        if rng.gen_bool(0.5) {
            let tags = lexicon.technologies_in(category)?;
            let target = ((tags.len() as f64 * 0.3) as usize).max(1).min(tags.len());
            footprint.extend(tags.choose_multiple(rng, target).cloned());
        }
    }
    Ok(footprint)
}

/// Samples a start date in the 2023-2024 window and a 90-365 day duration.
/// An end past the window means the project is still running.
fn sample_timeline<R: Rng + ?Sized>(rng: &mut R) -> (NaiveDate, Option<NaiveDate>) {
    let window_start = window(2023, 1, 1);
    let window_end = window(2024, 12, 31);
    let span_days = (window_end - window_start).num_days();

    let start = window_start + Duration::days(rng.gen_range(0..=span_days));
    let end = start + Duration::days(rng.gen_range(MIN_DURATION_DAYS..=MAX_DURATION_DAYS));
    let end_date = (end <= window_end).then_some(end);
    (start, end_date)
}

/// Open projects split evenly between Active and On Hold; closed ones are
/// Completed 85% of the time, Cancelled otherwise.
fn derive_status<R: Rng + ?Sized>(rng: &mut R, has_end_date: bool) -> ProjectStatus {
    if !has_end_date {
        if rng.gen_bool(0.5) {
            ProjectStatus::Active
        } else {
            ProjectStatus::OnHold
        }
    } else if rng.gen_bool(0.85) {
        ProjectStatus::Completed
    } else {
        ProjectStatus::Cancelled
    }
}

fn window(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid window literal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(23)
    }

    #[test]
    fn builds_the_requested_number_of_projects() {
        let projects = build_projects(&mut rng(), 20, Lexicon::builtin()).unwrap();
        assert_eq!(projects.len(), 20);
    }

    #[test]
    fn projects_come_out_unstaffed() {
        let projects = build_projects(&mut rng(), 5, Lexicon::builtin()).unwrap();
        assert!(projects.values().all(|p| p.assigned_users().is_empty()));
    }

    #[test]
    fn record_ids_match_their_map_keys() {
        let projects = build_projects(&mut rng(), 10, Lexicon::builtin()).unwrap();
        for (id, project) in &projects {
            assert_eq!(*id, project.id());
        }
    }

    #[test]
    fn budgets_stay_inside_the_template_range() {
        let lexicon = Lexicon::builtin();
        let templates = lexicon.project_templates().unwrap();
        let projects = build_projects(&mut rng(), 50, lexicon).unwrap();
        for project in projects.values() {
            let template = templates
                .iter()
                .find(|t| t.project_type() == project.project_type())
                .unwrap();
            assert!(template.budget().contains(&project.budget()));
            assert!(template.quota_gb().contains(&project.quota_gb()));
        }
    }

    #[test]
    fn timelines_respect_the_window_and_duration_bounds() {
        let mut r = rng();
        for _ in 0..200 {
            let (start, end) = sample_timeline(&mut r);
            assert!(start >= window(2023, 1, 1));
            assert!(start <= window(2024, 12, 31));
            if let Some(end) = end {
                let days = (end - start).num_days();
                assert!((MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&days));
                assert!(end <= window(2024, 12, 31));
            }
        }
    }

    #[test]
    fn status_always_agrees_with_end_date() {
        let mut r = rng();
        for _ in 0..100 {
            assert!(derive_status(&mut r, false).is_open());
            assert!(!derive_status(&mut r, true).is_open());
        }
    }

    #[test]
    fn project_numbers_are_four_digit_codes() {
        let projects = build_projects(&mut rng(), 10, Lexicon::builtin()).unwrap();
        for project in projects.values() {
            let number = project.number();
            assert!(number.starts_with('P'));
            assert_eq!(number.len(), 5);
            assert!(number[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn footprint_tags_come_from_the_template_categories() {
        let lexicon = Lexicon::builtin();
        let templates = lexicon.project_templates().unwrap();
        let template = &templates[0];
        let footprint = sample_footprint(&mut rng(), template, lexicon).unwrap();
        assert!(!footprint.is_empty());

        let mut allowed = BTreeSet::new();
        for &cat in template.required_tech().iter().chain(template.optional_tech()) {
            allowed.extend(lexicon.technologies_in(cat).unwrap().iter().cloned());
        }
        assert!(footprint.iter().all(|t| allowed.contains(t)));
    }

    #[test]
    fn names_use_the_template_vocabulary() {
        let lexicon = Lexicon::builtin();
        let projects = build_projects(&mut rng(), 30, lexicon).unwrap();
        let templates = lexicon.project_templates().unwrap();
        for project in projects.values() {
            let template = templates
                .iter()
                .find(|t| t.project_type() == project.project_type())
                .unwrap();
            assert!(template
                .prefixes()
                .iter()
                .any(|p| project.name().starts_with(p.as_str())));
        }
    }
}
