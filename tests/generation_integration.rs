//! End-to-end generation tests: run the full pipeline and check the
//! structural guarantees of the produced document.

use std::collections::HashSet;

use proptest::prelude::*;

use orgsynth::domain::foundation::OrgLevel;
use orgsynth::generator::{categories_for_role, CompanyGenerator, HeadcountPlan};
use orgsynth::lexicon::Lexicon;

fn generate(seed: u64, users: usize, projects: usize) -> orgsynth::domain::company::CompanyData {
    CompanyGenerator::seeded(Lexicon::builtin(), seed)
        .generate(users, projects)
        .expect("generation failed")
}

#[test]
fn default_run_fills_the_pyramid() {
    let data = generate(1, 100, 20);
    let plan = HeadcountPlan::for_total(100);

    let count = |level: OrgLevel| data.users.values().filter(|u| u.level() == level).count();
    assert_eq!(count(OrgLevel::Executive), plan.executives);
    assert_eq!(count(OrgLevel::Director), plan.directors);
    assert_eq!(count(OrgLevel::Manager), plan.managers);
    assert_eq!(count(OrgLevel::Individual), plan.individuals);
    assert_eq!(data.user_count(), 100);
    assert_eq!(data.project_count(), 20);
}

#[test]
fn document_passes_its_own_verification() {
    let data = generate(2, 100, 20);
    data.verify().expect("verification failed");
}

#[test]
fn every_subordinate_reports_one_level_up() {
    let data = generate(3, 80, 10);
    for user in data.users.values() {
        match user.reports_to() {
            None => assert_eq!(user.level(), OrgLevel::Executive),
            Some(superior_id) => {
                let superior = &data.users[&superior_id];
                assert_eq!(user.level().superior(), Some(superior.level()));
            }
        }
    }
}

#[test]
fn usernames_are_unique_across_the_run() {
    let data = generate(4, 100, 5);
    let mut seen = HashSet::new();
    for user in data.users.values() {
        assert!(seen.insert(user.username()), "duplicate: {}", user.username());
    }
}

#[test]
fn user_technologies_come_from_their_role_categories() {
    let lexicon = Lexicon::builtin();
    let data = generate(5, 100, 5);
    for user in data.users.values() {
        let mut allowed = HashSet::new();
        for &category in categories_for_role(user.role()) {
            allowed.extend(lexicon.technologies_in(category).unwrap().iter().cloned());
        }
        assert!(!user.current_technologies().is_empty());
        for tag in user.current_technologies() {
            assert!(allowed.contains(tag), "{} has stray tag {}", user.role(), tag);
        }
    }
}

#[test]
fn project_status_agrees_with_end_date() {
    let data = generate(6, 50, 40);
    for project in data.projects.values() {
        assert_eq!(project.status().is_open(), project.end_date().is_none());
        if let Some(end) = project.end_date() {
            assert!(end > project.start_date());
        }
    }
}

#[test]
fn budgets_track_project_type_scale() {
    let lexicon = Lexicon::builtin();
    let templates = lexicon.project_templates().unwrap();
    let data = generate(7, 50, 60);
    for project in data.projects.values() {
        let template = templates
            .iter()
            .find(|t| t.project_type() == project.project_type())
            .unwrap();
        assert!(template.budget().contains(&project.budget()));
        assert!(template.quota_gb().contains(&project.quota_gb()));
    }
}

#[test]
fn same_seed_serializes_byte_identically() {
    let a = serde_json::to_string(&generate(8, 60, 15)).unwrap();
    let b = serde_json::to_string(&generate(8, 60, 15)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn executives_populate_the_org_structure() {
    let data = generate(9, 40, 5);
    assert!(!data.org_structure.executives.is_empty());
    for exec_id in &data.org_structure.executives {
        let exec = &data.users[exec_id];
        assert_eq!(exec.level(), OrgLevel::Executive);
        assert!(exec.problems().is_some());
    }
    for (report, superior) in &data.org_structure.reporting_structure {
        assert_eq!(data.users[report].reports_to(), Some(*superior));
    }
}

#[test]
fn small_run_still_produces_a_consistent_document() {
    let data = generate(10, 10, 3);
    data.verify().expect("verification failed");
    assert_eq!(data.project_count(), 3);
    // 1 executive, 2 directors, 3 managers, 4 individuals.
    assert_eq!(data.user_count(), 10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn any_seed_and_size_verifies(
        seed in 0u64..1_000,
        users in 10usize..150,
        projects in 0usize..30,
    ) {
        let data = generate(seed, users, projects);
        prop_assert!(data.verify().is_ok());
        prop_assert_eq!(data.project_count(), projects);
        prop_assert!(data.user_count() <= users.max(HeadcountPlan::for_total(users).total()));
    }
}
