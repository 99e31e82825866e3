//! Project-type templates: name vocabulary, technology categories and
//! resource ranges per type.

use std::ops::RangeInclusive;

use crate::domain::project::ProjectType;
use crate::lexicon::TechCategory;

/// Template driving the synthesis of one project type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    project_type: ProjectType,
    prefixes: Vec<String>,
    actions: Vec<String>,
    required_tech: Vec<TechCategory>,
    optional_tech: Vec<TechCategory>,
    budget: RangeInclusive<u64>,
    quota_gb: RangeInclusive<u64>,
}

impl ProjectTemplate {
    /// Creates a template.
    pub fn new(
        project_type: ProjectType,
        prefixes: &[&str],
        actions: &[&str],
        required_tech: &[TechCategory],
        optional_tech: &[TechCategory],
        budget: RangeInclusive<u64>,
        quota_gb: RangeInclusive<u64>,
    ) -> Self {
        Self {
            project_type,
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
            required_tech: required_tech.to_vec(),
            optional_tech: optional_tech.to_vec(),
            budget,
            quota_gb,
        }
    }

    /// Returns the type this template synthesizes.
    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Returns the name prefixes (system vocabulary).
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Returns the action vocabulary. May be empty; the synthesizer falls
    /// back to the generic action list.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Returns the categories always sampled into the footprint.
    pub fn required_tech(&self) -> &[TechCategory] {
        &self.required_tech
    }

    /// Returns the categories sampled with 50% probability.
    pub fn optional_tech(&self) -> &[TechCategory] {
        &self.optional_tech
    }

    /// Returns the inclusive budget range.
    pub fn budget(&self) -> RangeInclusive<u64> {
        self.budget.clone()
    }

    /// Returns the inclusive storage-quota range, in GB.
    pub fn quota_gb(&self) -> RangeInclusive<u64> {
        self.quota_gb.clone()
    }
}

/// Built-in project-type templates. Data-heavy types (AI/ML, Data Science,
/// Research) carry budget and quota ranges one to two orders of magnitude
/// above administrative types.
pub(super) fn builtin() -> Vec<ProjectTemplate> {
    vec![
        ProjectTemplate::new(
            ProjectType::Finance,
            &[
                "Financial System",
                "Budget Planning",
                "Payroll",
                "Tax Management",
            ],
            &["Implementation", "Upgrade", "Integration", "Automation"],
            &[TechCategory::Finance, TechCategory::Business],
            &[TechCategory::Analytics, TechCategory::Cloud],
            50_000..=250_000,
            100..=300,
        ),
        ProjectTemplate::new(
            ProjectType::SoftwareDevelopment,
            &[
                "Web Portal",
                "Mobile App",
                "Desktop Application",
                "API Service",
            ],
            &["Development", "Modernization", "Refactoring"],
            &[TechCategory::Development, TechCategory::Cloud],
            &[TechCategory::DataScience, TechCategory::Analytics],
            200_000..=1_000_000,
            2_048..=4_096,
        ),
        ProjectTemplate::new(
            ProjectType::Infrastructure,
            &["Cloud Infrastructure", "Network", "Server", "Data Center"],
            &["Migration", "Upgrade", "Implementation"],
            &[TechCategory::Cloud],
            &[TechCategory::Development],
            100_000..=500_000,
            200..=500,
        ),
        ProjectTemplate::new(
            ProjectType::AiMl,
            &[
                "Machine Learning",
                "AI Model",
                "Neural Network",
                "Data Pipeline",
            ],
            &["Development", "Training", "Optimization"],
            &[TechCategory::DataScience, TechCategory::Development],
            &[TechCategory::Cloud],
            2_000_000..=10_000_000,
            10_240..=51_200,
        ),
        ProjectTemplate::new(
            ProjectType::Security,
            &["Security System", "Authentication", "Firewall"],
            &["Implementation", "Upgrade", "Assessment"],
            &[TechCategory::Security],
            &[TechCategory::Cloud, TechCategory::Development],
            100_000..=400_000,
            100..=300,
        ),
        ProjectTemplate::new(
            ProjectType::Engineering,
            &["CAD System", "3D Modeling", "Simulation Engine"],
            &["Development", "Implementation", "Optimization"],
            &[TechCategory::Development, TechCategory::Engineering],
            &[TechCategory::Cloud],
            500_000..=3_000_000,
            3_072..=5_120,
        ),
        ProjectTemplate::new(
            ProjectType::Business,
            &["CRM", "ERP", "Analytics Dashboard"],
            &["Implementation", "Integration", "Optimization"],
            &[TechCategory::Business],
            &[TechCategory::Analytics, TechCategory::Cloud],
            50_000..=200_000,
            100..=200,
        ),
        ProjectTemplate::new(
            ProjectType::DataScience,
            &["ML Pipeline", "Analytics Platform", "Data Warehouse"],
            &["Implementation", "Training", "Optimization"],
            &[TechCategory::DataScience],
            &[TechCategory::Cloud, TechCategory::Development],
            1_000_000..=5_000_000,
            8_192..=30_720,
        ),
        ProjectTemplate::new(
            ProjectType::Research,
            &["Research Platform", "Analysis Framework", "Study System"],
            &["Development", "Analysis", "Implementation"],
            &[TechCategory::DataScience],
            &[TechCategory::Development, TechCategory::Cloud],
            1_000_000..=4_000_000,
            6_144..=20_480,
        ),
    ]
}
