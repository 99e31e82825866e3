//! Role catalogs per organizational level.

use std::collections::BTreeMap;

use crate::domain::foundation::{Department, OrgLevel};

/// One department's slice of a level's role catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalogEntry {
    department: Department,
    roles: Vec<String>,
}

impl RoleCatalogEntry {
    /// Creates a catalog entry.
    pub fn new(department: Department, roles: &[&str]) -> Self {
        Self {
            department,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Returns the department this entry belongs to.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Returns the role titles.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Built-in role catalogs.
pub(super) fn builtin() -> BTreeMap<OrgLevel, Vec<RoleCatalogEntry>> {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        OrgLevel::Executive,
        vec![
            RoleCatalogEntry::new(Department::Business, &["CEO", "CFO", "COO"]),
            RoleCatalogEntry::new(Department::Operations, &["CTO", "CIO"]),
        ],
    );
    catalog.insert(
        OrgLevel::Director,
        vec![
            RoleCatalogEntry::new(Department::It, &["IT Director", "Development Director"]),
            RoleCatalogEntry::new(Department::Engineering, &["Engineering Director"]),
            RoleCatalogEntry::new(Department::Operations, &["Operations Director"]),
            RoleCatalogEntry::new(
                Department::Finance,
                &["Finance Director", "Treasury Director", "Accounting Director"],
            ),
        ],
    );
    catalog.insert(
        OrgLevel::Manager,
        vec![
            RoleCatalogEntry::new(
                Department::It,
                &["Development Manager", "Infrastructure Manager"],
            ),
            RoleCatalogEntry::new(
                Department::Engineering,
                &["Project Manager", "Product Manager"],
            ),
            RoleCatalogEntry::new(
                Department::Operations,
                &["Operations Manager", "Support Manager"],
            ),
            RoleCatalogEntry::new(
                Department::Finance,
                &[
                    "Financial Manager",
                    "Accounting Manager",
                    "Budget Manager",
                    "Payroll Manager",
                ],
            ),
        ],
    );
    catalog.insert(
        OrgLevel::Individual,
        vec![
            RoleCatalogEntry::new(
                Department::Engineering,
                &["Senior Engineer", "Software Engineer", "DevOps Engineer"],
            ),
            RoleCatalogEntry::new(
                Department::Development,
                &["Senior Developer", "Developer", "Junior Developer"],
            ),
            RoleCatalogEntry::new(
                Department::Design,
                &["Senior Designer", "UX Designer", "UI Designer"],
            ),
            RoleCatalogEntry::new(
                Department::Data,
                &["Data Scientist", "Data Analyst", "Database Administrator"],
            ),
            RoleCatalogEntry::new(
                Department::Operations,
                &[
                    "Systems Administrator",
                    "Network Engineer",
                    "Support Specialist",
                ],
            ),
            RoleCatalogEntry::new(
                Department::Finance,
                &[
                    "Senior Financial Analyst",
                    "Financial Analyst",
                    "Senior Accountant",
                    "Staff Accountant",
                    "Payroll Specialist",
                    "Tax Specialist",
                    "Treasury Analyst",
                    "Budget Analyst",
                ],
            ),
        ],
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_catalog() {
        let catalog = builtin();
        for level in OrgLevel::ALL {
            assert!(catalog.contains_key(&level), "{} missing", level);
        }
    }

    #[test]
    fn executive_catalog_covers_suite_roles() {
        let catalog = builtin();
        let titles: Vec<&str> = catalog[&OrgLevel::Executive]
            .iter()
            .flat_map(|e| e.roles().iter().map(String::as_str))
            .collect();
        assert_eq!(titles, vec!["CEO", "CFO", "COO", "CTO", "CIO"]);
    }

    #[test]
    fn individual_catalog_includes_developer_ladder() {
        let catalog = builtin();
        let dev = catalog[&OrgLevel::Individual]
            .iter()
            .find(|e| e.department() == Department::Development)
            .unwrap();
        assert_eq!(
            dev.roles(),
            &["Senior Developer", "Developer", "Junior Developer"]
        );
    }
}
