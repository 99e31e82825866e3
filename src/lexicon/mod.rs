//! Static reference tables consumed, never mutated, by the generator.
//!
//! The lexicon bundles the technology catalog, the per-level role catalogs,
//! the project-type templates, the locale name pools and the storage-misuse
//! problem tags. A built-in lexicon is provided; a custom one can be
//! injected for tests. Missing or empty entries are fatal: the generator
//! cannot emit partially-initialized entities.

mod names;
mod problems;
mod project_types;
mod roles;
mod technologies;

pub use names::{Locale, NameEntry, NamePool};
pub use project_types::ProjectTemplate;
pub use roles::RoleCatalogEntry;
pub use technologies::TechCategory;

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::foundation::OrgLevel;

/// Errors raised when the lexicon is missing data the generator needs.
/// All of these abort the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("technology category '{0}' is missing or empty")]
    MissingTechnologyCategory(TechCategory),

    #[error("role catalog for level '{0}' is missing or empty")]
    MissingRoleCatalog(OrgLevel),

    #[error("no project-type templates defined")]
    NoProjectTemplates,

    #[error("name pool for locale '{0}' is missing or empty")]
    MissingNamePool(Locale),
}

/// The full set of reference tables for one generation run.
#[derive(Debug, Clone)]
pub struct Lexicon {
    technologies: BTreeMap<TechCategory, Vec<String>>,
    role_catalog: BTreeMap<OrgLevel, Vec<RoleCatalogEntry>>,
    project_templates: Vec<ProjectTemplate>,
    name_pools: BTreeMap<Locale, NamePool>,
    problems: Vec<String>,
}

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    technologies: technologies::builtin(),
    role_catalog: roles::builtin(),
    project_templates: project_types::builtin(),
    name_pools: names::builtin(),
    problems: problems::builtin(),
});

impl Lexicon {
    /// Returns the built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Creates a custom lexicon from explicit tables.
    pub fn new(
        technologies: BTreeMap<TechCategory, Vec<String>>,
        role_catalog: BTreeMap<OrgLevel, Vec<RoleCatalogEntry>>,
        project_templates: Vec<ProjectTemplate>,
        name_pools: BTreeMap<Locale, NamePool>,
        problems: Vec<String>,
    ) -> Self {
        Self {
            technologies,
            role_catalog,
            project_templates,
            name_pools,
            problems,
        }
    }

    /// Returns the tags in a technology category.
    ///
    /// # Errors
    ///
    /// `MissingTechnologyCategory` if the category is absent or empty.
    pub fn technologies_in(&self, category: TechCategory) -> Result<&[String], LexiconError> {
        match self.technologies.get(&category) {
            Some(tags) if !tags.is_empty() => Ok(tags),
            _ => Err(LexiconError::MissingTechnologyCategory(category)),
        }
    }

    /// Returns the role catalog for a level.
    ///
    /// # Errors
    ///
    /// `MissingRoleCatalog` if the level has no catalog or an empty one.
    pub fn role_catalog(&self, level: OrgLevel) -> Result<&[RoleCatalogEntry], LexiconError> {
        match self.role_catalog.get(&level) {
            Some(entries) if !entries.is_empty() => Ok(entries),
            _ => Err(LexiconError::MissingRoleCatalog(level)),
        }
    }

    /// Returns the project-type templates.
    ///
    /// # Errors
    ///
    /// `NoProjectTemplates` if none are defined.
    pub fn project_templates(&self) -> Result<&[ProjectTemplate], LexiconError> {
        if self.project_templates.is_empty() {
            return Err(LexiconError::NoProjectTemplates);
        }
        Ok(&self.project_templates)
    }

    /// Returns the name pool for a locale.
    ///
    /// # Errors
    ///
    /// `MissingNamePool` if the locale has no pool or an empty one.
    pub fn name_pool(&self, locale: Locale) -> Result<&NamePool, LexiconError> {
        match self.name_pools.get(&locale) {
            Some(pool) if !pool.is_empty() => Ok(pool),
            _ => Err(LexiconError::MissingNamePool(locale)),
        }
    }

    /// Returns the storage-misuse problem tags.
    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_technology_category() {
        let lexicon = Lexicon::builtin();
        for category in TechCategory::ALL {
            let tags = lexicon.technologies_in(category).unwrap();
            assert!(!tags.is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn builtin_has_a_catalog_for_every_level() {
        let lexicon = Lexicon::builtin();
        for level in OrgLevel::ALL {
            let entries = lexicon.role_catalog(level).unwrap();
            assert!(!entries.is_empty());
            for entry in entries {
                assert!(!entry.roles().is_empty());
            }
        }
    }

    #[test]
    fn builtin_has_nine_project_templates() {
        let templates = Lexicon::builtin().project_templates().unwrap();
        assert_eq!(templates.len(), 9);
    }

    #[test]
    fn builtin_has_a_pool_for_every_locale() {
        let lexicon = Lexicon::builtin();
        for locale in Locale::ALL {
            assert!(lexicon.name_pool(locale).is_ok());
        }
    }

    #[test]
    fn builtin_has_problem_tags() {
        assert_eq!(Lexicon::builtin().problems().len(), 15);
    }

    #[test]
    fn empty_lexicon_reports_fatal_errors() {
        let empty = Lexicon::new(
            BTreeMap::new(),
            BTreeMap::new(),
            Vec::new(),
            BTreeMap::new(),
            Vec::new(),
        );
        assert!(matches!(
            empty.technologies_in(TechCategory::Development),
            Err(LexiconError::MissingTechnologyCategory(_))
        ));
        assert!(matches!(
            empty.role_catalog(OrgLevel::Executive),
            Err(LexiconError::MissingRoleCatalog(_))
        ));
        assert_eq!(
            empty.project_templates(),
            Err(LexiconError::NoProjectTemplates)
        );
        assert!(matches!(
            empty.name_pool(Locale::English),
            Err(LexiconError::MissingNamePool(_))
        ));
    }
}
