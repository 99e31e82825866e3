//! Generation parameters

use serde::Deserialize;

use super::error::ValidationError;

/// Bounds enforced on a generation request.
pub const MIN_USER_COUNT: usize = 10;
pub const MAX_USER_COUNT: usize = 100_000;
pub const MAX_PROJECT_COUNT: usize = 10_000;

/// Generation parameters: run size and reproducibility
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Target number of users to synthesize
    #[serde(default = "default_user_count")]
    pub user_count: usize,

    /// Number of projects to synthesize
    #[serde(default = "default_project_count")]
    pub project_count: usize,

    /// RNG seed. Unset means seed from OS entropy.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Validate generation parameters
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_count < MIN_USER_COUNT || self.user_count > MAX_USER_COUNT {
            return Err(ValidationError::UserCountOutOfRange {
                min: MIN_USER_COUNT,
                max: MAX_USER_COUNT,
                got: self.user_count,
            });
        }
        if self.project_count > MAX_PROJECT_COUNT {
            return Err(ValidationError::ProjectCountTooLarge {
                max: MAX_PROJECT_COUNT,
                got: self.project_count,
            });
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            user_count: default_user_count(),
            project_count: default_project_count(),
            seed: None,
        }
    }
}

fn default_user_count() -> usize {
    100
}

fn default_project_count() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.user_count, 100);
        assert_eq!(config.project_count, 20);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validation_user_count_too_small() {
        let config = GenerationConfig {
            user_count: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_user_count_too_large() {
        let config = GenerationConfig {
            user_count: 200_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_project_count_too_large() {
        let config = GenerationConfig {
            project_count: 20_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_projects_is_allowed() {
        let config = GenerationConfig {
            project_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
