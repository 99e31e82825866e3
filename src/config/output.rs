//! Output document configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Output document configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Where to write the generated document
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Pretty-print the JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// When the output file already exists, carry its project count over
    /// into the new run so downstream tools see a stable shape.
    #[serde(default = "default_reuse_project_count")]
    pub reuse_project_count: bool,
}

impl OutputConfig {
    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputPath);
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: default_pretty(),
            reuse_project_count: default_reuse_project_count(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("company_data.json")
}

fn default_pretty() -> bool {
    true
}

fn default_reuse_project_count() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.path(), Path::new("company_data.json"));
        assert!(config.pretty);
        assert!(config.reuse_project_count);
    }

    #[test]
    fn test_validation_empty_path() {
        let config = OutputConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
