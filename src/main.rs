//! Company snapshot generator binary.
//!
//! Loads configuration from the environment, synthesizes one company
//! document, verifies its invariants and writes it to disk as JSON.

use std::fs;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use orgsynth::config::{AppConfig, ConfigError};
use orgsynth::domain::company::{CompanyData, ConsistencyError};
use orgsynth::generator::{CompanyGenerator, GeneratorError};
use orgsynth::lexicon::Lexicon;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("generated document failed verification: {0}")]
    Consistency(#[from] ConsistencyError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let project_count = resolve_project_count(&config);

    let lexicon = Lexicon::builtin();
    let mut generator = match config.generation.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            CompanyGenerator::seeded(lexicon, seed)
        }
        None => CompanyGenerator::from_entropy(lexicon),
    };

    let data = generator.generate(config.generation.user_count, project_count)?;
    data.verify()?;

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };
    fs::write(config.output.path(), json)?;

    info!(
        users = data.user_count(),
        projects = data.project_count(),
        path = %config.output.path().display(),
        "company snapshot written"
    );
    Ok(())
}

/// Resolves how many projects this run should synthesize.
///
/// When `output.reuse_project_count` is set and the output file already
/// holds a parseable document, its project count wins over the configured
/// one so repeated runs keep a stable shape for downstream tools. Any read
/// or parse failure falls back to the configured count.
fn resolve_project_count(config: &AppConfig) -> usize {
    if !config.output.reuse_project_count {
        return config.generation.project_count;
    }
    let existing = fs::read_to_string(config.output.path())
        .ok()
        .and_then(|raw| serde_json::from_str::<CompanyData>(&raw).ok());
    match existing {
        Some(previous) if previous.project_count() > 0 => {
            let count = previous.project_count();
            if count != config.generation.project_count {
                warn!(
                    configured = config.generation.project_count,
                    reused = count,
                    "reusing project count from existing document"
                );
            }
            count
        }
        _ => config.generation.project_count,
    }
}
