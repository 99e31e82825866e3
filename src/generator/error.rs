//! Generator error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::project::ProjectType;
use crate::lexicon::LexiconError;

/// Fatal generation errors. Anything here aborts the run; there is no
/// partial output to roll back because nothing leaves the generator until
/// the whole document is assembled.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The lexicon is missing data the generator needs.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// A generated entity failed its own construction invariants. This
    /// indicates a generator bug, not bad input.
    #[error("generated entity failed validation: {0}")]
    Validation(#[from] ValidationError),

    /// A project template carries no name prefixes.
    #[error("project template for '{0}' has no name prefixes")]
    EmptyTemplatePrefixes(ProjectType),
}

/// The identity allocator ran out of candidate names. Non-fatal: the caller
/// skips the slot, and the run's final headcount may undershoot the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no unique name/handle pair found after {attempts} candidate names")]
pub struct IdentityExhausted {
    pub attempts: u32,
}
