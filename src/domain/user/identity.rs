//! Identity value object.

use crate::domain::foundation::ValidationError;

/// A fully allocated identity: an ASCII display name, a locale-flavored
/// rendering of the same name, and the unique login handle derived from it.
///
/// Identities are only produced by the identity allocator, which guarantees
/// that `name` and `username` are unique within one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    true_name: String,
    username: String,
}

impl Identity {
    /// Creates an identity, rejecting empty components.
    pub fn new(
        name: impl Into<String>,
        true_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let true_name = true_name.into();
        let username = username.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if true_name.trim().is_empty() {
            return Err(ValidationError::empty_field("true_name"));
        }
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }

        Ok(Self {
            name,
            true_name,
            username,
        })
    }

    /// Returns the ASCII display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the locale-flavored rendering of the name.
    pub fn true_name(&self) -> &str {
        &self.true_name
    }

    /// Returns the login handle.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Consumes the identity, returning its parts.
    pub(crate) fn into_parts(self) -> (String, String, String) {
        (self.name, self.true_name, self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_accepts_distinct_renderings() {
        let id = Identity::new("Jose Garcia", "José García", "jose_garcia").unwrap();
        assert_eq!(id.name(), "Jose Garcia");
        assert_eq!(id.true_name(), "José García");
        assert_eq!(id.username(), "jose_garcia");
    }

    #[test]
    fn identity_rejects_empty_name() {
        assert!(Identity::new("", "x", "y").is_err());
    }

    #[test]
    fn identity_rejects_blank_username() {
        assert!(Identity::new("Ann Lee", "Ann Lee", "   ").is_err());
    }
}
