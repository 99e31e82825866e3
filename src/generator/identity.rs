//! Identity synthesizer.
//!
//! Owns the two uniqueness registries (names seen, handles issued) for one
//! generation run and allocates identities against them. A name and its
//! handle are committed together: a successful allocation never leaves one
//! registry updated without the other.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::user::Identity;
use crate::generator::IdentityExhausted;
use crate::lexicon::{Locale, NamePool};
use std::collections::HashSet;

/// Candidate names tried per allocation before giving up.
const MAX_NAME_ATTEMPTS: u32 = 64;

/// Stateful identity allocator for one generation run.
#[derive(Debug, Default)]
pub struct IdentityAllocator {
    used_names: HashSet<String>,
    used_usernames: HashSet<String>,
}

impl IdentityAllocator {
    /// Creates an allocator with empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many display names the run has consumed. Burned names
    /// (handle derivation failed) count too.
    pub fn names_used(&self) -> usize {
        self.used_names.len()
    }

    /// Returns how many handles have been issued.
    pub fn handles_issued(&self) -> usize {
        self.used_usernames.len()
    }

    /// Allocates a unique identity from the given locale pool.
    ///
    /// Draws candidate names until one is found that is both unseen and
    /// yields a free handle, then commits name and handle atomically. A
    /// fresh name whose every handle transformation is already taken is
    /// burned into the name registry and lost for the rest of the run.
    ///
    /// # Errors
    ///
    /// `IdentityExhausted` after `MAX_NAME_ATTEMPTS` candidates. Callers
    /// treat this as skip-and-continue.
    pub fn allocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pool: &NamePool,
        locale: Locale,
    ) -> Result<Identity, IdentityExhausted> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let (Some(first), Some(last)) = (
                pool.first_names().choose(rng),
                pool.last_names().choose(rng),
            ) else {
                break;
            };

            let name = format!("{} {}", first.ascii(), last.ascii());
            if self.used_names.contains(&name) {
                continue;
            }

            let Some(username) = self.free_handle(&name) else {
                self.used_names.insert(name);
                continue;
            };

            let true_name = if locale.surname_first() {
                format!("{} {}", last.native_or_ascii(), first.native_or_ascii())
            } else {
                format!("{} {}", first.native_or_ascii(), last.native_or_ascii())
            };

            let Ok(identity) = Identity::new(&name, &true_name, &username) else {
                continue;
            };
            self.used_names.insert(name);
            self.used_usernames.insert(username);
            return Ok(identity);
        }
        Err(IdentityExhausted {
            attempts: MAX_NAME_ATTEMPTS,
        })
    }

    /// Returns the first handle transformation not already issued.
    fn free_handle(&self, name: &str) -> Option<String> {
        handle_candidates(name)
            .into_iter()
            .find(|handle| !self.used_usernames.contains(handle))
    }
}

/// The fixed, ordered list of handle transformations for a display name.
fn handle_candidates(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();
    let (Some(&first), Some(&last)) = (parts.first(), parts.last()) else {
        return Vec::new();
    };

    vec![
        format!("{}_{}", first, last),
        format!("{}.{}", first, last),
        format!("{}{}", first, last),
        format!("{}{}", prefix(first, 1), last),
        format!("{}{}", first, prefix(last, 1)),
        format!("{}_{}", last, first),
        format!("{}{}", prefix(first, 2), last),
        format!("{}{}", first, prefix(last, 2)),
        format!("{}{}", last, prefix(first, 2)),
        format!("{}{}", prefix(first, 2), prefix(last, 2)),
    ]
}

fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
