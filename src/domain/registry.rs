//! The short-link registry: code generation, lookup, and lazy eviction.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use rand::distr::{Alphanumeric, SampleString};
use thiserror::Error;

use crate::domain::entry::Entry;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Upper bound on collision retries before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Failures when resolving a short code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The code was never issued, or was already evicted.
    #[error("short code not found")]
    NotFound,
    /// The code existed but its time-to-live has elapsed.
    #[error("short link expired")]
    Expired,
}

/// Code generation kept colliding with existing keys.
///
/// With a 62^6 keyspace this only happens when the registry is close to
/// saturation, but the retry loop is bounded so a pathological state fails
/// closed instead of spinning.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to generate a unique code after repeated collisions")]
pub struct CodeSpaceExhausted;

/// In-memory mapping from short code to [`Entry`].
///
/// All operations take `&self`; interior mutability goes through a single
/// mutex so that `create`'s probe-then-insert and `resolve`'s
/// check-then-evict are each atomic with respect to concurrent callers.
/// Neither operation performs I/O and the lock is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Mutex<HashMap<String, Entry>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh code mapping to `destination`.
    ///
    /// The destination is stored verbatim. When `ttl` is given the entry
    /// expires at `now + ttl`; zero and negative TTLs are legal and produce
    /// an entry that is already expired on its next resolution.
    ///
    /// Codes are drawn uniformly from the 62-symbol alphanumeric alphabet
    /// and rejection-sampled against every key still present in the map.
    /// Expired entries that have not been evicted yet keep their code
    /// reserved.
    ///
    /// # Errors
    ///
    /// Returns [`CodeSpaceExhausted`] if every candidate collided with an
    /// existing key.
    pub fn create(
        &self,
        destination: String,
        ttl: Option<Duration>,
    ) -> Result<String, CodeSpaceExhausted> {
        let expires_at = ttl.map(|ttl| Utc::now() + ttl);

        let mut entries = self.entries.lock().expect("registry lock poisoned");

        for attempt in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if entries.contains_key(&code) {
                tracing::warn!(attempt, code = %code, "code collision, retrying");
                continue;
            }

            entries.insert(code.clone(), Entry::new(destination, expires_at));
            return Ok(code);
        }

        Err(CodeSpaceExhausted)
    }

    /// Resolves a code to its destination.
    ///
    /// Expired entries are evicted here, on first access past their expiry
    /// instant; there is no background sweeper. The expiry check and the
    /// deletion happen under one lock, so concurrent resolvers of the same
    /// code observe exactly one [`ResolveError::Expired`], after which the
    /// code reads as [`ResolveError::NotFound`].
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] when the code is not present
    /// - [`ResolveError::Expired`] when this call observed the elapsed TTL
    pub fn resolve(&self, code: &str) -> Result<String, ResolveError> {
        let mut entries = self.entries.lock().expect("registry lock poisoned");

        let entry = entries.get(code).ok_or(ResolveError::NotFound)?;

        if entry.is_expired() {
            entries.remove(code);
            return Err(ResolveError::Expired);
        }

        Ok(entry.destination.clone())
    }

    /// Number of entries currently held, including expired entries that
    /// have not been evicted yet.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("registry lock poisoned").len()
    }

    /// Returns true when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Draws a `CODE_LENGTH`-character code uniformly from `[A-Za-z0-9]`.
fn generate_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), CODE_LENGTH)
}
