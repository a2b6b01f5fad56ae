//! Entry value stored in the registry for each issued code.

use chrono::{DateTime, Utc};

/// A single short-link mapping.
///
/// Holds the destination exactly as supplied by the caller; the registry
/// performs no validation or normalization of the stored string.
#[derive(Debug, Clone)]
pub struct Entry {
    pub destination: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Creates an entry expiring at `expires_at`, or never when `None`.
    pub fn new(destination: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            destination,
            expires_at,
        }
    }

    /// Returns true once the entry's expiry instant has been reached.
    ///
    /// Entries without an expiry never report expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}
