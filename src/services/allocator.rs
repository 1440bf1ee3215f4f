//! Short link allocation
//!
//! Draws random candidates and probes the store until an unused identifier
//! is found, bounded by a fixed attempt limit.

use tracing::debug;

use crate::errors::{Result, ShortgicError};
use crate::storage::LinkStore;
use crate::utils::generate_short_link;

/// Bounded-retry allocator for unique short link identifiers.
///
/// With 62^L possible identifiers (62^5 is roughly 916 million) collisions
/// are rare, so a handful of attempts is plenty. Exhausting the bound means
/// the identifier space is close to saturated at the configured length,
/// which is an operational alarm condition rather than a normal error.
#[derive(Debug, Clone, Copy)]
pub struct LinkAllocator {
    length: usize,
    max_attempts: usize,
}

impl LinkAllocator {
    pub fn new(length: usize, max_attempts: usize) -> Self {
        Self {
            length,
            max_attempts,
        }
    }

    /// Allocate an identifier not currently present in the store.
    ///
    /// Each attempt uses an existence-only probe, never a full-row fetch.
    pub async fn allocate(&self, store: &dyn LinkStore) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let candidate = generate_short_link(self.length);

            if !store.exists_link(&candidate).await? {
                return Ok(candidate);
            }

            debug!(
                "Short link collision on attempt {}/{}: {}",
                attempt, self.max_attempts, candidate
            );
        }

        Err(ShortgicError::allocation_exhausted(format!(
            "Unable to allocate a unique link after {} attempts; identifier space may be saturated at length {}",
            self.max_attempts, self.length
        )))
    }
}
