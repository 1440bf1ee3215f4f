//! Link management service
//!
//! Owns all business invariants: identifier and target uniqueness, format
//! validation before store access, and well-defined failure semantics under
//! concurrent access. Shared between HTTP handlers and tests; holds no lock
//! of its own and relies on the store's commit-time conflict rejection.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::LinkConfig;
use crate::errors::{Result, ShortgicError};
use crate::services::LinkAllocator;
use crate::storage::{InsertOutcome, Link, LinkStore, NewLink};
use crate::utils::is_valid_short_link;
use crate::utils::url_validator::validate_target;

pub struct LinkService {
    store: Arc<dyn LinkStore>,
    settings: LinkConfig,
    allocator: LinkAllocator,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>, settings: LinkConfig) -> Self {
        let allocator = LinkAllocator::new(settings.link_length, settings.max_generate_attempts);
        Self {
            store,
            settings,
            allocator,
        }
    }

    /// Reject malformed identifiers before any store access.
    fn validate_format(&self, link: &str) -> Result<()> {
        if !is_valid_short_link(link, self.settings.link_length) {
            return Err(ShortgicError::invalid_format(format!(
                "Link must be exactly {} alphanumeric characters",
                self.settings.link_length
            )));
        }
        Ok(())
    }

    /// Create a short link for `target`.
    ///
    /// Duplicate targets are rejected, not merged; the error carries the
    /// identifier already mapped to the target. Losing an insert race on the
    /// identifier is absorbed by re-allocating; losing one on the target
    /// surfaces as the same duplicate error as the up-front check.
    pub async fn create(
        &self,
        target: &str,
        extras: Option<serde_json::Value>,
    ) -> Result<Link> {
        let target = validate_target(target, self.settings.max_url_length)
            .map_err(|e| ShortgicError::validation(e.to_string()))?;

        if let Some(existing) = self.store.find_by_target(&target).await? {
            info!(
                "Duplicate target rejected: {} already mapped to '{}'",
                target, existing.link
            );
            return Err(ShortgicError::duplicate_target(existing.link));
        }

        for _ in 0..self.settings.max_generate_attempts {
            let link = self.allocator.allocate(self.store.as_ref()).await?;

            let outcome = self
                .store
                .insert(NewLink {
                    link,
                    target: target.clone(),
                    extras: extras.clone(),
                })
                .await?;

            match outcome {
                InsertOutcome::Inserted(created) => {
                    info!("Created link '{}' -> '{}'", created.link, created.target);
                    return Ok(created);
                }
                InsertOutcome::DuplicateLink => {
                    // Lost the allocation race; draw again.
                    warn!("Insert race on identifier, retrying allocation");
                    continue;
                }
                InsertOutcome::DuplicateTarget => {
                    // Lost the dedup race; report the winner's identifier.
                    return match self.store.find_by_target(&target).await? {
                        Some(existing) => Err(ShortgicError::duplicate_target(existing.link)),
                        None => Err(ShortgicError::persistence_failure(
                            "Target conflict reported but no existing record found".to_string(),
                        )),
                    };
                }
            }
        }

        error!(
            "Gave up creating link for {} after {} insert races",
            target, self.settings.max_generate_attempts
        );
        Err(ShortgicError::allocation_exhausted(format!(
            "Unable to allocate a unique link after {} attempts; identifier space may be saturated at length {}",
            self.settings.max_generate_attempts, self.settings.link_length
        )))
    }

    /// Resolve an identifier to its stored target URL.
    pub async fn resolve(&self, link: &str) -> Result<String> {
        Ok(self.info(link).await?.target)
    }

    /// Fetch the full record for an identifier.
    pub async fn info(&self, link: &str) -> Result<Link> {
        self.validate_format(link)?;

        self.store
            .get(link)
            .await?
            .ok_or_else(|| {
                ShortgicError::not_found(format!("The requested short link does not exist: {}", link))
            })
    }

    /// Remove a link. Unconditional and irreversible.
    pub async fn delete(&self, link: &str) -> Result<()> {
        self.validate_format(link)?;

        self.store.remove(link).await?;
        info!("Deleted link '{}'", link);
        Ok(())
    }
}
