use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmLinkStore;
pub use models::{Link, NewLink};

/// Result of an insert attempt. Conflicts are ordinary outcomes here; the
/// service layer decides whether they are retryable.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Inserted(Link),
    /// A concurrent request committed the same identifier first.
    DuplicateLink,
    /// A concurrent request committed the same target first.
    DuplicateTarget,
}

/// Durable mapping from short link identifier to target URL.
///
/// Implementations must reject a conflicting insert (duplicate identifier
/// or duplicate target) at commit time. The core holds no in-process lock
/// across operations and relies entirely on these guarantees.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Existence probe by identifier. Must not fetch the full record.
    async fn exists_link(&self, link: &str) -> Result<bool>;

    /// Look up a record by its exact target string.
    async fn find_by_target(&self, target: &str) -> Result<Option<Link>>;

    /// Look up a record by identifier.
    async fn get(&self, link: &str) -> Result<Option<Link>>;

    /// Atomically persist a new record.
    async fn insert(&self, link: NewLink) -> Result<InsertOutcome>;

    /// Hard, non-recoverable removal. Returns `NotFound` if no record
    /// matched.
    async fn remove(&self, link: &str) -> Result<()>;

    async fn backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn LinkStore>> {
        let backend_type = backend::infer_backend_from_url(&config.database_url)?;
        let store = SeaOrmLinkStore::new(&config.database_url, &backend_type).await?;
        Ok(Arc::new(store))
    }
}
