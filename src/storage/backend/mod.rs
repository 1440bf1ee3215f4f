//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM, supporting SQLite,
//! MySQL/MariaDB, and PostgreSQL.

mod connection;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::errors::{Result, ShortgicError};
use crate::storage::models::Link;

pub use connection::{connect_generic, connect_sqlite, run_migrations};

use migration::entities::link;

/// Infer the database type from the connection URL.
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite://")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ShortgicError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported URL formats: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based link store
#[derive(Clone)]
pub struct SeaOrmLinkStore {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmLinkStore {
    /// Connect to the database, run pending migrations and return the store.
    pub async fn new(database_url: &str, backend_type: &str) -> Result<Self> {
        let db = match backend_type {
            "sqlite" => connect_sqlite(database_url).await?,
            other => connect_generic(database_url, other).await?,
        };

        run_migrations(&db).await?;

        Ok(Self {
            db,
            backend_name: backend_type.to_string(),
        })
    }

    pub(crate) fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub(crate) fn backend(&self) -> &str {
        &self.backend_name
    }
}

/// Fixed-width lookup key for target uniqueness. The unique index lives on
/// this hash because MySQL rejects unique indexes on unbounded TEXT columns.
pub(crate) fn target_hash(target: &str) -> String {
    hex::encode(Sha256::digest(target.as_bytes()))
}

pub(crate) fn model_to_link(model: link::Model) -> Link {
    Link {
        link: model.link,
        target: model.target_url,
        extras: model.extras,
        created_at: model.created_at,
    }
}
