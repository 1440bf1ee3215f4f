//! Write operations for [`SeaOrmLinkStore`].

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, SqlErr};
use tracing::{info, warn};

use super::{SeaOrmLinkStore, target_hash};
use crate::errors::{Result, ShortgicError};
use crate::storage::models::{Link, NewLink};
use crate::storage::{InsertOutcome, LinkStore};

use migration::entities::link;

impl SeaOrmLinkStore {
    /// Insert a record, classifying commit-time unique violations.
    ///
    /// The insert is a single statement, so a rejected conflict leaves no
    /// partial state behind.
    pub(crate) async fn insert_impl(&self, new: NewLink) -> Result<InsertOutcome> {
        let created_at = Utc::now();

        let model = link::ActiveModel {
            id: NotSet,
            link: Set(new.link.clone()),
            target_url: Set(new.target.clone()),
            target_hash: Set(target_hash(&new.target)),
            extras: Set(new.extras.clone()),
            created_at: Set(created_at),
        };

        match link::Entity::insert(model).exec(self.db()).await {
            Ok(_) => {
                info!("Short link created: {} -> {}", new.link, new.target);
                Ok(InsertOutcome::Inserted(Link {
                    link: new.link,
                    target: new.target,
                    extras: new.extras,
                    created_at,
                }))
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    warn!("Insert conflict for '{}': {}", new.link, detail);
                    if detail.contains("target") {
                        Ok(InsertOutcome::DuplicateTarget)
                    } else {
                        Ok(InsertOutcome::DuplicateLink)
                    }
                }
                _ => Err(ShortgicError::persistence_failure(format!(
                    "Failed to insert link: {}",
                    err
                ))),
            },
        }
    }

    pub(crate) async fn remove_impl(&self, code: &str) -> Result<()> {
        let result = link::Entity::delete_many()
            .filter(link::Column::Link.eq(code))
            .exec(self.db())
            .await
            .map_err(|e| {
                ShortgicError::persistence_failure(format!("Failed to delete link: {}", e))
            })?;

        if result.rows_affected == 0 {
            return Err(ShortgicError::not_found(format!(
                "Short link does not exist: {}",
                code
            )));
        }

        info!("Short link deleted: {}", code);
        Ok(())
    }
}

#[async_trait]
impl LinkStore for SeaOrmLinkStore {
    async fn exists_link(&self, link: &str) -> Result<bool> {
        self.exists_link_impl(link).await
    }

    async fn find_by_target(&self, target: &str) -> Result<Option<Link>> {
        self.find_by_target_impl(target).await
    }

    async fn get(&self, link: &str) -> Result<Option<Link>> {
        self.get_impl(link).await
    }

    async fn insert(&self, link: NewLink) -> Result<InsertOutcome> {
        self.insert_impl(link).await
    }

    async fn remove(&self, link: &str) -> Result<()> {
        self.remove_impl(link).await
    }

    async fn backend_name(&self) -> String {
        self.backend().to_string()
    }
}
