//! Read-only database operations for [`SeaOrmLinkStore`].

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use super::{SeaOrmLinkStore, model_to_link, target_hash};
use crate::errors::{Result, ShortgicError};
use crate::storage::models::Link;

use migration::entities::link;

impl SeaOrmLinkStore {
    /// Existence probe by identifier, selecting only the surrogate key.
    pub(crate) async fn exists_link_impl(&self, code: &str) -> Result<bool> {
        let found = link::Entity::find()
            .select_only()
            .column(link::Column::Id)
            .filter(link::Column::Link.eq(code))
            .into_tuple::<i64>()
            .one(self.db())
            .await
            .map_err(|e| {
                ShortgicError::persistence_failure(format!(
                    "Failed to check link existence: {}",
                    e
                ))
            })?;

        Ok(found.is_some())
    }

    pub(crate) async fn find_by_target_impl(&self, target: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::TargetHash.eq(target_hash(target)))
            .one(self.db())
            .await
            .map_err(|e| {
                ShortgicError::persistence_failure(format!("Failed to query link by target: {}", e))
            })?;

        Ok(model.map(model_to_link))
    }

    pub(crate) async fn get_impl(&self, code: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::Link.eq(code))
            .one(self.db())
            .await
            .map_err(|e| {
                ShortgicError::persistence_failure(format!("Failed to query link: {}", e))
            })?;

        Ok(model.map(model_to_link))
    }
}
