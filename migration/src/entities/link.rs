use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "links")]
pub struct Model {
    /// Internal surrogate key. Never leaves the storage layer.
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub link: String,
    #[sea_orm(column_type = "Text")]
    pub target_url: String,
    /// SHA-256 hex of `target_url`; carries the unique index, since a
    /// bounded key column works on every supported backend.
    #[sea_orm(unique)]
    pub target_hash: String,
    pub extras: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
