use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Links::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Links::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Links::Link).string_len(20).not_null())
                    .col(ColumnDef::new(Links::TargetUrl).text().not_null())
                    .col(ColumnDef::new(Links::TargetHash).string_len(64).not_null())
                    .col(ColumnDef::new(Links::Extras).json().null())
                    .col(
                        ColumnDef::new(Links::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The unique indexes are the commit-time guard against concurrent
        // inserts of the same identifier or the same target. Target
        // uniqueness is enforced on the SHA-256 hash column: MySQL cannot
        // put a unique index on an unbounded TEXT column, and the hash
        // keeps the key width fixed on every backend.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_link")
                    .table(Links::Table)
                    .col(Links::Link)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_target_hash")
                    .table(Links::Table)
                    .col(Links::TargetHash)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_links_target_hash")
                    .table(Links::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_links_link")
                    .table(Links::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    Link,
    TargetUrl,
    TargetHash,
    Extras,
    CreatedAt,
}
