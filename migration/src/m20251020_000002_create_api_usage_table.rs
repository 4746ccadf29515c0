use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to api_user: usage rows are removed explicitly
        // alongside their user.
        manager
            .create_table(
                Table::create()
                    .table(ApiUsage::Table)
                    .if_not_exists()
                    .col(string(ApiUsage::UserId))
                    .col(timestamp_with_time_zone(ApiUsage::CreatedAt))
                    .col(string(ApiUsage::Action))
                    .primary_key(
                        Index::create()
                            .col(ApiUsage::UserId)
                            .col(ApiUsage::CreatedAt),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApiUsage {
    Table,
    UserId,
    CreatedAt,
    Action,
}
