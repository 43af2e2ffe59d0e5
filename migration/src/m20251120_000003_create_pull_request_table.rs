use sea_orm_migration::{prelude::*, schema::*};

use super::m20251120_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PullRequest::Table)
                    .if_not_exists()
                    .col(string(PullRequest::Id).primary_key())
                    .col(string(PullRequest::Name))
                    .col(string(PullRequest::AuthorId))
                    .col(string_len(PullRequest::Status, 16))
                    .col(timestamp_with_time_zone(PullRequest::CreatedAt))
                    .col(timestamp_with_time_zone_null(PullRequest::MergedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pull_requests_author_id")
                            .from(PullRequest::Table, PullRequest::AuthorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PullRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PullRequest {
    #[sea_orm(iden = "pull_requests")]
    Table,
    Id,
    Name,
    AuthorId,
    Status,
    CreatedAt,
    MergedAt,
}
