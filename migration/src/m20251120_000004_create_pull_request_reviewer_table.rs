use sea_orm_migration::{prelude::*, schema::*};

use super::m20251120_000002_create_user_table::User;
use super::m20251120_000003_create_pull_request_table::PullRequest;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PullRequestReviewer::Table)
                    .if_not_exists()
                    .col(string(PullRequestReviewer::PullRequestId))
                    .col(string(PullRequestReviewer::ReviewerId))
                    .primary_key(
                        Index::create()
                            .col(PullRequestReviewer::PullRequestId)
                            .col(PullRequestReviewer::ReviewerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pull_request_reviewers_pull_request_id")
                            .from(
                                PullRequestReviewer::Table,
                                PullRequestReviewer::PullRequestId,
                            )
                            .to(PullRequest::Table, PullRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pull_request_reviewers_reviewer_id")
                            .from(PullRequestReviewer::Table, PullRequestReviewer::ReviewerId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pull_request_reviewers_reviewer_id")
                    .table(PullRequestReviewer::Table)
                    .col(PullRequestReviewer::ReviewerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PullRequestReviewer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PullRequestReviewer {
    #[sea_orm(iden = "pull_request_reviewers")]
    Table,
    PullRequestId,
    ReviewerId,
}
