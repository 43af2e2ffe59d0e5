use sea_orm_migration::{prelude::*, schema::*};

use super::m20251120_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string(User::Username))
                    .col(boolean(User::IsActive).default(true))
                    .col(string(User::TeamName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_team_name")
                            .from(User::Table, User::TeamName)
                            .to(Team::Table, Team::Name),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_team_name_is_active")
                    .table(User::Table)
                    .col(User::TeamName)
                    .col(User::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    IsActive,
    TeamName,
}
