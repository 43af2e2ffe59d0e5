//! Team data repository.
//!
//! Team creation is the one multi-table write on this side of the schema: the name check,
//! the team row and every member upsert share a transaction so a failing member leaves no
//! team behind.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    error::store::StoreError,
    model::{
        team::{CreateTeamParam, Team, TeamMember},
        user::UpsertUserParam,
    },
};

/// Repository providing database operations for teams and their members.
pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a team with this name exists.
    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let team = entity::prelude::Team::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(team.is_some())
    }

    /// Finds a team and its members ordered by user id.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found, possibly without members
    /// - `Ok(None)` - No team with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        if !self.exists(name).await? {
            return Ok(None);
        }

        let members = UserRepository::new(self.db)
            .get_by_team(name)
            .await?
            .into_iter()
            .map(TeamMember::from_user)
            .collect();

        Ok(Some(Team {
            name: name.to_string(),
            members,
        }))
    }
}

impl<'a> TeamRepository<'a, DatabaseConnection> {
    /// Creates a team and upserts its members in one transaction.
    ///
    /// Existing users listed as members are moved into the new team with the provided
    /// name and active flag. The returned team is read inside the same transaction.
    ///
    /// # Arguments
    /// - `param` - Team name and members
    ///
    /// # Returns
    /// - `Ok(Team)` - Created team with members ordered by id
    /// - `Err(StoreError::TeamExists)` - Team name already taken; nothing was written
    /// - `Err(StoreError::Db)` - Database error; the transaction was rolled back
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, StoreError> {
        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        if team_repo.exists(&param.name).await? {
            return Err(StoreError::TeamExists(param.name));
        }

        entity::team::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
        }
        .insert(&txn)
        .await?;

        let user_repo = UserRepository::new(&txn);
        for member in param.members {
            user_repo
                .upsert(UpsertUserParam {
                    id: member.user_id,
                    username: member.username,
                    is_active: member.is_active,
                    team_name: param.name.clone(),
                })
                .await?;
        }

        let team = team_repo
            .find_by_name(&param.name)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Team {} not found after creation", param.name))
            })?;

        txn.commit().await?;

        Ok(team)
    }
}
