//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. It handles member
//! upserts during team creation, activity toggles and team-scoped queries, converting
//! entity models into domain models at the boundary.

use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so it can run inside a team-creation transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user or overwrites an existing one with the same id.
    ///
    /// On conflict the username, active flag and team are replaced, which moves an
    /// existing user into the team named in `param`.
    ///
    /// # Arguments
    /// - `param` - User id, display name, active flag and team
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            username: ActiveValue::Set(param.username),
            is_active: ActiveValue::Set(param.is_active),
            team_name: ActiveValue::Set(param.team_name),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .update_columns([
                    entity::user::Column::Username,
                    entity::user::Column::IsActive,
                    entity::user::Column::TeamName,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Sets the active flag of a user and returns the updated record.
    ///
    /// The flag is written with a single UPDATE; the row is read back afterwards.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update or query
    pub async fn set_active(&self, user_id: &str, is_active: bool) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, Expr::value(is_active))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(user_id).await
    }

    /// Gets all members of a team ordered by id.
    ///
    /// Returns an empty list for unknown teams; callers check team existence separately.
    pub async fn get_by_team(&self, team_name: &str) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::TeamName.eq(team_name))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets the active members of a team ordered by id.
    ///
    /// # Returns
    /// - `Ok(Some(users))` - Team exists; list may be empty when nobody is active
    /// - `Ok(None)` - Team does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_by_team(&self, team_name: &str) -> Result<Option<Vec<User>>, DbErr> {
        let team = entity::prelude::Team::find_by_id(team_name.to_string())
            .one(self.db)
            .await?;
        if team.is_none() {
            return Ok(None);
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::TeamName.eq(team_name))
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(entities.into_iter().map(User::from_entity).collect()))
    }
}
