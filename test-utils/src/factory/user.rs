//! User factory for creating test user entities.
//!
//! Users always belong to a team, so the factory takes the team name up front and
//! leaves the id, display name and active flag customizable.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, &team.name)
///     .id("u1")
///     .username("Alice")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    username: String,
    is_active: bool,
    team_name: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"u{id}"` zero-padded so generated ids sort in creation order
    /// - username: `"User {id}"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_name` - Name of an existing team the user belongs to
    pub fn new(db: &'a DatabaseConnection, team_name: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("u{:06}", id),
            username: format!("User {}", id),
            is_active: true,
            team_name: team_name.into(),
        }
    }

    /// Sets the user id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets whether the user is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            username: ActiveValue::Set(self.username),
            is_active: ActiveValue::Set(self.is_active),
            team_name: ActiveValue::Set(self.team_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active user with default values in the given team.
///
/// Shorthand for `UserFactory::new(db, team_name).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    team_name: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, team_name).build().await
}
