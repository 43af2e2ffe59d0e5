//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db).name("backend").build().await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"team_{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("team_{}", next_id()),
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
