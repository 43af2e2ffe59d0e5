use sea_orm::DatabaseConnection;

use crate::server::{
    data::{pull_request::PullRequestRepository, user::UserRepository},
    error::{review::ReviewError, AppError},
    model::{
        pull_request::PullRequestShort,
        user::{SetUserActiveParam, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets a user's active flag
    ///
    /// Existing reviewer bindings are left as they are; only future selections skip
    /// inactive users.
    pub async fn set_active(&self, param: SetUserActiveParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_active(&param.user_id, param.is_active)
            .await?
            .ok_or_else(|| ReviewError::NotFound(format!("user {} not found", param.user_id)))?;

        tracing::info!(user_id = %user.id, is_active = user.is_active, "Updated user activity");

        Ok(user)
    }

    /// Gets open and merged pull requests the user reviews, newest first
    ///
    /// Unknown users have no reviews, so this returns an empty list rather than an error.
    pub async fn get_reviews(&self, user_id: &str) -> Result<Vec<PullRequestShort>, AppError> {
        let reviews = PullRequestRepository::new(self.db)
            .get_by_reviewer(user_id)
            .await?;

        Ok(reviews)
    }
}
