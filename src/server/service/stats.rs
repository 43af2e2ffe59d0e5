use sea_orm::DatabaseConnection;

use crate::server::{data::reviewer::ReviewerRepository, error::AppError, model::stats::ReviewerLoad};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the number of reviewer bindings per user, busiest first
    pub async fn reviewer_load(&self) -> Result<Vec<ReviewerLoad>, AppError> {
        Ok(ReviewerRepository::new(self.db).get_load().await?)
    }
}
