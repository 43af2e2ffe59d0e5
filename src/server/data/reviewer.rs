//! Reviewer binding repository.
//!
//! A binding is one `(pull_request_id, reviewer_id)` row. Reassignment rewrites the
//! reviewer column of an existing binding in place so the pair never disappears and
//! reappears between statements.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::stats::ReviewerLoad;

/// Aggregated row of the reviewer load query.
#[derive(Debug, FromQueryResult)]
struct ReviewerLoadRow {
    reviewer_id: String,
    review_count: i64,
}

pub struct ReviewerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Binds a reviewer to a pull request.
    pub async fn insert(&self, pull_request_id: &str, reviewer_id: &str) -> Result<(), DbErr> {
        entity::pull_request_reviewer::ActiveModel {
            pull_request_id: ActiveValue::Set(pull_request_id.to_string()),
            reviewer_id: ActiveValue::Set(reviewer_id.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets reviewer ids of a pull request ordered by id.
    pub async fn get_by_pull_request(&self, pull_request_id: &str) -> Result<Vec<String>, DbErr> {
        let bindings = entity::prelude::PullRequestReviewer::find()
            .filter(entity::pull_request_reviewer::Column::PullRequestId.eq(pull_request_id))
            .order_by_asc(entity::pull_request_reviewer::Column::ReviewerId)
            .all(self.db)
            .await?;

        Ok(bindings.into_iter().map(|b| b.reviewer_id).collect())
    }

    /// Replaces `old_reviewer_id` with `new_reviewer_id` on a pull request.
    ///
    /// # Returns
    /// - `Ok(())` - Binding rewritten
    /// - `Err(DbErr::RecordNotUpdated)` - No binding for `old_reviewer_id` exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn reassign(
        &self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> Result<(), DbErr> {
        let result = entity::prelude::PullRequestReviewer::update_many()
            .col_expr(
                entity::pull_request_reviewer::Column::ReviewerId,
                Expr::value(new_reviewer_id.to_string()),
            )
            .filter(entity::pull_request_reviewer::Column::PullRequestId.eq(pull_request_id))
            .filter(entity::pull_request_reviewer::Column::ReviewerId.eq(old_reviewer_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Removes a reviewer from a pull request.
    ///
    /// Removing a binding that does not exist is a no-op.
    pub async fn remove(&self, pull_request_id: &str, reviewer_id: &str) -> Result<(), DbErr> {
        entity::prelude::PullRequestReviewer::delete_many()
            .filter(entity::pull_request_reviewer::Column::PullRequestId.eq(pull_request_id))
            .filter(entity::pull_request_reviewer::Column::ReviewerId.eq(reviewer_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts bindings per reviewer across open and merged pull requests.
    ///
    /// Users without bindings are absent. Ordered by count descending, then user id.
    pub async fn get_load(&self) -> Result<Vec<ReviewerLoad>, DbErr> {
        let rows = entity::prelude::PullRequestReviewer::find()
            .select_only()
            .column(entity::pull_request_reviewer::Column::ReviewerId)
            .column_as(
                entity::pull_request_reviewer::Column::PullRequestId.count(),
                "review_count",
            )
            .group_by(entity::pull_request_reviewer::Column::ReviewerId)
            .order_by_desc(entity::pull_request_reviewer::Column::PullRequestId.count())
            .order_by_asc(entity::pull_request_reviewer::Column::ReviewerId)
            .into_model::<ReviewerLoadRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ReviewerLoad {
                user_id: row.reviewer_id,
                review_count: u64::try_from(row.review_count).unwrap_or_default(),
            })
            .collect())
    }
}
