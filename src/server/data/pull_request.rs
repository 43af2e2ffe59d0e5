//! Pull request data repository.
//!
//! This module provides the `PullRequestRepository` for creating pull requests with their
//! initial reviewers, merging them and listing the pull requests a user reviews. Reviewer
//! bindings are read through `ReviewerRepository` so every returned `PullRequest` carries
//! its reviewers ordered by id.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};

use crate::server::{
    data::reviewer::ReviewerRepository,
    error::store::StoreError,
    model::pull_request::{
        InsertPullRequestParam, PullRequest, PullRequestShort, PullRequestStatus,
    },
};

/// Repository providing database operations for pull requests.
pub struct PullRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PullRequestRepository<'a, C> {
    /// Creates a new PullRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `PullRequestRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a pull request with its reviewers.
    ///
    /// # Returns
    /// - `Ok(Some(PullRequest))` - Pull request found
    /// - `Ok(None)` - No pull request with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, pull_request_id: &str) -> Result<Option<PullRequest>, DbErr> {
        let Some(entity) = entity::prelude::PullRequest::find_by_id(pull_request_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let reviewers = ReviewerRepository::new(self.db)
            .get_by_pull_request(pull_request_id)
            .await?;

        Ok(Some(PullRequest::from_entity(entity, reviewers)))
    }

    /// Marks an open pull request as merged.
    ///
    /// Only rows still `OPEN` are written, so a second merge keeps the original
    /// `merged_at`. The current row is returned in either case.
    ///
    /// # Returns
    /// - `Ok(Some(PullRequest))` - Pull request in `MERGED` state
    /// - `Ok(None)` - No pull request with that id
    /// - `Err(DbErr)` - Database error during update or query
    pub async fn mark_merged(&self, pull_request_id: &str) -> Result<Option<PullRequest>, DbErr> {
        entity::prelude::PullRequest::update_many()
            .col_expr(
                entity::pull_request::Column::Status,
                Expr::value(PullRequestStatus::Merged.into_entity()),
            )
            .col_expr(
                entity::pull_request::Column::MergedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::pull_request::Column::Id.eq(pull_request_id))
            .filter(entity::pull_request::Column::Status.eq(PullRequestStatus::Open.into_entity()))
            .exec(self.db)
            .await?;

        self.find_by_id(pull_request_id).await
    }

    /// Gets pull requests where the user is an assigned reviewer.
    ///
    /// Includes both open and merged pull requests, newest first.
    pub async fn get_by_reviewer(&self, reviewer_id: &str) -> Result<Vec<PullRequestShort>, DbErr> {
        let entities = entity::prelude::PullRequest::find()
            .join(
                JoinType::InnerJoin,
                entity::pull_request::Relation::PullRequestReviewer.def(),
            )
            .filter(entity::pull_request_reviewer::Column::ReviewerId.eq(reviewer_id))
            .order_by_desc(entity::pull_request::Column::CreatedAt)
            .order_by_asc(entity::pull_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PullRequestShort::from_entity)
            .collect())
    }
}

impl<'a> PullRequestRepository<'a, DatabaseConnection> {
    /// Creates an open pull request and binds its reviewers in one transaction.
    ///
    /// # Arguments
    /// - `param` - Pull request id, name, author and chosen reviewers
    ///
    /// # Returns
    /// - `Ok(PullRequest)` - Created pull request with reviewers ordered by id
    /// - `Err(StoreError::PullRequestExists)` - Id already taken; nothing was written
    /// - `Err(StoreError::Db)` - Database error; the transaction was rolled back
    pub async fn create(&self, param: InsertPullRequestParam) -> Result<PullRequest, StoreError> {
        let txn = self.db.begin().await?;
        let repo = PullRequestRepository::new(&txn);

        let existing = entity::prelude::PullRequest::find_by_id(param.id.clone())
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(StoreError::PullRequestExists(param.id));
        }

        entity::pull_request::ActiveModel {
            id: ActiveValue::Set(param.id.clone()),
            name: ActiveValue::Set(param.name),
            author_id: ActiveValue::Set(param.author_id),
            status: ActiveValue::Set(PullRequestStatus::Open.into_entity()),
            created_at: ActiveValue::Set(Utc::now()),
            merged_at: ActiveValue::Set(None),
        }
        .insert(&txn)
        .await?;

        let reviewer_repo = ReviewerRepository::new(&txn);
        for reviewer_id in &param.reviewers {
            reviewer_repo.insert(&param.id, reviewer_id).await?;
        }

        let pull_request = repo.find_by_id(&param.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Pull request {} not found after creation", param.id))
        })?;

        txn.commit().await?;

        Ok(pull_request)
    }
}
