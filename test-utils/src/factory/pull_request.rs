//! Pull request factory for creating test pull requests and reviewer bindings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PullRequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pull requests.
///
/// Reviewer bindings listed through `reviewers` are inserted after the pull request row.
///
/// # Example
///
/// ```rust,ignore
/// let pr = PullRequestFactory::new(&db, &author.id)
///     .id("pr-1")
///     .reviewers([bob.id.clone(), carol.id.clone()])
///     .build()
///     .await?;
/// ```
pub struct PullRequestFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    author_id: String,
    status: PullRequestStatus,
    created_at: DateTime<Utc>,
    merged_at: Option<DateTime<Utc>>,
    reviewers: Vec<String>,
}

impl<'a> PullRequestFactory<'a> {
    /// Creates a new PullRequestFactory with default values.
    ///
    /// Defaults:
    /// - id: `"pr-{id}"` where id is auto-incremented
    /// - name: `"Pull Request {id}"`
    /// - status: `OPEN`, created now, never merged
    /// - reviewers: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - Id of an existing user authoring the pull request
    pub fn new(db: &'a DatabaseConnection, author_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("pr-{}", id),
            name: format!("Pull Request {}", id),
            author_id: author_id.into(),
            status: PullRequestStatus::Open,
            created_at: Utc::now(),
            merged_at: None,
            reviewers: Vec::new(),
        }
    }

    /// Sets the pull request id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the pull request name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the pull request as merged at the current time.
    pub fn merged(mut self) -> Self {
        self.status = PullRequestStatus::Merged;
        self.merged_at = Some(Utc::now());
        self
    }

    /// Sets the reviewer ids bound to the pull request.
    pub fn reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviewers = reviewers.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the pull request and its reviewer bindings.
    ///
    /// # Returns
    /// - `Ok(entity::pull_request::Model)` - Created pull request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pull_request::Model, DbErr> {
        let pull_request = entity::pull_request::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            author_id: ActiveValue::Set(self.author_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            merged_at: ActiveValue::Set(self.merged_at),
        }
        .insert(self.db)
        .await?;

        for reviewer_id in self.reviewers {
            entity::pull_request_reviewer::ActiveModel {
                pull_request_id: ActiveValue::Set(pull_request.id.clone()),
                reviewer_id: ActiveValue::Set(reviewer_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(pull_request)
    }
}

/// Creates an open pull request without reviewers.
///
/// Shorthand for `PullRequestFactory::new(db, author_id).build().await`.
pub async fn create_pull_request(
    db: &DatabaseConnection,
    author_id: impl Into<String>,
) -> Result<entity::pull_request::Model, DbErr> {
    PullRequestFactory::new(db, author_id).build().await
}
