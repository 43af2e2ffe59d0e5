use sea_orm::DatabaseConnection;

use crate::server::{
    data::pull_request::PullRequestRepository,
    error::{review::ReviewError, AppError},
    model::{
        assignment::{ReassignOutcome, ReassignReviewerParam},
        pull_request::{CreatePullRequestParam, InsertPullRequestParam, PullRequest},
    },
    service::assignment::{picker::ReviewerPicker, AssignmentService},
};

pub struct PullRequestService<'a> {
    db: &'a DatabaseConnection,
    picker: &'a ReviewerPicker,
}

impl<'a> PullRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection, picker: &'a ReviewerPicker) -> Self {
        Self { db, picker }
    }

    /// Opens a pull request with up to two reviewers from the author's team
    pub async fn create(&self, param: CreatePullRequestParam) -> Result<PullRequest, AppError> {
        let reviewers = AssignmentService::new(self.db, self.picker)
            .select_reviewers(&param.author_id)
            .await?;

        let pull_request = PullRequestRepository::new(self.db)
            .create(InsertPullRequestParam {
                id: param.id,
                name: param.name,
                author_id: param.author_id,
                reviewers,
            })
            .await?;

        tracing::info!(
            pull_request_id = %pull_request.id,
            reviewers = ?pull_request.assigned_reviewers,
            "Created pull request"
        );

        Ok(pull_request)
    }

    /// Merges a pull request
    ///
    /// Merging an already merged pull request succeeds and keeps the original timestamp.
    pub async fn merge(&self, pull_request_id: &str) -> Result<PullRequest, AppError> {
        PullRequestRepository::new(self.db)
            .mark_merged(pull_request_id)
            .await?
            .ok_or_else(|| {
                ReviewError::NotFound(format!("pull request {} not found", pull_request_id)).into()
            })
    }

    /// Replaces one reviewer of an open pull request
    pub async fn reassign(&self, param: ReassignReviewerParam) -> Result<ReassignOutcome, AppError> {
        AssignmentService::new(self.db, self.picker)
            .reassign(param)
            .await
    }
}
