use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorCode, ErrorDto};

/// Domain failures of team, user and pull request operations.
///
/// The set is closed: callers branch on variants (or on `code()`), never on messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Referenced team, user or pull request does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Team name is already taken.
    #[error("team {0} already exists")]
    TeamExists(String),

    /// Pull request id is already taken.
    #[error("pull request {0} already exists")]
    PullRequestExists(String),

    /// Reviewers of a merged pull request are frozen.
    #[error("cannot reassign on merged pull request {0}")]
    PullRequestMerged(String),

    /// The user to replace is not a reviewer of the pull request.
    #[error("reviewer {reviewer_id} is not assigned to pull request {pull_request_id}")]
    NotAssigned {
        pull_request_id: String,
        reviewer_id: String,
    },

    /// Nobody on the team is eligible to take over the review.
    #[error("no active replacement candidate in team {0}")]
    NoCandidate(String),
}

impl ReviewError {
    /// Stable classification used in error bodies.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::TeamExists(_) => ErrorCode::TeamExists,
            Self::PullRequestExists(_) => ErrorCode::PrExists,
            Self::PullRequestMerged(_) => ErrorCode::PrMerged,
            Self::NotAssigned { .. } => ErrorCode::NotAssigned,
            Self::NoCandidate(_) => ErrorCode::NoCandidate,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::TeamExists(_) => StatusCode::BAD_REQUEST,
            Self::PullRequestExists(_)
            | Self::PullRequestMerged(_)
            | Self::NotAssigned { .. }
            | Self::NoCandidate(_) => StatusCode::CONFLICT,
        }
    }
}

/// Converts domain failures into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `TeamExists`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `PullRequestExists`, `PullRequestMerged`, `NotAssigned`, `NoCandidate`
impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = self.status();
        let body = ErrorDto::new(self.code(), self.to_string());

        (status, Json(body)).into_response()
    }
}
