use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestStatusDto {
    Open,
    Merged,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PullRequestDto {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatusDto,
    pub assigned_reviewers: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PullRequestShortDto {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PullRequestResponseDto {
    pub pr: PullRequestDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePullRequestDto {
    #[serde(default)]
    pub pull_request_id: String,
    #[serde(default)]
    pub pull_request_name: String,
    #[serde(default)]
    pub author_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MergePullRequestDto {
    #[serde(default)]
    pub pull_request_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReassignReviewerDto {
    #[serde(default)]
    pub pull_request_id: String,
    /// Reviewer being replaced.
    #[serde(default)]
    pub old_user_id: String,
    /// Older name of `old_user_id`, read only when `old_user_id` is empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub old_reviewer_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReassignResponseDto {
    pub pr: PullRequestDto,
    pub replaced_by: String,
}
