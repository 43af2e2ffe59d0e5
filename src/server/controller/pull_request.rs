use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        pull_request::{
            CreatePullRequestDto, MergePullRequestDto, PullRequestResponseDto,
            ReassignResponseDto, ReassignReviewerDto,
        },
    },
    server::{
        controller::require_non_empty,
        error::AppError,
        model::{assignment::ReassignReviewerParam, pull_request::CreatePullRequestParam},
        service::pull_request::PullRequestService,
        state::AppState,
    },
};

/// Tag for grouping pull request endpoints in OpenAPI documentation
pub static PULL_REQUEST_TAG: &str = "pullRequest";

/// Open a pull request.
///
/// Up to two reviewers are picked at random from the active members of the author's
/// team, never the author.
///
/// # Returns
/// - `201 Created` - Pull request with assigned reviewers
/// - `400 Bad Request` - Required field missing
/// - `404 Not Found` - Author or author's team does not exist
/// - `409 Conflict` - Pull request id already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/pullRequest/create",
    tag = PULL_REQUEST_TAG,
    request_body = CreatePullRequestDto,
    responses(
        (status = 201, description = "Pull request created", body = PullRequestResponseDto),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 404, description = "Author or team not found", body = ErrorDto),
        (status = 409, description = "Pull request already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pull_request(
    State(state): State<AppState>,
    Json(payload): Json<CreatePullRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("pull_request_id", &payload.pull_request_id)?;
    require_non_empty("pull_request_name", &payload.pull_request_name)?;
    require_non_empty("author_id", &payload.author_id)?;

    let pr = PullRequestService::new(&state.db, &state.picker)
        .create(CreatePullRequestParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PullRequestResponseDto { pr: pr.into_dto() }),
    ))
}

/// Merge a pull request.
///
/// Merging an already merged pull request succeeds and keeps the original merge time.
///
/// # Returns
/// - `200 OK` - Merged pull request
/// - `400 Bad Request` - `pull_request_id` missing
/// - `404 Not Found` - Pull request does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/pullRequest/merge",
    tag = PULL_REQUEST_TAG,
    request_body = MergePullRequestDto,
    responses(
        (status = 200, description = "Merged pull request", body = PullRequestResponseDto),
        (status = 400, description = "pull_request_id missing", body = ErrorDto),
        (status = 404, description = "Pull request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn merge_pull_request(
    State(state): State<AppState>,
    Json(payload): Json<MergePullRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("pull_request_id", &payload.pull_request_id)?;

    let pr = PullRequestService::new(&state.db, &state.picker)
        .merge(&payload.pull_request_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PullRequestResponseDto { pr: pr.into_dto() }),
    ))
}

/// Replace one reviewer of an open pull request.
///
/// The replacement is a random active teammate of the outgoing reviewer who is neither
/// the author nor already assigned.
///
/// # Returns
/// - `200 OK` - Updated pull request and the replacement's id
/// - `400 Bad Request` - Required field missing
/// - `404 Not Found` - Pull request or user does not exist
/// - `409 Conflict` - Pull request merged, user not assigned, or no candidate
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/pullRequest/reassign",
    tag = PULL_REQUEST_TAG,
    request_body = ReassignReviewerDto,
    responses(
        (status = 200, description = "Reviewer replaced", body = ReassignResponseDto),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 404, description = "Pull request or user not found", body = ErrorDto),
        (status = 409, description = "Merged, not assigned or no candidate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reassign_reviewer(
    State(state): State<AppState>,
    Json(payload): Json<ReassignReviewerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReassignReviewerParam::from_dto(payload);
    require_non_empty("pull_request_id", &param.pull_request_id)?;
    require_non_empty("old_user_id", &param.old_reviewer_id)?;

    let outcome = PullRequestService::new(&state.db, &state.picker)
        .reassign(param)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
