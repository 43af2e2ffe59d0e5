use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        user::{SetIsActiveDto, UserResponseDto, UserReviewsDto},
    },
    server::{
        controller::require_non_empty, error::AppError, model::user::SetUserActiveParam,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

#[derive(Deserialize, IntoParams)]
pub struct UserQuery {
    /// Id of the user
    #[serde(default)]
    pub user_id: String,
}

/// Set whether a user is active.
///
/// Inactive users are skipped by future reviewer selection; reviews they already hold
/// are kept.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - `user_id` missing
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/setIsActive",
    tag = USER_TAG,
    request_body = SetIsActiveDto,
    responses(
        (status = 200, description = "Updated user", body = UserResponseDto),
        (status = 400, description = "user_id missing", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_is_active(
    State(state): State<AppState>,
    Json(payload): Json<SetIsActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("user_id", &payload.user_id)?;

    let user = UserService::new(&state.db)
        .set_active(SetUserActiveParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            user: user.into_dto(),
        }),
    ))
}

/// Get pull requests a user reviews.
///
/// Lists open and merged pull requests, newest first.
///
/// # Returns
/// - `200 OK` - User id and reviewed pull requests
/// - `400 Bad Request` - `user_id` query parameter missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/getReview",
    tag = USER_TAG,
    params(UserQuery),
    responses(
        (status = 200, description = "Reviewed pull requests", body = UserReviewsDto),
        (status = 400, description = "user_id missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("user_id", &query.user_id)?;

    let reviews = UserService::new(&state.db).get_reviews(&query.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(UserReviewsDto {
            user_id: query.user_id,
            pull_requests: reviews.into_iter().map(|pr| pr.into_dto()).collect(),
        }),
    ))
}
