use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::ReviewerStatsDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get review counts per reviewer.
///
/// Counts open and merged pull requests. Users without reviews are omitted.
///
/// # Returns
/// - `200 OK` - Reviewers ordered by count descending, then by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/stats/reviewers",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Review counts per reviewer", body = ReviewerStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviewer_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let load = StatsService::new(&state.db).reviewer_load().await?;

    Ok((
        StatusCode::OK,
        Json(ReviewerStatsDto {
            items: load.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}
