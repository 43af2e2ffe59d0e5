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
        team::{DeactivateTeamUsersDto, DeactivationSummaryDto, TeamDto, TeamResponseDto},
    },
    server::{
        controller::require_non_empty,
        error::AppError,
        model::team::{CreateTeamParam, DeactivateTeamUsersParam},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, IntoParams)]
pub struct TeamQuery {
    /// Name of the team
    #[serde(default)]
    pub team_name: String,
}

/// Create a team with its members.
///
/// Members that already exist are moved into the new team and take the provided
/// username and active flag.
///
/// # Returns
/// - `201 Created` - Team with members ordered by id
/// - `400 Bad Request` - Team name missing or already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/team/add",
    tag = TEAM_TAG,
    request_body = TeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamResponseDto),
        (status = 400, description = "Team name missing or already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team(
    State(state): State<AppState>,
    Json(payload): Json<TeamDto>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("team_name", &payload.team_name)?;
    for member in &payload.members {
        require_non_empty("user_id", &member.user_id)?;
    }

    let team = TeamService::new(&state.db)
        .create(CreateTeamParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TeamResponseDto {
            team: team.into_dto(),
        }),
    ))
}

/// Get a team with its members.
///
/// # Returns
/// - `200 OK` - Team with members ordered by id
/// - `400 Bad Request` - `team_name` query parameter missing
/// - `404 Not Found` - Team does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/team/get",
    tag = TEAM_TAG,
    params(TeamQuery),
    responses(
        (status = 200, description = "Team with members", body = TeamDto),
        (status = 400, description = "team_name missing", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("team_name", &query.team_name)?;

    let team = TeamService::new(&state.db).get(&query.team_name).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Deactivate team members and hand their open reviews to teammates.
///
/// Users are processed in the given order and the first failure aborts; users
/// processed before the failure stay deactivated. Reviews on open pull requests move
/// to another active teammate or are dropped when nobody is eligible.
///
/// # Returns
/// - `200 OK` - Summary of deactivated users and changed reviews
/// - `400 Bad Request` - `team_name` missing
/// - `404 Not Found` - A user does not exist or belongs to another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/team/deactivateAndReassign",
    tag = TEAM_TAG,
    request_body = DeactivateTeamUsersDto,
    responses(
        (status = 200, description = "Deactivation summary", body = DeactivationSummaryDto),
        (status = 400, description = "team_name missing", body = ErrorDto),
        (status = 404, description = "User not found or not in team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_and_reassign(
    State(state): State<AppState>,
    Json(payload): Json<DeactivateTeamUsersDto>,
) -> Result<impl IntoResponse, AppError> {
    require_non_empty("team_name", &payload.team_name)?;

    let summary = TeamService::new(&state.db)
        .deactivate_and_reassign(&state.picker, DeactivateTeamUsersParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
