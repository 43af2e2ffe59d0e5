//! Route table and OpenAPI document.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorCode, ErrorDetailDto, ErrorDto, HealthDto},
        pull_request::{
            CreatePullRequestDto, MergePullRequestDto, PullRequestDto, PullRequestResponseDto,
            PullRequestShortDto, PullRequestStatusDto, ReassignResponseDto, ReassignReviewerDto,
        },
        stats::{ReviewerLoadDto, ReviewerStatsDto},
        team::{
            DeactivateTeamUsersDto, DeactivationSummaryDto, TeamDto, TeamMemberDto,
            TeamResponseDto,
        },
        user::{SetIsActiveDto, UserDto, UserResponseDto, UserReviewsDto},
    },
    server::{
        controller::{health, pull_request, stats, team, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reviewboard API",
        description = "Team membership and pull request reviewer assignment"
    ),
    tags(
        (name = "team", description = "Teams, members and bulk deactivation"),
        (name = "users", description = "User activity and review lists"),
        (name = "pullRequest", description = "Pull request lifecycle and reviewer reassignment"),
        (name = "stats", description = "Reviewer load"),
        (name = "health", description = "Liveness")
    ),
    paths(
        team::add_team,
        team::get_team,
        team::deactivate_and_reassign,
        user::set_is_active,
        user::get_reviews,
        pull_request::create_pull_request,
        pull_request::merge_pull_request,
        pull_request::reassign_reviewer,
        stats::get_reviewer_stats,
        health::health,
    ),
    components(schemas(
        ErrorCode,
        ErrorDetailDto,
        ErrorDto,
        HealthDto,
        TeamMemberDto,
        TeamDto,
        TeamResponseDto,
        DeactivateTeamUsersDto,
        DeactivationSummaryDto,
        UserDto,
        UserResponseDto,
        SetIsActiveDto,
        UserReviewsDto,
        PullRequestStatusDto,
        PullRequestDto,
        PullRequestShortDto,
        PullRequestResponseDto,
        CreatePullRequestDto,
        MergePullRequestDto,
        ReassignReviewerDto,
        ReassignResponseDto,
        ReviewerLoadDto,
        ReviewerStatsDto,
    ))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Mounts every API route, the Swagger UI at `/swagger-ui` backed by
/// `/api-docs/openapi.json`, and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/team/add", post(team::add_team))
        .route("/team/get", get(team::get_team))
        .route(
            "/team/deactivateAndReassign",
            post(team::deactivate_and_reassign),
        )
        .route("/users/setIsActive", post(user::set_is_active))
        .route("/users/getReview", get(user::get_reviews))
        .route("/pullRequest/create", post(pull_request::create_pull_request))
        .route("/pullRequest/merge", post(pull_request::merge_pull_request))
        .route("/pullRequest/reassign", post(pull_request::reassign_reviewer))
        .route("/stats/reviewers", get(stats::get_reviewer_stats))
        .route("/health", get(health::health))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
