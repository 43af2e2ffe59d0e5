use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamMemberDto {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<TeamMemberDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamResponseDto {
    pub team: TeamDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeactivateTeamUsersDto {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub user_ids: Vec<String>,
}

/// Outcome of a bulk deactivation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeactivationSummaryDto {
    pub team_name: String,
    pub deactivated: Vec<String>,
    pub reassigned_reviewers: u64,
    pub removed_reviewers: u64,
    pub affected_pull_requests: u64,
}
