use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::pull_request::PullRequestShortDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetIsActiveDto {
    #[serde(default)]
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserReviewsDto {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortDto>,
}
