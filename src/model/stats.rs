use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewerLoadDto {
    pub user_id: String,
    pub review_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewerStatsDto {
    pub items: Vec<ReviewerLoadDto>,
}
