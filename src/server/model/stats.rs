use crate::model::stats::ReviewerLoadDto;

/// Number of reviewer bindings held by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewerLoad {
    pub user_id: String,
    pub review_count: u64,
}

impl ReviewerLoad {
    pub fn into_dto(self) -> ReviewerLoadDto {
        ReviewerLoadDto {
            user_id: self.user_id,
            review_count: self.review_count,
        }
    }
}
