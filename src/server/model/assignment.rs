//! Reviewer reassignment parameters and outcomes.

use crate::{
    model::pull_request::{ReassignResponseDto, ReassignReviewerDto},
    server::model::pull_request::PullRequest,
};

/// Parameters for replacing one reviewer of a pull request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReassignReviewerParam {
    pub pull_request_id: String,
    /// Reviewer being replaced.
    pub old_reviewer_id: String,
}

impl ReassignReviewerParam {
    /// Takes `old_user_id`, falling back to `old_reviewer_id` when it is empty.
    pub fn from_dto(dto: ReassignReviewerDto) -> Self {
        let old_reviewer_id = if dto.old_user_id.is_empty() {
            dto.old_reviewer_id
        } else {
            dto.old_user_id
        };

        Self {
            pull_request_id: dto.pull_request_id,
            old_reviewer_id,
        }
    }
}

/// Pull request after a successful reassignment and the reviewer who took over.
#[derive(Debug, Clone, PartialEq)]
pub struct ReassignOutcome {
    pub pull_request: PullRequest,
    pub replaced_by: String,
}

impl ReassignOutcome {
    pub fn into_dto(self) -> ReassignResponseDto {
        ReassignResponseDto {
            pr: self.pull_request.into_dto(),
            replaced_by: self.replaced_by,
        }
    }
}
