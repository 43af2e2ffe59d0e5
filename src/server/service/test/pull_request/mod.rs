use std::collections::HashSet;

use crate::server::{
    data::{pull_request::PullRequestRepository, team::TeamRepository},
    error::{review::ReviewError, AppError},
    model::{
        assignment::ReassignReviewerParam,
        pull_request::{CreatePullRequestParam, PullRequestStatus},
        team::{CreateTeamParam, TeamMember},
    },
    service::{
        assignment::{picker::ReviewerPicker, AssignmentService},
        pull_request::PullRequestService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod merge;

fn create_param(id: &str, author_id: &str) -> CreatePullRequestParam {
    CreatePullRequestParam {
        id: id.to_string(),
        name: format!("{} name", id),
        author_id: author_id.to_string(),
    }
}

fn reassign_param(pull_request_id: &str, old_reviewer_id: &str) -> ReassignReviewerParam {
    ReassignReviewerParam {
        pull_request_id: pull_request_id.to_string(),
        old_reviewer_id: old_reviewer_id.to_string(),
    }
}
