use crate::server::{
    error::AppError,
    model::stats::ReviewerLoad,
    service::{
        assignment::picker::ReviewerPicker, pull_request::PullRequestService,
        stats::StatsService,
    },
};
use test_utils::{builder::TestBuilder, factory};
