use crate::server::{
    data::pull_request::PullRequestRepository,
    error::store::StoreError,
    model::pull_request::{InsertPullRequestParam, PullRequestStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_reviewer;
mod mark_merged;
