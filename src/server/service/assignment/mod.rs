//! Reviewer assignment engine.
//!
//! This module owns every rule about who may review what:
//!
//! - **Selection**: up to two active teammates of the author, never the author
//! - **Reassignment**: one reviewer swapped for an eligible teammate of the outgoing reviewer
//! - **Bulk deactivation**: a batch of users deactivated and their open reviews handed over
//!
//! All randomness goes through `ReviewerPicker` so selections can be reproduced in tests.

pub mod picker;

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        pull_request::PullRequestRepository, reviewer::ReviewerRepository, user::UserRepository,
    },
    error::{review::ReviewError, AppError},
    model::{
        assignment::{ReassignOutcome, ReassignReviewerParam},
        pull_request::PullRequestStatus,
        team::{DeactivateTeamUsersParam, DeactivationSummary},
        user::User,
    },
    service::assignment::picker::ReviewerPicker,
};

/// Maximum number of reviewers assigned when a pull request is opened.
pub const MAX_REVIEWERS: usize = 2;

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
    picker: &'a ReviewerPicker,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, picker: &'a ReviewerPicker) -> Self {
        Self { db, picker }
    }

    /// Picks the initial reviewers for a pull request by `author_id`.
    ///
    /// Candidates are the active members of the author's team other than the author.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Between zero and two distinct reviewer ids
    /// - `Err(AppError::ReviewErr(NotFound))` - Author or author's team does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn select_reviewers(&self, author_id: &str) -> Result<Vec<String>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let author = user_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| user_not_found(author_id))?;

        let candidates: Vec<String> = self
            .active_teammates(&author.team_name)
            .await?
            .into_iter()
            .filter(|user| user.id != author.id)
            .map(|user| user.id)
            .collect();

        Ok(self.picker.pick(candidates, MAX_REVIEWERS).await)
    }

    /// Replaces one reviewer of an open pull request.
    ///
    /// Preconditions are checked in a fixed order: pull request exists, pull request
    /// is open, outgoing reviewer exists, outgoing reviewer is assigned. The replacement
    /// comes from the outgoing reviewer's team and is never the author, the outgoing
    /// reviewer or someone already assigned.
    ///
    /// # Returns
    /// - `Ok(ReassignOutcome)` - Refreshed pull request and the replacement's id
    /// - `Err(AppError::ReviewErr(_))` - `NotFound`, `PullRequestMerged`, `NotAssigned`
    ///   or `NoCandidate`; reviewers are unchanged
    /// - `Err(AppError::InternalError)` - The binding vanished between check and swap
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reassign(&self, param: ReassignReviewerParam) -> Result<ReassignOutcome, AppError> {
        let pr_repo = PullRequestRepository::new(self.db);

        let pull_request = pr_repo
            .find_by_id(&param.pull_request_id)
            .await?
            .ok_or_else(|| pull_request_not_found(&param.pull_request_id))?;

        if pull_request.is_merged() {
            return Err(ReviewError::PullRequestMerged(pull_request.id).into());
        }

        let old_reviewer = UserRepository::new(self.db)
            .find_by_id(&param.old_reviewer_id)
            .await?
            .ok_or_else(|| user_not_found(&param.old_reviewer_id))?;

        if !pull_request.has_reviewer(&old_reviewer.id) {
            return Err(ReviewError::NotAssigned {
                pull_request_id: pull_request.id,
                reviewer_id: old_reviewer.id,
            }
            .into());
        }

        let candidates: Vec<String> = self
            .active_teammates(&old_reviewer.team_name)
            .await?
            .into_iter()
            .filter(|user| {
                user.id != old_reviewer.id
                    && user.id != pull_request.author_id
                    && !pull_request.has_reviewer(&user.id)
            })
            .map(|user| user.id)
            .collect();

        let Some(replacement) = self.picker.pick(candidates, 1).await.into_iter().next() else {
            return Err(ReviewError::NoCandidate(old_reviewer.team_name).into());
        };

        self.swap_reviewer(&pull_request.id, &old_reviewer.id, &replacement)
            .await?;

        let pull_request = pr_repo
            .find_by_id(&pull_request.id)
            .await?
            .ok_or_else(|| pull_request_not_found(&param.pull_request_id))?;

        Ok(ReassignOutcome {
            pull_request,
            replaced_by: replacement,
        })
    }

    /// Deactivates a batch of team members and repairs their open reviews.
    ///
    /// Users are validated and deactivated in input order; the first failure aborts
    /// and leaves earlier users deactivated. Each open pull request reviewed by a
    /// processed user is then reassigned, or the binding is dropped when the team has
    /// no eligible candidate left. Merged pull requests keep their reviewers.
    ///
    /// # Returns
    /// - `Ok(DeactivationSummary)` - Counts of reassigned and removed bindings and
    ///   distinct affected pull requests; zero-valued for an empty batch
    /// - `Err(AppError::ReviewErr(NotFound))` - A user does not exist or is on another team
    /// - `Err(AppError)` - Any reassignment failure other than `NoCandidate`
    pub async fn deactivate_team_users(
        &self,
        param: DeactivateTeamUsersParam,
    ) -> Result<DeactivationSummary, AppError> {
        let mut summary = DeactivationSummary::empty(&param.team_name);
        if param.user_ids.is_empty() {
            return Ok(summary);
        }

        let user_repo = UserRepository::new(self.db);
        for user_id in &param.user_ids {
            let user = user_repo
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| user_not_found(user_id))?;

            if user.team_name != param.team_name {
                return Err(ReviewError::NotFound(format!(
                    "user {} does not belong to team {}",
                    user_id, param.team_name
                ))
                .into());
            }

            if user.is_active {
                user_repo
                    .set_active(user_id, false)
                    .await?
                    .ok_or_else(|| user_not_found(user_id))?;
            }

            summary.deactivated.push(user.id);
        }

        let pr_repo = PullRequestRepository::new(self.db);
        let reviewer_repo = ReviewerRepository::new(self.db);
        let mut affected = HashSet::new();

        for user_id in &summary.deactivated {
            let reviews = pr_repo.get_by_reviewer(user_id).await?;

            for pr in reviews {
                if pr.status != PullRequestStatus::Open {
                    continue;
                }

                let result = self
                    .reassign(ReassignReviewerParam {
                        pull_request_id: pr.id.clone(),
                        old_reviewer_id: user_id.clone(),
                    })
                    .await;

                match result {
                    Ok(_) => summary.reassigned_reviewers += 1,
                    Err(AppError::ReviewErr(ReviewError::NoCandidate(_))) => {
                        reviewer_repo.remove(&pr.id, user_id).await?;
                        tracing::info!(
                            pull_request_id = %pr.id,
                            reviewer_id = %user_id,
                            "Removed reviewer without replacement"
                        );
                        summary.removed_reviewers += 1;
                    }
                    Err(err) => return Err(err),
                }

                affected.insert(pr.id);
            }
        }

        summary.affected_pull_requests = affected.len() as u64;

        tracing::info!(
            team_name = %summary.team_name,
            deactivated = summary.deactivated.len(),
            reassigned = summary.reassigned_reviewers,
            removed = summary.removed_reviewers,
            affected = summary.affected_pull_requests,
            "Deactivated team users"
        );

        Ok(summary)
    }

    /// Rewrites the binding of `old_reviewer_id` to `new_reviewer_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Binding rewritten
    /// - `Err(AppError::InternalError)` - The binding no longer exists, typically because
    ///   a concurrent writer moved or removed it after the preconditions were checked
    /// - `Err(AppError::DbErr)` - Database error
    pub(crate) async fn swap_reviewer(
        &self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> Result<(), AppError> {
        ReviewerRepository::new(self.db)
            .reassign(pull_request_id, old_reviewer_id, new_reviewer_id)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => AppError::InternalError(format!(
                    "Reviewer {} vanished from pull request {} during reassignment",
                    old_reviewer_id, pull_request_id
                )),
                err => AppError::DbErr(err),
            })?;

        tracing::info!(
            pull_request_id = %pull_request_id,
            old_reviewer_id = %old_reviewer_id,
            new_reviewer_id = %new_reviewer_id,
            "Reassigned reviewer"
        );

        Ok(())
    }

    async fn active_teammates(&self, team_name: &str) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db)
            .get_active_by_team(team_name)
            .await?
            .ok_or_else(|| ReviewError::NotFound(format!("team {} not found", team_name)).into())
    }
}

fn user_not_found(user_id: &str) -> AppError {
    ReviewError::NotFound(format!("user {} not found", user_id)).into()
}

fn pull_request_not_found(pull_request_id: &str) -> AppError {
    ReviewError::NotFound(format!("pull request {} not found", pull_request_id)).into()
}
