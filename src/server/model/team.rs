//! Team domain models and parameters.
//!
//! A team is identified by its unique name and owns an ordered list of members. Teams
//! are created together with their members; members that already exist elsewhere are
//! moved into the new team.

use crate::{
    model::team::{DeactivateTeamUsersDto, DeactivationSummaryDto, TeamDto, TeamMemberDto},
    server::model::user::User,
};

/// Member entry of a team listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl TeamMember {
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            user_id: self.user_id,
            username: self.username,
            is_active: self.is_active,
        }
    }

    pub fn from_dto(dto: TeamMemberDto) -> Self {
        Self {
            user_id: dto.user_id,
            username: dto.username,
            is_active: dto.is_active,
        }
    }

    /// Builds a member entry from a user row, dropping the team reference.
    pub fn from_user(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

/// Team with its members ordered by user id.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Converts the team domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            team_name: self.name,
            members: self.members.into_iter().map(TeamMember::into_dto).collect(),
        }
    }
}

/// Parameters for creating a team together with its members.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeamParam {
    pub name: String,
    pub members: Vec<TeamMember>,
}

impl CreateTeamParam {
    pub fn from_dto(dto: TeamDto) -> Self {
        Self {
            name: dto.team_name,
            members: dto.members.into_iter().map(TeamMember::from_dto).collect(),
        }
    }
}

/// Parameters for deactivating a batch of team members.
#[derive(Debug, Clone, PartialEq)]
pub struct DeactivateTeamUsersParam {
    pub team_name: String,
    /// Users to deactivate, processed in this order.
    pub user_ids: Vec<String>,
}

impl DeactivateTeamUsersParam {
    pub fn from_dto(dto: DeactivateTeamUsersDto) -> Self {
        Self {
            team_name: dto.team_name,
            user_ids: dto.user_ids,
        }
    }
}

/// Result of a bulk deactivation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeactivationSummary {
    pub team_name: String,
    /// Users deactivated, in input order.
    pub deactivated: Vec<String>,
    /// Reviewer bindings handed over to another teammate.
    pub reassigned_reviewers: u64,
    /// Reviewer bindings dropped because nobody was eligible.
    pub removed_reviewers: u64,
    /// Distinct open pull requests touched by either of the above.
    pub affected_pull_requests: u64,
}

impl DeactivationSummary {
    /// Zero-valued summary for a team.
    pub fn empty(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            ..Default::default()
        }
    }

    pub fn into_dto(self) -> DeactivationSummaryDto {
        DeactivationSummaryDto {
            team_name: self.team_name,
            deactivated: self.deactivated,
            reassigned_reviewers: self.reassigned_reviewers,
            removed_reviewers: self.removed_reviewers,
            affected_pull_requests: self.affected_pull_requests,
        }
    }
}
