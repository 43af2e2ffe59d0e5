//! Pull request domain models and parameters.
//!
//! Pull requests start `Open` with up to two reviewers picked from the author's team and
//! move to `Merged` exactly once. Reviewer ids are kept sorted so responses are stable.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PullRequestStatus as PullRequestStatusEntity;

use crate::model::pull_request::{
    CreatePullRequestDto, PullRequestDto, PullRequestShortDto, PullRequestStatusDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestStatus {
    Open,
    Merged,
}

impl PullRequestStatus {
    pub fn into_dto(self) -> PullRequestStatusDto {
        match self {
            Self::Open => PullRequestStatusDto::Open,
            Self::Merged => PullRequestStatusDto::Merged,
        }
    }

    pub fn from_entity(status: PullRequestStatusEntity) -> Self {
        match status {
            PullRequestStatusEntity::Open => Self::Open,
            PullRequestStatusEntity::Merged => Self::Merged,
        }
    }

    pub fn into_entity(self) -> PullRequestStatusEntity {
        match self {
            Self::Open => PullRequestStatusEntity::Open,
            Self::Merged => PullRequestStatusEntity::Merged,
        }
    }
}

/// Pull request together with its assigned reviewers.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
    /// Assigned reviewer ids ordered by id.
    pub assigned_reviewers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn into_dto(self) -> PullRequestDto {
        PullRequestDto {
            pull_request_id: self.id,
            pull_request_name: self.name,
            author_id: self.author_id,
            status: self.status.into_dto(),
            assigned_reviewers: self.assigned_reviewers,
            created_at: self.created_at,
            merged_at: self.merged_at,
        }
    }

    /// Converts an entity model and its reviewer bindings at the repository boundary.
    pub fn from_entity(entity: entity::pull_request::Model, assigned_reviewers: Vec<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            author_id: entity.author_id,
            status: PullRequestStatus::from_entity(entity.status),
            assigned_reviewers,
            created_at: entity.created_at,
            merged_at: entity.merged_at,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    pub fn has_reviewer(&self, user_id: &str) -> bool {
        self.assigned_reviewers.iter().any(|id| id == user_id)
    }
}

/// Pull request listing entry without reviewers or timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestShort {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
}

impl PullRequestShort {
    pub fn into_dto(self) -> PullRequestShortDto {
        PullRequestShortDto {
            pull_request_id: self.id,
            pull_request_name: self.name,
            author_id: self.author_id,
            status: self.status.into_dto(),
        }
    }

    pub fn from_entity(entity: entity::pull_request::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            author_id: entity.author_id,
            status: PullRequestStatus::from_entity(entity.status),
        }
    }
}

/// Parameters for opening a pull request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePullRequestParam {
    pub id: String,
    pub name: String,
    pub author_id: String,
}

impl CreatePullRequestParam {
    pub fn from_dto(dto: CreatePullRequestDto) -> Self {
        Self {
            id: dto.pull_request_id,
            name: dto.pull_request_name,
            author_id: dto.author_id,
        }
    }
}

/// Row-level parameters for persisting a new pull request with its reviewers.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertPullRequestParam {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub reviewers: Vec<String>,
}
