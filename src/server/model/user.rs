//! User domain models and parameters.

use crate::model::user::{SetIsActiveDto, UserDto};

/// Team member with activity flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique user id.
    pub id: String,
    /// Display name of the user.
    pub username: String,
    /// Name of the team the user belongs to.
    pub team_name: String,
    /// Whether the user can be picked as a reviewer.
    pub is_active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.id,
            username: self.username,
            team_name: self.team_name,
            is_active: self.is_active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            team_name: entity.team_name,
            is_active: entity.is_active,
        }
    }
}

/// Parameters for inserting or overwriting a user as part of a team.
///
/// An existing user with the same id has its name, active flag and team replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUserParam {
    pub id: String,
    pub username: String,
    pub is_active: bool,
    pub team_name: String,
}

/// Parameters for toggling a user's active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SetUserActiveParam {
    pub user_id: String,
    pub is_active: bool,
}

impl SetUserActiveParam {
    pub fn from_dto(dto: SetIsActiveDto) -> Self {
        Self {
            user_id: dto.user_id,
            is_active: dto.is_active,
        }
    }
}
