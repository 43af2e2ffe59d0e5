use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::{review::ReviewError, AppError},
    model::team::{CreateTeamParam, DeactivateTeamUsersParam, DeactivationSummary, Team},
    service::assignment::{picker::ReviewerPicker, AssignmentService},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team, upserting its members
    ///
    /// Listed users that already exist are moved into the new team.
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, AppError> {
        let team = TeamRepository::new(self.db).create(param).await?;

        tracing::info!(
            team_name = %team.name,
            members = team.members.len(),
            "Created team"
        );

        Ok(team)
    }

    /// Gets a team with its members ordered by user id
    pub async fn get(&self, team_name: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_name(team_name)
            .await?
            .ok_or_else(|| ReviewError::NotFound(format!("team {} not found", team_name)).into())
    }

    /// Deactivates team members and hands their open reviews to teammates
    pub async fn deactivate_and_reassign(
        &self,
        picker: &ReviewerPicker,
        param: DeactivateTeamUsersParam,
    ) -> Result<DeactivationSummary, AppError> {
        AssignmentService::new(self.db, picker)
            .deactivate_team_users(param)
            .await
    }
}
