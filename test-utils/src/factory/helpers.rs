//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{team::create_team, user::UserFactory};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team together with `count` active members.
///
/// Members are created in order, so their generated ids sort in creation order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of active members to create
///
/// # Returns
/// - `Ok((team, members))` - Created team and its members
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team_with_members(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::team::Model, Vec<entity::user::Model>), DbErr> {
    let team = create_team(db).await?;

    let mut members = Vec::with_capacity(count);
    for _ in 0..count {
        members.push(UserFactory::new(db, &team.name).build().await?);
    }

    Ok((team, members))
}
