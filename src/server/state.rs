//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Reviewer picker holding the shared random source

use sea_orm::DatabaseConnection;

use crate::server::service::assignment::picker::ReviewerPicker;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ReviewerPicker` uses an `Arc` internally, so clones share one generator
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Random source for reviewer selection.
    pub picker: ReviewerPicker,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `picker` - Reviewer picker, seeded or OS-random
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, picker: ReviewerPicker) -> Self {
        Self { db, picker }
    }
}
