//! Reviewboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! reviewboard service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding teams, users and pull requests.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_team_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_review_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
