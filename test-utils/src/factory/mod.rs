//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let team = factory::create_team(&db).await?;
//!     let author = factory::create_user(&db, &team.name).await?;
//!
//!     // Team with three active members in one call
//!     let (team, members) = factory::helpers::create_team_with_members(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db, &team.name)
//!     .id("u1")
//!     .username("Alice")
//!     .active(false)
//!     .build()
//!     .await?;
//!
//! let pr = factory::pull_request::PullRequestFactory::new(&db, &author.id)
//!     .reviewers([reviewer.id.clone()])
//!     .merged()
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod pull_request;
pub mod team;
pub mod user;

pub use pull_request::create_pull_request;
pub use team::create_team;
pub use user::create_user;
