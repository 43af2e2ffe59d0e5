//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for teams,
//! users, pull requests and reviewer bindings. Repositories use SeaORM entity models
//! internally and return domain models to keep the data layer separate from business logic.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! connection pool or inside a transaction. Multi-row writes (team creation with members,
//! pull request creation with reviewers) open their own transaction; dropping it before
//! `commit` rolls every statement back.

pub mod pull_request;
pub mod reviewer;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
