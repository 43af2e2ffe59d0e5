//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Reviewer selection, reassignment and bulk deactivation rules
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Classification**: Turning missing rows and collisions into `ReviewError`s

pub mod assignment;
pub mod pull_request;
pub mod stats;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
