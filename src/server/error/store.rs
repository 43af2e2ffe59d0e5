use thiserror::Error;

/// Sentinel failures raised by the data layer.
///
/// Lookups report missing rows as `None`, so only uniqueness collisions detected inside
/// a transaction need their own variants. Everything else is an opaque database error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A team with this name already exists.
    #[error("team {0} already exists")]
    TeamExists(String),

    /// A pull request with this id already exists.
    #[error("pull request {0} already exists")]
    PullRequestExists(String),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
