use pripals_core::error::CoreError;

/// Failure of a repository operation that enforces domain rules as well as
/// touching the database.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
