#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Reserved for optimistic-concurrency backends; no current operation raises it.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing friend, the most common lookup failure.
    pub fn friend_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "Friend",
            id: id.to_string(),
        }
    }
}
