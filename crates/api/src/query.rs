//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the point history endpoint (`?limit=`).
///
/// `limit` is kept as raw text so a malformed value falls back to the default
/// window instead of rejecting the request; see
/// `pripals_core::ledger::resolve_history_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<String>,
}

impl HistoryParams {
    /// The requested limit, if it parses as an integer.
    pub fn requested_limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}
