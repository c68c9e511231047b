//! Point ledger arithmetic and history windowing.
//!
//! The ledger itself lives in the database; this module owns the rules that
//! keep the running-total chain consistent and shape history for charting.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// History window
// ---------------------------------------------------------------------------

/// Number of entries returned by a history query when no usable limit is given.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Upper bound on a single history query.
pub const MAX_HISTORY_LIMIT: i64 = 500;

/// Resolve a caller-supplied history limit.
///
/// Missing or non-positive values fall back to `default`; anything above
/// `MAX_HISTORY_LIMIT` is clamped.
pub fn resolve_history_limit(requested: Option<i64>, default: i64) -> i64 {
    match requested {
        Some(limit) if limit > 0 => limit.min(MAX_HISTORY_LIMIT),
        _ => default.clamp(1, MAX_HISTORY_LIMIT),
    }
}

/// Turn a newest-first slice of history into oldest-first order for plotting.
pub fn into_chronological<T>(mut newest_first: Vec<T>) -> Vec<T> {
    newest_first.reverse();
    newest_first
}

// ---------------------------------------------------------------------------
// Running totals
// ---------------------------------------------------------------------------

/// Running total after applying `delta` on top of `previous`.
///
/// Overflow is a validation failure rather than a wrap, so a rejected change
/// leaves the chain untouched.
pub fn next_running_total(previous: i64, delta: i64) -> Result<i64, CoreError> {
    previous.checked_add(delta).ok_or_else(|| {
        CoreError::Validation(format!(
            "Applying {delta} points to a total of {previous} would overflow"
        ))
    })
}
