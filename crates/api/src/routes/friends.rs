//! Route definitions for the `/friends` resource and its point ledger.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{friends, points};
use crate::state::AppState;

/// Routes mounted at `/friends`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
///
/// POST   /{id}/points       -> record_change
/// GET    /{id}/actions      -> list_actions
/// GET    /{id}/history      -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(friends::list).post(friends::create))
        .route(
            "/{id}",
            get(friends::get_by_id)
                .put(friends::update)
                .delete(friends::delete),
        )
        .route("/{id}/points", post(points::record_change))
        .route("/{id}/actions", get(points::list_actions))
        .route("/{id}/history", get(points::history))
}
