use axum::routing::get;
use axum::Router;

use crate::handlers::leagues;
use crate::state::AppState;

/// `GET /leagues` -> list
pub fn router() -> Router<AppState> {
    Router::new().route("/leagues", get(leagues::list))
}
