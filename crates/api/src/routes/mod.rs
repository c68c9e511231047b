pub mod friends;
pub mod health;
pub mod leagues;
pub mod uploads;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /friends                         list, create
/// /friends/{id}                    get, update, delete
/// /friends/{id}/points             record a point change (POST)
/// /friends/{id}/actions            full ledger (GET)
/// /friends/{id}/history            recent point history (GET, ?limit=)
///
/// /leagues                         computed league view (GET)
///
/// /upload                          profile image upload (POST, multipart)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/friends", friends::router())
        .merge(leagues::router())
        .merge(uploads::router(config.max_upload_bytes))
}
