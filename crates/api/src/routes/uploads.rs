use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// `POST /upload` -> upload_image
///
/// The body limit is raised (or lowered) to fit the configured image size so
/// oversized files reach the handler's own size check where possible.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(uploads::upload_image).layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        )),
    )
}
