//! Profile image uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use pripals_core::image::detect_format;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// Result of an accepted upload.
#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub filename: String,
    /// Reference to store as a friend's `profilePicture`.
    pub data: String,
}

/// POST /api/upload
///
/// Accepts a multipart body with a `file` part. The image type is sniffed
/// from its bytes; the declared content type is ignored.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<UploadedImage>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let format = detect_format(&bytes, state.config.max_upload_bytes)?;
        let data = state.image_store.store(format, &bytes)?;

        tracing::info!(
            filename = %filename,
            size = bytes.len(),
            mime = format.to_mime_type(),
            "Profile image accepted"
        );

        return Ok(Json(DataResponse {
            data: UploadedImage { filename, data },
        }));
    }

    Err(AppError::BadRequest(format!(
        "Multipart body must contain a '{FILE_FIELD}' part"
    )))
}
