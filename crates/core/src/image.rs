//! Profile image upload validation and encoding.
//!
//! Uploads are identified by sniffing their leading bytes, never by the
//! client-declared content type. Accepted images are turned into an opaque
//! reference string by an [`ImageStore`]; the default store inlines the image
//! as a `data:` URL so no separate blob storage is needed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

use crate::error::CoreError;

/// Default upper bound on an uploaded profile image (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Formats accepted as profile images.
const ACCEPTED_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Identify an uploaded image and check it against the size limit.
pub fn detect_format(bytes: &[u8], max_bytes: usize) -> Result<ImageFormat, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(CoreError::Validation(format!(
            "Uploaded file is {} bytes; the limit is {max_bytes} bytes",
            bytes.len()
        )));
    }

    let format = image::guess_format(bytes).map_err(|_| {
        CoreError::Validation("Unsupported image type; expected PNG, JPEG or WebP".to_string())
    })?;

    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(CoreError::Validation(format!(
            "Unsupported image type '{}'; expected PNG, JPEG or WebP",
            format.to_mime_type()
        )));
    }
    Ok(format)
}

/// Encode image bytes as a `data:<mime>;base64,...` URL.
pub fn to_data_url(format: ImageFormat, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    )
}

/// Turns an accepted image into a reference usable as a friend's profile picture.
pub trait ImageStore: Send + Sync {
    fn store(&self, format: ImageFormat, bytes: &[u8]) -> Result<String, CoreError>;
}

/// Inlines images as data URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlStore;

impl ImageStore for DataUrlStore {
    fn store(&self, format: ImageFormat, bytes: &[u8]) -> Result<String, CoreError> {
        Ok(to_data_url(format, bytes))
    }
}
