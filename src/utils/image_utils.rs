use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bytes::Bytes;

use crate::error::SubmissionError;

/// Only declared `image/*` uploads are accepted.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Encodes the image bytes on the blocking pool so large photos don't stall the runtime.
pub async fn encode_image(data: Bytes) -> Result<String, SubmissionError> {
    tokio::task::spawn_blocking(move || BASE64.encode(&data))
        .await
        .map_err(|e| SubmissionError::Encoding(e.to_string()))
}

/// Base64 form of an image kept in the page between posts.
pub fn retain_image(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Reverses `retain_image` on the value the page posted back.
pub fn restore_image(encoded: &str) -> Result<Bytes, SubmissionError> {
    BASE64
        .decode(encoded.trim())
        .map(Bytes::from)
        .map_err(|e| SubmissionError::FormRead(format!("retained image is not base64: {}", e)))
}
