//! Photo decoding helpers: MIME detection and data URI encoding.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Guess an image MIME type from a file extension.
///
/// Unknown extensions map to `application/octet-stream`, which photo validation rejects.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encode raw image bytes as a `data:` URI usable as a photo reference
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
