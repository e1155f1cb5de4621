use crate::client::error::ClientError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mime::Mime;
use std::path::Path;

/// Content type for an image file, judged by its extension.
pub fn guess_mime(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("svg") => mime::IMAGE_SVG,
        Some("bmp") => mime::IMAGE_BMP,
        Some("webp") => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Embeds raw bytes as `data:<mime>;base64,<payload>`.
pub fn data_uri(mime: &Mime, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

/// Reads a local image and returns it as an embeddable data URI.
pub fn image_data_uri(path: &Path) -> Result<String, ClientError> {
    let bytes = std::fs::read(path).map_err(|source| ClientError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(data_uri(&guess_mime(path), &bytes))
}
