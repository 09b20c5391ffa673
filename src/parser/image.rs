//! Data-URI image decoding.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use regex::Regex;

use crate::error::Result;
use crate::style::aspect_ratio;

/// A decoded embedded image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// MIME type from the data URI (e.g. "image/png")
    pub mime_type: String,

    /// File extension for the payload format
    pub extension: String,

    /// Raw decoded payload
    pub data: Vec<u8>,

    /// Intrinsic width in pixels
    pub width: u32,

    /// Intrinsic height in pixels
    pub height: u32,

    /// Intrinsic aspect ratio, rounded to two decimals
    pub ratio: f32,
}

/// Decode a `data:` URI into an image payload with probed dimensions.
///
/// Returns `Ok(None)`, the "not an image" sentinel, when the source is not
/// a data URI, carries no parseable MIME type, the MIME type is outside the
/// supported allow-list, the base64 payload is malformed, or the dimensions
/// cannot be determined. Only the aspect-ratio contract can fail hard.
pub fn decode_data_uri(src: &str) -> Result<Option<DecodedImage>> {
    if !src.starts_with("data:") {
        return Ok(None);
    }

    let mime_re = Regex::new(r"^data:(.+);base64,").unwrap();
    let Some(caps) = mime_re.captures(src) else {
        return Ok(None);
    };
    let mime_type = caps[1].to_string();

    let Some(extension) = extension_for(&mime_type) else {
        log::debug!("unsupported image MIME type {:?}, skipping", mime_type);
        return Ok(None);
    };

    let payload = &src[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
    let data = match BASE64.decode(payload) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("malformed base64 image payload: {}", e);
            return Ok(None);
        }
    };

    let Some((width, height)) = probe_dimensions(&data) else {
        log::debug!("undeterminable dimensions for {:?} image, skipping", mime_type);
        return Ok(None);
    };

    let ratio = aspect_ratio(width as f32, height as f32)?;

    Ok(Some(DecodedImage {
        mime_type,
        extension: extension.to_string(),
        data,
        width,
        height,
        ratio,
    }))
}

/// Extension for a MIME type in the supported allow-list.
fn extension_for(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    }
}

/// Probe intrinsic pixel dimensions from the payload header.
fn probe_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    reader.into_dimensions().ok()
}
