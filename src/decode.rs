//! Decoding: image files and in-memory bytes to [`RasterImage`].
//!
//! Pure Rust via the `image` crate (JPEG, PNG, TIFF, WebP decoders compiled
//! in) — no system dependencies. Decoded buffers keep their native channel
//! layout where it is one the scoring core understands (RGB8, RGBA8,
//! Luma8); anything else is converted to RGB8.

use crate::raster::{ChannelLayout, RasterError, RasterImage};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error(transparent)]
    Malformed(#[from] RasterError),
}

/// Extensions whose decoders are compiled in and known to work.
///
/// Gated on `ImageFormat::reading_enabled()` so the list tracks the enabled
/// cargo features instead of drifting from them.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether a path has a decodable image extension (case-insensitive).
pub fn is_supported_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// Decode an image file into a validated raster buffer.
pub fn decode_path(path: &Path) -> Result<RasterImage, DecodeError> {
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| DecodeError::Decode(format!("{}: {e}", path.display())))?;
    Ok(from_dynamic(img)?)
}

/// Decode in-memory encoded bytes (e.g. a decoded upload body) into a
/// validated raster buffer. The format is sniffed from the content.
pub fn decode_bytes(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let img = image::load_from_memory(bytes).map_err(|e| DecodeError::Decode(e.to_string()))?;
    Ok(from_dynamic(img)?)
}

/// Convert a decoded `DynamicImage` into the scoring core's buffer type.
fn from_dynamic(img: DynamicImage) -> Result<RasterImage, RasterError> {
    let (width, height) = (img.width(), img.height());
    match img {
        DynamicImage::ImageRgb8(buf) => {
            RasterImage::new(width, height, ChannelLayout::Rgb, buf.into_raw())
        }
        DynamicImage::ImageRgba8(buf) => {
            RasterImage::new(width, height, ChannelLayout::Rgba, buf.into_raw())
        }
        DynamicImage::ImageLuma8(buf) => {
            RasterImage::new(width, height, ChannelLayout::Grayscale, buf.into_raw())
        }
        // 16-bit and other exotic layouts: downconvert to RGB8
        other => RasterImage::new(width, height, ChannelLayout::Rgb, other.into_rgb8().into_raw()),
    }
}
