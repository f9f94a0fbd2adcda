//! The [`RasterImage`] value type: a decoded, validated pixel buffer.
//!
//! Everything downstream of the decoder works on this type. It is immutable
//! after construction and construction is the single place buffer/metadata
//! consistency is enforced — every metric extractor can assume
//! `pixels.len() == width * height * channel_count` and index freely.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error(
        "pixel buffer length {actual} does not match {width}x{height} {channels:?} \
         (expected {expected})"
    )]
    MalformedImage {
        width: u32,
        height: u32,
        channels: ChannelLayout,
        expected: usize,
        actual: usize,
    },
}

/// Channel layout of a decoded pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
    Grayscale,
}

impl ChannelLayout {
    /// Samples per pixel for this layout.
    pub fn channel_count(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
            ChannelLayout::Grayscale => 1,
        }
    }
}

/// A decoded raster image: dimensions, channel layout, and a row-major
/// 8-bit sample buffer.
///
/// Invariant: `pixels.len() == width * height * channels.channel_count()`,
/// checked once in [`RasterImage::new`]. A zero-dimension image with an
/// empty (consistent) buffer is accepted; extractors degrade to their
/// documented fallback on it rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: ChannelLayout,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Build a raster image, rejecting buffers inconsistent with the
    /// declared dimensions and layout.
    pub fn new(
        width: u32,
        height: u32,
        channels: ChannelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * channels.channel_count();
        if pixels.len() != expected {
            return Err(RasterError::MalformedImage {
                width,
                height,
                channels,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> ChannelLayout {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels (not samples).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Grayscale view of the image, one sample per pixel, row-major.
    ///
    /// RGB/RGBA data is converted with BT.601 luma weights
    /// (0.299 R + 0.587 G + 0.114 B); alpha is ignored. Grayscale input
    /// is returned as-is.
    pub fn to_luma(&self) -> Vec<u8> {
        match self.channels {
            ChannelLayout::Grayscale => self.pixels.clone(),
            ChannelLayout::Rgb | ChannelLayout::Rgba => {
                let step = self.channels.channel_count();
                self.pixels
                    .chunks_exact(step)
                    .map(|px| {
                        let y = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
                        y.round().clamp(0.0, 255.0) as u8
                    })
                    .collect()
            }
        }
    }

    /// Iterate pixels as `(r, g, b)` triples, row-major.
    ///
    /// Grayscale samples are replicated across all three channels; RGBA
    /// alpha is skipped.
    pub fn rgb_triples(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        let step = self.channels.channel_count();
        self.pixels.chunks_exact(step).map(move |px| match step {
            1 => (px[0], px[0], px[0]),
            _ => (px[0], px[1], px[2]),
        })
    }
}
