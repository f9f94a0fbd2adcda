//! Synthetic image builders shared across unit tests.

use crate::raster::{ChannelLayout, RasterImage};

/// Solid single-color RGB image.
pub fn solid_rgb(width: u32, height: u32, (r, g, b): (u8, u8, u8)) -> RasterImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..width as usize * height as usize {
        pixels.extend_from_slice(&[r, g, b]);
    }
    RasterImage::new(width, height, ChannelLayout::Rgb, pixels).unwrap()
}

/// Two-color checkerboard RGB image — high contrast and strong edges.
pub fn checkerboard_rgb(
    width: u32,
    height: u32,
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> RasterImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let (r, g, bl) = if (x + y) % 2 == 0 { a } else { b };
            pixels.extend_from_slice(&[r, g, bl]);
        }
    }
    RasterImage::new(width, height, ChannelLayout::Rgb, pixels).unwrap()
}

/// Horizontal grayscale ramp, one channel per pixel.
pub fn gradient_gray(width: u32, height: u32) -> RasterImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)).min(255) as u8);
        }
    }
    RasterImage::new(width, height, ChannelLayout::Grayscale, pixels).unwrap()
}
