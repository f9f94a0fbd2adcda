//! Raw metric extraction — pure statistics over pixel buffers.
//!
//! All functions here are pure and testable without any I/O or image files.
//! Each produces one raw value in metric-specific units; mapping onto the
//! common 0–10 scale happens later in [`score`](crate::score).
//!
//! Extractors never fail: where an image is too small or has no usable
//! metadata for a metric, the metric degrades to [`METRIC_FALLBACK`] and
//! the rest of the pipeline proceeds. This is the single degrade-gracefully
//! policy for the whole crate — buffer/metadata inconsistency is caught
//! earlier, at [`RasterImage`](crate::raster::RasterImage) construction.

use crate::config::ScoringConfig;
use crate::raster::RasterImage;

/// Substitute value for metrics that cannot be computed (too few samples,
/// zero dimensions). Applied uniformly across all extractors.
pub const METRIC_FALLBACK: f64 = 0.0;

/// The six raw metric values for one image, in metric-specific units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMetrics {
    /// Mean squared second difference; ≥ 0, unbounded.
    pub sharpness: f64,
    /// Mean grayscale sample; [0, 255].
    pub brightness: f64,
    /// Population standard deviation of grayscale samples; ≈ [0, 127.5].
    pub contrast: f64,
    /// Mean per-pixel chroma range ratio; [0, 1].
    pub saturation: f64,
    /// Megapixel count relative to the reference, capped; [0, cap].
    pub resolution: f64,
    /// Distance-to-standard-ratio score; ≤ 10, unbounded below.
    pub aspect_ratio: f64,
}

/// Compute all six raw metrics for an image.
///
/// The grayscale conversion is done once and shared by the three
/// luminance-based extractors.
pub fn measure(image: &RasterImage, config: &ScoringConfig) -> RawMetrics {
    let luma = image.to_luma();
    RawMetrics {
        sharpness: sharpness(&luma),
        brightness: brightness(&luma),
        contrast: contrast(&luma),
        saturation: saturation(image),
        resolution: resolution_adequacy(
            image.width(),
            image.height(),
            config.reference_pixels,
            config.resolution_cap,
        ),
        aspect_ratio: aspect_ratio_conformance(
            image.width(),
            image.height(),
            &config.standard_aspect_ratios,
        ),
    }
}

/// Edge response: mean squared one-dimensional second difference over the
/// row-major grayscale buffer.
///
/// For every interior sample `i`, `d = g[i-1] + g[i+1] - 2*g[i]` is squared
/// and averaged. A sharp image has strong local transitions and therefore a
/// high mean squared difference; a blurred one is locally smooth and scores
/// near zero.
///
/// Fewer than 3 samples leave no interior sample, so the metric is
/// undefined and falls back to [`METRIC_FALLBACK`].
pub fn sharpness(luma: &[u8]) -> f64 {
    if luma.len() < 3 {
        return METRIC_FALLBACK;
    }
    let sum: f64 = luma
        .windows(3)
        .map(|w| {
            let d = w[0] as f64 + w[2] as f64 - 2.0 * w[1] as f64;
            d * d
        })
        .sum();
    sum / (luma.len() - 2) as f64
}

/// Arithmetic mean of grayscale samples; [0, 255].
pub fn brightness(luma: &[u8]) -> f64 {
    if luma.is_empty() {
        return METRIC_FALLBACK;
    }
    let sum: f64 = luma.iter().map(|&v| v as f64).sum();
    sum / luma.len() as f64
}

/// Population standard deviation of grayscale samples around their mean.
pub fn contrast(luma: &[u8]) -> f64 {
    if luma.is_empty() {
        return METRIC_FALLBACK;
    }
    let mean = brightness(luma);
    let variance: f64 = luma
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / luma.len() as f64;
    variance.sqrt()
}

/// Mean per-pixel saturation: `(max - min) / max` over the RGB channels,
/// with the denominator floored at 1 so pure-black pixels contribute 0
/// instead of dividing by zero. Range [0, 1].
///
/// Grayscale input has `max == min` everywhere and scores exactly 0.
pub fn saturation(image: &RasterImage) -> f64 {
    if image.pixel_count() == 0 {
        return METRIC_FALLBACK;
    }
    let total: f64 = image
        .rgb_triples()
        .map(|(r, g, b)| {
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            (max - min) as f64 / max.max(1) as f64
        })
        .sum();
    total / image.pixel_count() as f64
}

/// Resolution adequacy: pixel count relative to a reference count, capped.
///
/// `min(width*height / reference_pixels, cap)` — already on the 0–10 scale
/// for the stock reference (one megapixel) and cap (10). Zero width or
/// height means no usable metadata and falls back to [`METRIC_FALLBACK`];
/// a zero reference would be a config error and is rejected at config
/// validation, but is guarded here too.
pub fn resolution_adequacy(width: u32, height: u32, reference_pixels: u64, cap: f64) -> f64 {
    if width == 0 || height == 0 || reference_pixels == 0 {
        return METRIC_FALLBACK;
    }
    let pixels = width as u64 * height as u64;
    (pixels as f64 / reference_pixels as f64).min(cap)
}

/// Aspect-ratio conformance: distance from the nearest standard ratio.
///
/// The closest reference is chosen by absolute difference; on an exact tie
/// the earlier entry in the (ordered) reference list wins, so the result
/// never depends on iteration order of an unordered collection. Score is
/// `10 - |ratio - closest| * 10`: an exact match scores 10, decreasing
/// linearly with deviation, with no lower bound before the final clamp.
pub fn aspect_ratio_conformance(width: u32, height: u32, standard_ratios: &[f64]) -> f64 {
    if width == 0 || height == 0 || standard_ratios.is_empty() {
        return METRIC_FALLBACK;
    }
    let ratio = width as f64 / height as f64;
    let mut closest = standard_ratios[0];
    for &candidate in &standard_ratios[1..] {
        // Strict < keeps the first entry on ties
        if (candidate - ratio).abs() < (closest - ratio).abs() {
            closest = candidate;
        }
    }
    10.0 - (ratio - closest).abs() * 10.0
}
