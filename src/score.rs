//! Normalization, aggregation, and grading.
//!
//! Raw metrics from [`metrics`](crate::metrics) land here to be mapped onto
//! the common 0–10 scale, averaged into one overall rating, and bucketed
//! into a letter grade. [`rate`] is the one entry point callers need: a
//! total, deterministic function from `RasterImage` + `ScoringConfig` to
//! [`Rating`]. Scoring the same image twice yields identical results — no
//! caches, no hidden state.

use crate::config::ScoringConfig;
use crate::metrics::{self, RawMetrics};
use crate::raster::RasterImage;
use serde::Serialize;

/// The six normalized scores, each clamped to [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricScores {
    pub sharpness: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub resolution: f64,
    pub aspect_ratio: f64,
}

impl MetricScores {
    /// The scores in a fixed order, for aggregation and display.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.sharpness,
            self.brightness,
            self.contrast,
            self.saturation,
            self.resolution,
            self.aspect_ratio,
        ]
    }
}

/// Letter grade buckets for an overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade for a 0–10 rating. Bands are checked highest first with
    /// inclusive lower bounds, so exactly 8.5 is an A.
    pub fn for_rating(overall: f64) -> Self {
        if overall >= 8.5 {
            Grade::A
        } else if overall >= 7.0 {
            Grade::B
        } else if overall >= 5.0 {
            Grade::C
        } else if overall >= 3.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scoring result for one image.
///
/// `overall_rating` keeps full floating-point precision; use
/// [`display_rating`](Rating::display_rating) for the one-decimal value
/// shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rating {
    pub overall_rating: f64,
    pub grade: Grade,
    pub scores: MetricScores,
}

impl Rating {
    /// Overall rating rounded to one decimal place for display.
    pub fn display_rating(&self) -> f64 {
        (self.overall_rating * 10.0).round() / 10.0
    }
}

/// Clamp a score to the common [0, 10] scale.
///
/// Runs after every extractor, including the nominally bounded ones:
/// aspect-ratio deviation goes negative and floating-point edge cases can
/// overshoot.
fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 10.0)
}

/// Map raw metrics onto the common 0–10 scale.
///
/// The four statistical metrics scale linearly against their configured
/// reference (`raw / reference * 10`); resolution and aspect-ratio arrive
/// already 0–10-scaled from their extractors and only pass through the
/// mandatory clamp.
pub fn normalize(raw: &RawMetrics, config: &ScoringConfig) -> MetricScores {
    MetricScores {
        sharpness: clamp_score(raw.sharpness / config.sharpness_reference * 10.0),
        brightness: clamp_score(raw.brightness / config.brightness_reference * 10.0),
        contrast: clamp_score(raw.contrast / config.contrast_reference * 10.0),
        saturation: clamp_score(raw.saturation / config.saturation_reference * 10.0),
        resolution: clamp_score(raw.resolution),
        aspect_ratio: clamp_score(raw.aspect_ratio),
    }
}

/// Equal-weight mean of the six normalized scores.
pub fn aggregate(scores: &MetricScores) -> f64 {
    let values = scores.as_array();
    values.iter().sum::<f64>() / values.len() as f64
}

/// Score an image: measure, normalize, aggregate, grade.
pub fn rate(image: &RasterImage, config: &ScoringConfig) -> Rating {
    let raw = metrics::measure(image, config);
    let scores = normalize(&raw, config);
    let overall_rating = aggregate(&scores);
    Rating {
        overall_rating,
        grade: Grade::for_rating(overall_rating),
        scores,
    }
}
