//! # photograde
//!
//! Deterministic image-quality scoring. Given a decoded raster image,
//! photograde computes six independent pixel statistics, maps each onto a
//! common 0–10 scale, averages them into one overall rating, and buckets
//! that rating into a letter grade (A–F).
//!
//! # Architecture: One Pipeline, Pure Stages
//!
//! ```text
//! decode      bytes/file  →  RasterImage     (validated pixel buffer)
//! measure     RasterImage →  RawMetrics      (six raw statistics)
//! normalize   RawMetrics  →  MetricScores    (each clamped to [0,10])
//! aggregate   MetricScores → overall rating  (equal-weight mean)
//! grade       rating      →  A/B/C/D/F       (fixed inclusive cutoffs)
//! ```
//!
//! Everything after decoding is a pure function: no I/O, no caches, no
//! shared state. Scoring the same image with the same config always
//! produces bit-identical results, so results are reproducible across
//! machines and safe to recompute.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`raster`] | `RasterImage` value type — validated, immutable pixel buffer |
//! | [`metrics`] | The six raw extractors: sharpness, brightness, contrast, saturation, resolution, aspect ratio |
//! | [`score`] | Normalization, equal-weight aggregation, letter grading, and the [`score::rate`] entry point |
//! | [`config`] | `ScoringConfig` — thresholds and references, TOML-loadable, passed explicitly |
//! | [`decode`] | File/bytes → `RasterImage` via the `image` crate (JPEG, PNG, TIFF, WebP) |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## The Metrics Are Statistics, Not Semantics
//!
//! photograde measures what can be measured from pixels alone. There is no
//! face detection, no content classification, no learned model — a
//! perfectly exposed photo of the wrong thing still scores well. That is
//! the point: the score is reproducible, explainable, and cheap.
//!
//! ## Explicit Configuration, No Globals
//!
//! Every threshold lives in [`config::ScoringConfig`], which is passed into
//! [`score::rate`] by value reference. Tests vary thresholds freely without
//! touching process state, and two callers with different configs can score
//! concurrently without interference.
//!
//! ## Degrade Gracefully, Fail Fast
//!
//! A buffer whose length disagrees with its declared dimensions is rejected
//! at construction — that is corruption, and no partial result is better
//! than a wrong one. Everything else degrades: an image too small for the
//! sharpness window, or with zero dimensions, scores 0 on the affected
//! metric ([`metrics::METRIC_FALLBACK`]) and the pipeline carries on.
//! One policy, applied uniformly.
//!
//! ## Pure-Rust Decoding
//!
//! The [`decode`] module uses the `image` crate's pure-Rust decoders. No
//! ImageMagick, no system libraries: the binary is self-contained and the
//! same bytes decode identically everywhere.

pub mod config;
pub mod decode;
pub mod metrics;
pub mod output;
pub mod raster;
pub mod score;

pub use config::ScoringConfig;
pub use raster::{ChannelLayout, RasterError, RasterImage};
pub use score::{Grade, MetricScores, Rating, rate};

#[cfg(test)]
pub(crate) mod test_helpers;
