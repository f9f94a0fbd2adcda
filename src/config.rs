//! Scoring configuration: normalization references and geometry targets.
//!
//! Thresholds are an explicit value passed into [`score::rate`](crate::score::rate),
//! never process-wide state, so tests can vary them freely. The stock values
//! reproduce the reference scoring behavior; a TOML file can override any
//! subset of fields.
//!
//! Grade cutoffs are deliberately *not* configuration: they are part of the
//! output contract (a "B" must mean the same thing everywhere), while the
//! values here are measurement tuning.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// References and targets for the six quality metrics.
///
/// Each normalization reference is the raw value that maps to a full score
/// of 10 (before clamping); see [`score`](crate::score) for the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Grayscale mean mapping to a full brightness score.
    pub brightness_reference: f64,
    /// Grayscale standard deviation mapping to a full contrast score.
    pub contrast_reference: f64,
    /// Mean squared second difference mapping to a full sharpness score.
    pub sharpness_reference: f64,
    /// Mean chroma range ratio mapping to a full saturation score.
    pub saturation_reference: f64,
    /// Pixel count considered "ideal" resolution (stock: one megapixel).
    pub reference_pixels: u64,
    /// Cap on the raw resolution score.
    pub resolution_cap: f64,
    /// Ordered list of standard aspect ratios; order breaks ties.
    pub standard_aspect_ratios: Vec<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            brightness_reference: 128.0,
            contrast_reference: 50.0,
            sharpness_reference: 100.0,
            saturation_reference: 0.5,
            reference_pixels: 1024 * 1024,
            resolution_cap: 10.0,
            standard_aspect_ratios: vec![4.0 / 3.0, 16.0 / 9.0, 1.0],
        }
    }
}

impl ScoringConfig {
    /// Load a config from a TOML file, falling back to stock values for
    /// omitted fields, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make normalization meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let references = [
            ("brightness_reference", self.brightness_reference),
            ("contrast_reference", self.contrast_reference),
            ("sharpness_reference", self.sharpness_reference),
            ("saturation_reference", self.saturation_reference),
        ];
        for (name, value) in references {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.reference_pixels == 0 {
            return Err(ConfigError::Invalid(
                "reference_pixels must be positive".to_string(),
            ));
        }
        if !self.resolution_cap.is_finite() || self.resolution_cap <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "resolution_cap must be a positive number, got {}",
                self.resolution_cap
            )));
        }
        if self.standard_aspect_ratios.is_empty() {
            return Err(ConfigError::Invalid(
                "standard_aspect_ratios must not be empty".to_string(),
            ));
        }
        for &ratio in &self.standard_aspect_ratios {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "standard_aspect_ratios entries must be positive, got {ratio}"
                )));
            }
        }
        Ok(())
    }
}

/// Stock config with every option documented, for `photograde gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = ScoringConfig::default();
    format!(
        r#"# photograde scoring configuration
#
# Each *_reference is the raw metric value that earns a full score of 10;
# raw values are scaled linearly against it and clamped to [0, 10].

# Grayscale mean (0-255) for a full brightness score.
brightness_reference = {brightness}

# Grayscale standard deviation (0-127.5) for a full contrast score.
contrast_reference = {contrast}

# Mean squared second difference for a full sharpness score.
sharpness_reference = {sharpness}

# Mean chroma range ratio (0-1) for a full saturation score.
saturation_reference = {saturation}

# Pixel count considered ideal resolution (stock: 1024*1024, one megapixel).
reference_pixels = {pixels}

# Cap on the raw resolution score.
resolution_cap = {cap}

# Standard aspect ratios, as width/height. Order matters: when an image is
# equidistant from two entries, the earlier one wins.
standard_aspect_ratios = [1.3333333333333333, 1.7777777777777777, 1.0]
"#,
        brightness = defaults.brightness_reference,
        contrast = defaults.contrast_reference,
        sharpness = defaults.sharpness_reference,
        saturation = defaults.saturation_reference,
        pixels = defaults.reference_pixels,
        cap = defaults.resolution_cap,
    )
}
