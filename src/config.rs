//! Crop configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Stock defaults ([`CropConfig::default`])
//! 2. An optional TOML file passed with `--config` (never read implicitly)
//! 3. Command-line flags ([`Overrides`])
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! ratio = "1:1"         # Target aspect ratio: "1:1" or "3:2"
//! quality = 90          # JPEG quality (1-100); other formats are lossless
//! suffix = "_cropped"   # Inserted between file name and extension
//! ```
//!
//! Config files are sparse: set just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::imaging::{AspectRatio, Quality};
use crate::naming::DEFAULT_SUFFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Crop settings. All fields have defaults; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropConfig {
    /// Target aspect ratio when none is given on the command line.
    pub ratio: AspectRatio,
    /// JPEG encoding quality, 1-100.
    pub quality: u32,
    /// Output filename suffix, e.g. `_cropped` for `photo_cropped.jpg`.
    pub suffix: String,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            ratio: AspectRatio::default(),
            quality: Quality::default().value(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl CropConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        if self.suffix.is_empty() {
            return Err(ConfigError::Validation(
                "suffix must not be empty (the source would be overwritten)".into(),
            ));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "suffix must not contain path separators".into(),
            ));
        }
        Ok(())
    }

    pub fn quality(&self) -> Quality {
        Quality::new(self.quality)
    }

    /// Apply command-line overrides on top of this config and re-validate.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(ratio) = overrides.ratio {
            self.ratio = ratio;
        }
        if let Some(quality) = overrides.quality {
            self.quality = quality;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Values given on the command line. `None` keeps the config value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub ratio: Option<AspectRatio>,
    pub quality: Option<u32>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a TOML table.
///
/// This is the base layer the config file is laid over.
pub fn stock_defaults_table() -> toml::Table {
    match toml::Value::try_from(CropConfig::default()) {
        Ok(toml::Value::Table(table)) => table,
        _ => unreachable!("CropConfig serializes to a TOML table"),
    }
}

/// Lay the keys of `overlay` over `base`.
///
/// Every config key holds a scalar, so an overlay value replaces the base
/// value outright and base keys missing from the overlay are kept.
pub fn merge_toml(mut base: toml::Table, overlay: toml::Table) -> toml::Table {
    base.extend(overlay);
    base
}

/// Read a config file as a raw TOML table.
///
/// The file was named explicitly, so a missing file is an error.
pub fn load_raw_config(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto a base table, then deserialize and validate.
pub fn resolve_config(
    base: toml::Table,
    overlay: Option<toml::Table>,
) -> Result<CropConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CropConfig = toml::Value::Table(merged).try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config: stock defaults plus the optional file.
pub fn load_config(path: Option<&Path>) -> Result<CropConfig, ConfigError> {
    let overlay = path.map(load_raw_config).transpose()?;
    resolve_config(stock_defaults_table(), overlay)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# ratio-crop configuration
# =========================
#
# Pass this file with `ratio-crop --config <file>`. Every key is optional;
# command-line flags override the values here.

# Target aspect ratio when --ratio is not given.
# "1:1" (square) or "3:2" (standard 35mm frame).
ratio = "1:1"

# JPEG encoding quality (1-100). PNG, BMP, TIFF and WebP output is lossless.
quality = 90

# Inserted between the file name and its extension:
# photo.jpg -> photo_cropped.jpg
suffix = "_cropped"
"##
}
