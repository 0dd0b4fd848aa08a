//! Sketch configuration loaded from a TOML file.
//!
//! Every key is optional: missing keys fall back to [`SketchConfig::default`],
//! so a file can override just the values it cares about. A missing file is
//! not an error either; the defaults are used as is.

use crate::{
    canvas::UNITS_PER_INCH,
    error::ConfigError,
    types::{Radius, StarFieldParams},
};
use glam::Vec2;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where a loaded [`SketchConfig`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from the given file.
    File,
    /// No file at the given path; built-in defaults were used.
    Defaults,
}

/// All user-tunable values of one sketch run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    // ── Page ─────────────────────────────────────────────────────────────────
    /// Paper width in inches.
    pub paper_size_x: f32,
    /// Paper height in inches.
    pub paper_size_y: f32,

    // ── Star field ───────────────────────────────────────────────────────────
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_radius: Radius,
    pub max_radius: Radius,
    pub num_stars: usize,
    pub star_gap: u32,

    // ── Run ──────────────────────────────────────────────────────────────────
    /// Fixed seed; a fresh one is drawn per run when absent.
    pub seed: Option<u64>,
    /// Draw bezier construction markers on a second layer.
    pub debug_overlay: bool,
    /// Where exported SVG files go.
    pub output: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        let params = StarFieldParams::default();
        Self {
            paper_size_x: 15.0,
            paper_size_y: 11.0,
            min_x: params.min_x,
            max_x: params.max_x,
            min_y: params.min_y,
            max_y: params.max_y,
            min_radius: params.min_radius,
            max_radius: params.max_radius,
            num_stars: params.num_stars,
            star_gap: params.star_gap,
            seed: None,
            debug_overlay: false,
            output: PathBuf::from("star_field.svg"),
            log_level: "info".to_string(),
        }
    }
}

impl SketchConfig {
    /// Parses a TOML document, filling missing keys with defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::ParseError)
    }

    /// Loads the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_toml_str(&contents)
    }

    /// Loads the config at `path`, or the defaults when the file does not
    /// exist. Unreadable or malformed files are still errors.
    ///
    /// Config is usually loaded before logging is set up (the log level
    /// lives in the config), so nothing is logged here. The returned
    /// [`ConfigSource`] lets the caller report it once a subscriber exists.
    ///
    /// ### Parameters
    /// - `path` - Location of the TOML file.
    ///
    /// ### Returns
    /// The config together with where it came from.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        Ok((Self::load(path)?, ConfigSource::File))
    }

    /// Star-field parameters assembled from the bound fields.
    pub fn params(&self) -> StarFieldParams {
        StarFieldParams {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            num_stars: self.num_stars,
            star_gap: self.star_gap,
        }
    }

    /// Page size in canvas units.
    pub fn page_size(&self) -> Vec2 {
        Vec2::new(self.paper_size_x, self.paper_size_y) * UNITS_PER_INCH
    }
}
