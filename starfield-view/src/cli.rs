//! Command-line arguments for the star field binary.

use clap::Parser;
use starfield_core::config::SketchConfig;
use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "star_field.toml";

/// Star field command-line arguments.
///
/// CLI values override settings loaded from the config file.
#[derive(Parser, Debug)]
#[command(
    name = "star_field",
    about = "Procedural star field drawings for pen plotters"
)]
pub struct CliArgs {
    /// Path to a TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for placement and glyph selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of stars to place.
    #[arg(long)]
    pub num_stars: Option<usize>,

    /// Write the finalized drawing to this SVG file and exit without
    /// opening the viewer.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Draw bezier construction markers on a second layer.
    #[arg(long)]
    pub debug_overlay: bool,

    /// Log filter (error, warn, info, debug, trace or a full directive).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Config path to load: `--config`, or [`DEFAULT_CONFIG_PATH`].
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Apply CLI overrides to a loaded config.
    pub fn apply_to(&self, config: &mut SketchConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(n) = self.num_stars {
            config.num_stars = n;
        }
        if let Some(ref path) = self.export {
            config.output = path.clone();
        }
        if self.debug_overlay {
            config.debug_overlay = true;
        }
        if let Some(ref level) = self.log_level {
            config.log_level = level.clone();
        }
    }
}
