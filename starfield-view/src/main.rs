//! Application entry point for the star field sketch.
//!
//! Loads the configuration, applies CLI overrides and sets up logging.
//! With `--export` the drawing is generated, finalized and written without
//! a window; otherwise the interactive [`Viewer`] is started.

mod cli;
mod error;
mod logging;
mod viewer;

use clap::Parser;
use cli::CliArgs;
use error::AppError;
use starfield_core::{
    config::{ConfigSource, SketchConfig},
    sketch,
};
use tracing::info;
use viewer::Viewer;

/// Main entry point for the star field sketch.
///
/// Order matters here: the log level is part of the config, so the config
/// is loaded (and overridden by the CLI) before logging starts, and only
/// then is the config's origin reported.
///
/// ### Returns
/// `Ok(())` once the export is written or the window is closed, otherwise
/// the [`AppError`] that stopped the run.
fn main() -> Result<(), AppError> {
    let args = CliArgs::parse();
    let config_path = args.config_path();

    let (mut config, source) = SketchConfig::load_or_default(&config_path)?;
    args.apply_to(&mut config);

    logging::init_logging(&config.log_level);
    match source {
        ConfigSource::File => info!(path = %config_path.display(), "loaded sketch config"),
        ConfigSource::Defaults => {
            info!(path = %config_path.display(), "no config file found, using defaults")
        }
    }

    if args.export.is_some() {
        let seed = sketch::resolve_seed(&config);
        let sketch = sketch::export(&config, seed)?;
        info!(
            seed = sketch.seed,
            stars = sketch.stars.len(),
            path = %config.output.display(),
            "export finished"
        );
        return Ok(());
    }

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Star Field",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(config)))),
    )?;
    Ok(())
}
