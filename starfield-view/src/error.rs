//! Top-level error of the star field binary.

use starfield_core::error::{ConfigError, ExportError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("viewer failed: {0}")]
    Viewer(#[from] eframe::Error),
}
