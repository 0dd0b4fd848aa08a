//! Errors raised at the file-system edges of the sketch.
//!
//! Star placement and drawing never fail; only reading configuration and
//! writing output can.

/// Errors that can occur when loading a sketch configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse TOML content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] toml::de::Error),
}

/// Errors that can occur when writing a finished drawing.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Failed to write the SVG file to disk.
    #[error("failed to write svg: {0}")]
    WriteError(#[source] std::io::Error),
}
