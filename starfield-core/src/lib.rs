//! Procedural star-field drawings for pen plotters.
//!
//! Main components:
//! - [`types`]: stars, field parameters and footprints.
//! - [`placement`]: rejection-sampled, non-overlapping star placement.
//! - [`canvas`]: pen-style drawing surface and the resulting [`canvas::Drawing`].
//! - [`glyph`]: bezier star and double-star glyphs.
//! - [`plot`]: per-star glyph selection and plotting.
//! - [`finalize`]: post-processing such as path sorting.
//! - [`svg`]: SVG output.
//! - [`config`]: TOML-backed sketch configuration.
//! - [`sketch`]: a full draw pass tying the above together.
//! - [`error`]: configuration and export errors.

pub mod canvas;
pub mod config;
pub mod error;
pub mod finalize;
pub mod glyph;
pub mod placement;
pub mod plot;
pub mod sketch;
pub mod svg;
pub mod types;
