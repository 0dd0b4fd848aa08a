//! One full draw pass: placement, plotting and finalize.
//!
//! A single [`ChaCha8Rng`] seeded from [`SketchConfig::seed`] (or a fresh
//! random seed) feeds both placement and glyph selection, so a seed
//! reproduces the whole drawing.

use crate::{
    canvas::{Canvas, Drawing},
    config::SketchConfig,
    error::ExportError,
    finalize::{LineSort, run_finalizers},
    placement::place_stars,
    plot::{GlyphVariant, plot_stars},
    types::Star,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Output of one draw pass.
///
/// ### Fields
/// - `seed` - Seed the pass was generated from.
/// - `stars` - Placed stars, in placement order.
/// - `variants` - Glyph chosen for each star (same order as `stars`).
/// - `forced` - Stars accepted while still overlapping an earlier one.
/// - `drawing` - The finished vector drawing.
#[derive(Debug, Clone)]
pub struct Sketch {
    pub seed: u64,
    pub stars: Vec<Star>,
    pub variants: Vec<GlyphVariant>,
    pub forced: usize,
    pub drawing: Drawing,
}

/// Returns the configured seed, or draws a new one.
pub fn resolve_seed(config: &SketchConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Generates and plots a star field for `config` from `seed`.
///
/// The returned drawing is not finalized yet; see [`finalize`].
pub fn draw(config: &SketchConfig, seed: u64) -> Sketch {
    let params = config.params();
    let page = config.page_size();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let placement = place_stars(&params, &mut rng);

    let mut canvas = Canvas::new(page.x, page.y).with_debug_overlay(config.debug_overlay);
    let variants = plot_stars(&mut canvas, &placement.stars, &params, &mut rng);

    info!(
        seed,
        stars = placement.stars.len(),
        forced = placement.forced,
        paths = canvas.paths().len(),
        "star field drawn"
    );

    Sketch {
        seed,
        stars: placement.stars,
        variants,
        forced: placement.forced,
        drawing: canvas.finish(),
    }
}

/// Applies the default finalize pipeline (path sorting) to `sketch`.
pub fn finalize(sketch: &mut Sketch) {
    run_finalizers(&mut sketch.drawing, &[&LineSort::default()]);
}

/// Draws, finalizes and writes a sketch to the configured output path.
pub fn export(config: &SketchConfig, seed: u64) -> Result<Sketch, ExportError> {
    let mut sketch = draw(config, seed);
    finalize(&mut sketch);
    sketch.drawing.write_svg(&config.output)?;
    Ok(sketch)
}
