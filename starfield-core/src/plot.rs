//! Turning placed stars into glyphs.
//!
//! For each star the canvas is moved to its center, a [`GlyphVariant`] is
//! picked by [`select_variant`], drawn, and the canvas is moved back so the
//! next star's coordinates are again absolute.

use crate::{
    canvas::Canvas,
    glyph::{draw_dot, draw_double_star, draw_star},
    types::{Radius, Star, StarFieldParams},
};
use rand::Rng;
use tracing::debug;

/// Chance that a large star is drawn as a double star.
pub const DOUBLE_STAR_CHANCE: f64 = 0.3;
/// Chance that a regular star is drawn at its reduced size.
pub const SMALL_STAR_CHANCE: f64 = 0.9;
/// Stars with `radius < min_radius + DOT_THRESHOLD` become plain circles.
pub const DOT_THRESHOLD: Radius = 4;
/// Extra radius added to plain circles.
pub const DOT_PADDING: Radius = 2;

/// How a single star is rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphVariant {
    /// Two overlaid stars, outer one sized to the full radius.
    DoubleStar { size: f32 },
    /// A plain circle.
    Dot { radius: f32 },
    /// A single star noticeably smaller than its footprint.
    SmallStar { size: f32 },
    /// A single star filling its footprint.
    FullStar { size: f32 },
}

/// Applies the selection policy to one star, first match wins:
///
/// 1. `radius` above the radius midpoint and `double_roll` → double star at
///    `radius`.
/// 2. `radius < min_radius + 4` → circle of radius `radius + 2`.
/// 3. `small_roll()` → single star at `min_radius + radius / 3`.
/// 4. otherwise → single star at `radius`.
///
/// `small_roll` is only called when branch 3 is reached.
///
/// ### Parameters
/// - `star` - The star being drawn.
/// - `params` - Field parameters providing the radius range.
/// - `double_roll` - Outcome of the double-star coin flip.
/// - `small_roll` - Lazily evaluated outcome of the small-star draw.
pub fn select_variant(
    star: &Star,
    params: &StarFieldParams,
    double_roll: bool,
    small_roll: impl FnOnce() -> bool,
) -> GlyphVariant {
    let r = star.radius;
    if r > params.radius_midpoint() && double_roll {
        GlyphVariant::DoubleStar { size: r as f32 }
    } else if r < params.min_radius.saturating_add(DOT_THRESHOLD) {
        GlyphVariant::Dot {
            radius: r.saturating_add(DOT_PADDING) as f32,
        }
    } else if small_roll() {
        GlyphVariant::SmallStar {
            size: params.min_radius.saturating_add(r / 3) as f32,
        }
    } else {
        GlyphVariant::FullStar { size: r as f32 }
    }
}

/// Picks a variant for `star`, drawing both rolls from `rng`.
///
/// The double-star coin is flipped for every star, before any branch is
/// evaluated, so the number of draws per star does not depend on its size.
pub fn choose_variant(star: &Star, params: &StarFieldParams, rng: &mut impl Rng) -> GlyphVariant {
    let double_roll = rng.random_bool(DOUBLE_STAR_CHANCE);
    select_variant(star, params, double_roll, || {
        rng.random_bool(SMALL_STAR_CHANCE)
    })
}

/// Draws `variant` around the canvas' local origin.
pub fn draw_variant(canvas: &mut Canvas, variant: GlyphVariant) {
    match variant {
        GlyphVariant::DoubleStar { size } => draw_double_star(canvas, size),
        GlyphVariant::Dot { radius } => draw_dot(canvas, radius),
        GlyphVariant::SmallStar { size } | GlyphVariant::FullStar { size } => {
            draw_star(canvas, size, 1.0)
        }
    }
}

/// Draws every star onto `canvas`.
///
/// ### Returns
/// The variant chosen for each star, in the order of `stars`.
pub fn plot_stars(
    canvas: &mut Canvas,
    stars: &[Star],
    params: &StarFieldParams,
    rng: &mut impl Rng,
) -> Vec<GlyphVariant> {
    let mut variants = Vec::with_capacity(stars.len());

    for star in stars {
        canvas.translate(star.center.x, star.center.y);
        let variant = choose_variant(star, params, rng);
        draw_variant(canvas, variant);
        canvas.translate(-star.center.x, -star.center.y);
        variants.push(variant);
    }

    let doubles = variants
        .iter()
        .filter(|v| matches!(v, GlyphVariant::DoubleStar { .. }))
        .count();
    let dots = variants
        .iter()
        .filter(|v| matches!(v, GlyphVariant::Dot { .. }))
        .count();
    debug!(stars = stars.len(), doubles, dots, "stars plotted");

    variants
}
