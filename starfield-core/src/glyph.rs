//! Star glyphs built from cubic bezier petals.
//!
//! All glyphs are drawn around the canvas' local origin; callers translate
//! the frame to a star's center first.

use crate::canvas::{Canvas, OVERLAY_LAYER};
use glam::Vec2;

/// Control-point offset (as a fraction of `size`) at curve scale 1.
pub const BASE_CURVE: f32 = 0.05;

/// Curve scale of the inner star of a double star: almost straight petals.
pub const INNER_CURVE_SCALE: f32 = 0.01;

/// Size of the inner star of a double star relative to the outer one.
pub const INNER_SIZE_RATIO: f32 = 0.6;

const OVERLAY_MARKER_SIZE: f32 = 5.0;

/// Draws one bezier, plus its construction markers when the canvas has the
/// debug overlay enabled.
pub fn draw_bezier(canvas: &mut Canvas, a1: Vec2, c1: Vec2, c2: Vec2, a2: Vec2) {
    canvas.bezier(a1, c1, c2, a2);

    if canvas.debug_overlay() {
        let layer = canvas.layer();
        canvas.stroke(OVERLAY_LAYER);
        canvas.square(a1, OVERLAY_MARKER_SIZE);
        canvas.square(a2, OVERLAY_MARKER_SIZE);
        canvas.line(a1, c1);
        canvas.line(a2, c2);
        canvas.circle(c1, OVERLAY_MARKER_SIZE);
        canvas.circle(c2, OVERLAY_MARKER_SIZE);
        canvas.stroke(layer);
    }
}

/// Draws a 4-petal star of the given `size`.
///
/// Each petal runs from `(size, 0)` to `(0, size)` with both control points
/// at `(size * curve, size * curve)`, `curve = 0.05 * curve_scale`; the
/// frame is rotated by 90° after each petal. Four quarter turns leave the
/// frame where it started.
///
/// ### Parameters
/// - `canvas` - Target canvas, positioned at the glyph center.
/// - `size` - Distance from the center to each petal tip.
/// - `curve_scale` - Larger values pull the petals outward, smaller values
///   flatten them toward straight lines.
pub fn draw_star(canvas: &mut Canvas, size: f32, curve_scale: f32) {
    let a1 = Vec2::new(size, 0.0);
    let a2 = Vec2::new(0.0, size);
    let c = Vec2::splat(size * BASE_CURVE * curve_scale);

    for _ in 0..4 {
        draw_bezier(canvas, a1, c, c, a2);
        canvas.rotate_degrees(90.0);
    }
}

/// Draws a star at `size` with a smaller, flatter star offset by 45° on top.
///
/// The frame is turned 45° for the inner star and then 315° more, so the
/// net rotation is a full turn.
pub fn draw_double_star(canvas: &mut Canvas, size: f32) {
    draw_star(canvas, size, 1.0);
    canvas.rotate_degrees(45.0);
    draw_star(canvas, size * INNER_SIZE_RATIO, INNER_CURVE_SCALE);
    canvas.rotate_degrees(315.0);
}

/// Plain circle used for the smallest stars.
pub fn draw_dot(canvas: &mut Canvas, radius: f32) {
    canvas.circle(Vec2::ZERO, radius);
}
