//! Vector drawing surface with a movable local frame.
//!
//! [`Canvas`] behaves like a plotter pen: callers `translate` and `rotate`
//! the local frame and then emit primitives in local coordinates. Every
//! primitive is mapped through the current frame at the moment it is drawn,
//! so the resulting [`Drawing`] only holds absolute page coordinates.

use glam::{Affine2, Vec2};

/// Pen index a path is drawn with.
pub type Layer = u32;

/// Layer used for the artwork itself.
pub const MAIN_LAYER: Layer = 1;
/// Layer used for construction markers when the debug overlay is on.
pub const OVERLAY_LAYER: Layer = 2;

/// Canvas units per inch (CSS pixels).
pub const UNITS_PER_INCH: f32 = 96.0;

/// A single primitive in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Cubic bezier: anchor, control, control, anchor.
    CubicBezier([Vec2; 4]),
    Circle { center: Vec2, radius: f32 },
    /// Straight segments through `points`, which is never empty.
    ///
    /// [`Canvas`] only emits two-point lines and four-point squares;
    /// hand-built polylines must keep at least one point.
    Polyline { points: Vec<Vec2>, closed: bool },
}

impl Shape {
    /// Point where the pen goes down.
    ///
    /// Circles start at their rightmost point. An empty polyline breaks the
    /// [`Shape::Polyline`] invariant and reports the origin.
    pub fn start(&self) -> Vec2 {
        match self {
            Shape::CubicBezier(p) => p[0],
            Shape::Circle { center, radius } => *center + Vec2::new(*radius, 0.0),
            Shape::Polyline { points, .. } => points.first().copied().unwrap_or(Vec2::ZERO),
        }
    }

    /// Point where the pen lifts.
    pub fn end(&self) -> Vec2 {
        match self {
            Shape::CubicBezier(p) => p[3],
            Shape::Circle { .. } => self.start(),
            Shape::Polyline { points, closed } => {
                if *closed {
                    self.start()
                } else {
                    points.last().copied().unwrap_or(Vec2::ZERO)
                }
            }
        }
    }

    /// Whether the pen returns to where it started.
    pub fn is_closed(&self) -> bool {
        match self {
            Shape::CubicBezier(_) => false,
            Shape::Circle { .. } => true,
            Shape::Polyline { closed, .. } => *closed,
        }
    }

    /// Same geometry traced in the opposite direction.
    pub fn reversed(&self) -> Shape {
        match self {
            Shape::CubicBezier([a, b, c, d]) => Shape::CubicBezier([*d, *c, *b, *a]),
            Shape::Circle { .. } => self.clone(),
            Shape::Polyline { points, closed } => Shape::Polyline {
                points: points.iter().rev().copied().collect(),
                closed: *closed,
            },
        }
    }
}

/// A shape tagged with the pen layer it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub layer: Layer,
    pub shape: Shape,
}

/// Finished vector output: page size plus paths in drawing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    pub width: f32,
    pub height: f32,
    pub paths: Vec<Path>,
}

impl Drawing {
    /// Creates an empty drawing of `width` x `height` canvas units.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    /// Creates an empty drawing for a page given in inches.
    pub fn from_inches(width_in: f32, height_in: f32) -> Self {
        Self::new(width_in * UNITS_PER_INCH, height_in * UNITS_PER_INCH)
    }

    /// Distinct layers in ascending order.
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers: Vec<Layer> = self.paths.iter().map(|p| p.layer).collect();
        layers.sort_unstable();
        layers.dedup();
        layers
    }

    /// Total pen-up distance between consecutive paths of the same layer.
    pub fn pen_up_distance(&self) -> f32 {
        self.paths
            .windows(2)
            .filter(|w| w[0].layer == w[1].layer)
            .map(|w| w[0].shape.end().distance(w[1].shape.start()))
            .sum()
    }
}

/// Pen state used while composing a [`Drawing`].
#[derive(Debug)]
pub struct Canvas {
    frame: Affine2,
    layer: Layer,
    debug_overlay: bool,
    drawing: Drawing,
}

impl Canvas {
    /// Creates a canvas over an empty page of `width` x `height` units.
    ///
    /// The frame starts at the identity, the pen on [`MAIN_LAYER`] and the
    /// debug overlay off.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            frame: Affine2::IDENTITY,
            layer: MAIN_LAYER,
            debug_overlay: false,
            drawing: Drawing::new(width, height),
        }
    }

    /// Enables or disables construction markers around bezier curves.
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    /// Whether glyphs should add construction markers.
    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    /// Current local-to-page transform.
    pub fn frame(&self) -> Affine2 {
        self.frame
    }

    /// Layer new primitives are tagged with.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Selects the pen layer for subsequent primitives.
    pub fn stroke(&mut self, layer: Layer) {
        self.layer = layer;
    }

    /// Moves the local origin by `(x, y)` in local coordinates.
    pub fn translate(&mut self, x: f32, y: f32) {
        self.frame = self.frame * Affine2::from_translation(Vec2::new(x, y));
    }

    /// Rotates the local frame by `degrees` around the local origin.
    pub fn rotate_degrees(&mut self, degrees: f32) {
        self.frame = self.frame * Affine2::from_angle(degrees.to_radians());
    }

    #[inline]
    fn to_page(&self, p: Vec2) -> Vec2 {
        self.frame.transform_point2(p)
    }

    fn push(&mut self, shape: Shape) {
        self.drawing.paths.push(Path {
            layer: self.layer,
            shape,
        });
    }

    /// Draws a cubic bezier.
    ///
    /// ### Parameters
    /// - `a1` - Start anchor, in local coordinates.
    /// - `c1` - Control point pulling away from `a1`.
    /// - `c2` - Control point pulling into `a2`.
    /// - `a2` - End anchor.
    pub fn bezier(&mut self, a1: Vec2, c1: Vec2, c2: Vec2, a2: Vec2) {
        let pts = [a1, c1, c2, a2].map(|p| self.to_page(p));
        self.push(Shape::CubicBezier(pts));
    }

    /// Draws a circle around a local `center`.
    ///
    /// Frames are rigid, so the radius is kept as is.
    pub fn circle(&mut self, center: Vec2, radius: f32) {
        let center = self.to_page(center);
        self.push(Shape::Circle { center, radius });
    }

    /// Draws an open two-point polyline from `a` to `b`.
    pub fn line(&mut self, a: Vec2, b: Vec2) {
        let points = vec![self.to_page(a), self.to_page(b)];
        self.push(Shape::Polyline {
            points,
            closed: false,
        });
    }

    /// Axis-aligned (in local coordinates) square of side `size` centered
    /// on `center`.
    pub fn square(&mut self, center: Vec2, size: f32) {
        let h = size * 0.5;
        let points = [
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ]
        .iter()
        .map(|&off| self.to_page(center + off))
        .collect();
        self.push(Shape::Polyline {
            points,
            closed: true,
        });
    }

    /// Paths drawn so far.
    pub fn paths(&self) -> &[Path] {
        &self.drawing.paths
    }

    /// Consumes the canvas and returns what was drawn.
    pub fn finish(self) -> Drawing {
        self.drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, EPS)
    }

    #[test]
    fn from_inches_uses_css_units() {
        let d = Drawing::from_inches(15.0, 11.0);
        assert_eq!(d.width, 1440.0);
        assert_eq!(d.height, 1056.0);
        assert!(d.paths.is_empty());
    }

    #[test]
    fn translate_then_rotate_maps_local_points() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.translate(10.0, 20.0);
        canvas.rotate_degrees(90.0);
        canvas.line(Vec2::ZERO, Vec2::new(1.0, 0.0));

        let Shape::Polyline { points, closed } = &canvas.paths()[0].shape else {
            panic!("expected a polyline");
        };
        assert!(!*closed);
        assert!(close(points[0], Vec2::new(10.0, 20.0)));
        // Local +x now points along page +y.
        assert!(close(points[1], Vec2::new(10.0, 21.0)));
    }

    #[test]
    fn translate_back_restores_identity() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.translate(37.5, -12.0);
        canvas.translate(-37.5, 12.0);
        assert!(canvas.frame().abs_diff_eq(Affine2::IDENTITY, EPS));
    }

    #[test]
    fn circle_keeps_radius_under_rotation() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.translate(50.0, 50.0);
        canvas.rotate_degrees(33.0);
        canvas.circle(Vec2::ZERO, 7.0);

        assert_eq!(
            canvas.paths()[0].shape,
            Shape::Circle {
                center: Vec2::new(50.0, 50.0),
                radius: 7.0
            }
        );
    }

    #[test]
    fn square_is_closed_four_point_polyline() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.square(Vec2::new(5.0, 5.0), 4.0);

        let Shape::Polyline { points, closed } = &canvas.paths()[0].shape else {
            panic!("expected a polyline");
        };
        assert!(*closed);
        assert_eq!(points.len(), 4);
        assert!(close(points[0], Vec2::new(3.0, 3.0)));
        assert!(close(points[2], Vec2::new(7.0, 7.0)));
    }

    #[test]
    fn stroke_tags_following_paths() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.line(Vec2::ZERO, Vec2::ONE);
        canvas.stroke(OVERLAY_LAYER);
        canvas.circle(Vec2::ZERO, 1.0);
        canvas.stroke(MAIN_LAYER);

        let drawing = canvas.finish();
        assert_eq!(drawing.paths[0].layer, MAIN_LAYER);
        assert_eq!(drawing.paths[1].layer, OVERLAY_LAYER);
        assert_eq!(drawing.layers(), vec![MAIN_LAYER, OVERLAY_LAYER]);
    }

    #[test]
    fn reversed_bezier_swaps_endpoints() {
        let shape = Shape::CubicBezier([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(3.0, 3.0),
        ]);
        let rev = shape.reversed();
        assert_eq!(rev.start(), shape.end());
        assert_eq!(rev.end(), shape.start());
        assert_eq!(rev.reversed(), shape);
    }

    #[test]
    fn canvas_polylines_are_never_empty() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.line(Vec2::ZERO, Vec2::ONE);
        canvas.square(Vec2::ZERO, 2.0);

        for path in canvas.paths() {
            let Shape::Polyline { points, .. } = &path.shape else {
                panic!("expected a polyline");
            };
            assert!(!points.is_empty());
            assert_eq!(path.shape.start(), points[0]);
        }
    }

    #[test]
    fn pen_up_distance_ignores_layer_changes() {
        let mut d = Drawing::new(10.0, 10.0);
        let seg = |a: Vec2, b: Vec2| Shape::Polyline {
            points: vec![a, b],
            closed: false,
        };
        d.paths.push(Path {
            layer: 1,
            shape: seg(Vec2::ZERO, Vec2::new(1.0, 0.0)),
        });
        d.paths.push(Path {
            layer: 1,
            shape: seg(Vec2::new(4.0, 4.0), Vec2::new(5.0, 5.0)),
        });
        d.paths.push(Path {
            layer: 2,
            shape: seg(Vec2::new(100.0, 0.0), Vec2::new(0.0, 0.0)),
        });

        assert!((d.pen_up_distance() - 5.0).abs() < EPS);
    }
}
