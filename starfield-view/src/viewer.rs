//! Interactive star field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the sketch configuration and
//! the last generated [`Sketch`], and implements [`eframe::App`] to edit
//! parameters, regenerate the field and export it as SVG.

use eframe::App;
use glam::Vec2;
use starfield_core::{
    canvas::{OVERLAY_LAYER, Shape},
    config::SketchConfig,
    error::ExportError,
    sketch::{self, Sketch},
};
use tracing::{error, info};

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `cfg` - Sketch configuration bound to the side panel.
/// - `sketch` - Last generated sketch (not finalized).
/// - `lock_seed` - Keep the current seed when regenerating.
///
/// - `zoom` - Canvas units to screen points.
/// - `pan` - Screen-space pan offset in points.
///
/// - `status` - Message shown in the status bar after an export.
pub struct Viewer {
    cfg: SketchConfig,
    sketch: Sketch,
    lock_seed: bool,

    zoom: f32,
    pan: egui::Vec2,

    status: Option<String>,
}

impl Viewer {
    /// Creates a viewer and draws the first sketch.
    ///
    /// A seed fixed in `cfg` is kept across regenerations until the seed
    /// lock is released in the UI.
    pub fn new(cfg: SketchConfig) -> Self {
        let seed = sketch::resolve_seed(&cfg);
        let lock_seed = cfg.seed.is_some();
        let sketch = sketch::draw(&cfg, seed);

        Self {
            cfg,
            sketch,
            lock_seed,
            zoom: 0.6,
            pan: egui::vec2(0.0, 0.0),
            status: None,
        }
    }

    /// Redraws with a fresh seed, or the current one when locked.
    fn regenerate(&mut self) {
        let seed = if self.lock_seed {
            self.sketch.seed
        } else {
            rand::random()
        };
        self.redraw_with(seed);
    }

    /// Redraws with `seed` and the current configuration.
    fn redraw_with(&mut self, seed: u64) {
        self.sketch = sketch::draw(&self.cfg, seed);
        self.status = None;
    }

    /// Finalizes a copy of the current sketch and writes it to `cfg.output`.
    fn export(&mut self) -> Result<(), ExportError> {
        let mut finalized = self.sketch.clone();
        sketch::finalize(&mut finalized);
        finalized.drawing.write_svg(&self.cfg.output)?;
        info!(seed = finalized.seed, path = %self.cfg.output.display(), "exported");
        Ok(())
    }

    /// Top-left of the page in screen space, with the page centered in `rect`.
    ///
    /// The page is scaled by `zoom` around the center of `rect`, then moved
    /// by `pan`.
    fn page_origin(&self, rect: egui::Rect) -> egui::Pos2 {
        let page = egui::vec2(self.sketch.drawing.width, self.sketch.drawing.height);
        rect.center() - page * self.zoom * 0.5 + self.pan
    }

    /// Converts a page position to screen-space.
    ///
    /// Page coordinates already grow downward like egui's, so unlike a
    /// y-up world no axis is flipped: the point is scaled by `zoom` and
    /// offset from [`Viewer::page_origin`].
    ///
    /// ### Parameters
    /// - `p` - Position in page (canvas) units.
    /// - `rect` - Screen-space rectangle of the drawing area.
    ///
    /// ### Returns
    /// The corresponding egui position in screen-space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let origin = self.page_origin(rect);
        egui::pos2(origin.x + p.x * self.zoom, origin.y + p.y * self.zoom)
    }

    /// Converts a screen-space position back to page units.
    ///
    /// Inverse of [`Viewer::world_to_screen`]; used to keep the point under
    /// the cursor fixed while zooming.
    ///
    /// ### Parameters
    /// - `p` - Screen-space position, usually the pointer.
    /// - `rect` - Screen-space rectangle of the drawing area.
    ///
    /// ### Returns
    /// The position in page units.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let origin = self.page_origin(rect);
        Vec2::new((p.x - origin.x) / self.zoom, (p.y - origin.y) / self.zoom)
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(ui: &mut egui::Ui, label: &str, value: &mut f32, speed: f64) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).speed(speed)).changed()
        })
        .inner
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the top panel (regenerate, export, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟳ Regenerate").clicked() {
                    self.regenerate();
                }

                ui.checkbox(&mut self.lock_seed, "Lock seed");

                let mut seed = self.sketch.seed;
                if ui
                    .add(egui::DragValue::new(&mut seed).prefix("seed = "))
                    .changed()
                {
                    self.redraw_with(seed);
                }

                ui.separator();
                if ui.button("💾 Export SVG").clicked() {
                    self.status = Some(match self.export() {
                        Ok(()) => format!("wrote {}", self.cfg.output.display()),
                        Err(e) => {
                            error!("{e}");
                            e.to_string()
                        }
                    });
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=5.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("paths = {}", self.sketch.drawing.paths.len()));
                ui.label(format!("overlapping = {}", self.sketch.forced));
                ui.label(format!("stars = {}", self.sketch.stars.len()));
                ui.label(format!("seed = {}", self.sketch.seed));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
    }

    /// Builds the right-hand panel bound to the sketch parameters.
    ///
    /// Any edit redraws with the current seed.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        let mut changed = false;

        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                let cfg = &mut self.cfg;
                ui.heading("Star field");

                ui.separator();
                ui.label("Paper (in)");
                changed |= Self::labeled_drag_f32(ui, "paper_size_x:", &mut cfg.paper_size_x, 0.5);
                changed |= Self::labeled_drag_f32(ui, "paper_size_y:", &mut cfg.paper_size_y, 0.5);

                ui.separator();
                ui.label("Bounds");
                changed |= Self::labeled_drag_f32(ui, "min_x:", &mut cfg.min_x, 20.0);
                changed |= Self::labeled_drag_f32(ui, "max_x:", &mut cfg.max_x, 20.0);
                changed |= Self::labeled_drag_f32(ui, "min_y:", &mut cfg.min_y, 20.0);
                changed |= Self::labeled_drag_f32(ui, "max_y:", &mut cfg.max_y, 20.0);

                ui.separator();
                ui.label("Stars");
                changed |=
                    Self::labeled_drag_u32(ui, "min_radius:", &mut cfg.min_radius, 1..=500, 1.0);
                changed |=
                    Self::labeled_drag_u32(ui, "max_radius:", &mut cfg.max_radius, 1..=500, 1.0);
                changed |=
                    Self::labeled_drag_usize(ui, "num_stars:", &mut cfg.num_stars, 0..=2000, 5.0);
                changed |= Self::labeled_drag_u32(ui, "star_gap:", &mut cfg.star_gap, 0..=200, 2.0);

                ui.separator();
                changed |= ui
                    .checkbox(&mut cfg.debug_overlay, "Debug overlay")
                    .changed();

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    *cfg = SketchConfig::default();
                    changed = true;
                }
            });

        if changed {
            self.redraw_with(self.sketch.seed);
        }
    }

    /// Builds the central panel where the page and the drawing are painted.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 5.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            // Page outline and placement bounds.
            let d = &self.sketch.drawing;
            self.paint_rect(
                &painter,
                rect,
                Vec2::ZERO,
                Vec2::new(d.width, d.height),
                egui::Stroke::new(1.0, egui::Color32::GRAY),
            );
            self.paint_rect(
                &painter,
                rect,
                Vec2::new(self.cfg.min_x, self.cfg.min_y),
                Vec2::new(self.cfg.max_x, self.cfg.max_y),
                egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(255, 255, 0, 64)),
            );

            self.paint_drawing(&painter, rect);
        });
    }

    /// Paints the outline of an axis-aligned page-space rectangle.
    ///
    /// Used for the paper edge and the placement bounds.
    ///
    /// ### Parameters
    /// - `painter` - Painter clipped to the central panel.
    /// - `rect` - Screen-space rectangle of the drawing area.
    /// - `min`, `max` - Opposite corners in page units.
    /// - `stroke` - Outline stroke.
    fn paint_rect(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        min: Vec2,
        max: Vec2,
        stroke: egui::Stroke,
    ) {
        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        let points: Vec<egui::Pos2> = corners
            .iter()
            .map(|&c| self.world_to_screen(c, rect))
            .collect();
        painter.add(egui::Shape::closed_line(points, stroke));
    }

    /// Paints every path of the current sketch.
    ///
    /// Beziers become [`egui::epaint::CubicBezierShape`]s, circles keep
    /// their radius scaled by `zoom`, and polylines are drawn open or
    /// closed. Paths on [`OVERLAY_LAYER`] are drawn in red.
    fn paint_drawing(&self, painter: &egui::Painter, rect: egui::Rect) {
        for path in &self.sketch.drawing.paths {
            let color = if path.layer == OVERLAY_LAYER {
                egui::Color32::LIGHT_RED
            } else {
                egui::Color32::WHITE
            };
            let stroke = egui::Stroke::new(1.0, color);

            match &path.shape {
                Shape::CubicBezier(pts) => {
                    let points = (*pts).map(|p| self.world_to_screen(p, rect));
                    painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
                        points,
                        false,
                        egui::Color32::TRANSPARENT,
                        stroke,
                    ));
                }
                Shape::Circle { center, radius } => {
                    painter.circle_stroke(
                        self.world_to_screen(*center, rect),
                        radius * self.zoom,
                        stroke,
                    );
                }
                Shape::Polyline { points, closed } => {
                    let points: Vec<egui::Pos2> = points
                        .iter()
                        .map(|&p| self.world_to_screen(p, rect))
                        .collect();
                    if *closed {
                        painter.add(egui::Shape::closed_line(points, stroke));
                    } else {
                        painter.add(egui::Shape::line(points, stroke));
                    }
                }
            }
        }
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn seeded(seed: u64) -> Viewer {
        Viewer::new(SketchConfig {
            seed: Some(seed),
            ..SketchConfig::default()
        })
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = seeded(1);
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(720.0, 528.0),
        ];

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);
            assert!(back.abs_diff_eq(p, 1e-3), "p={p:?}, back={back:?}");
        }
    }

    #[test]
    fn page_is_centered_without_pan() {
        let viewer = seeded(1);
        let rect = test_rect();
        let d = &viewer.sketch.drawing;

        let center = viewer.world_to_screen(Vec2::new(d.width, d.height) * 0.5, rect);
        assert!((center - rect.center()).length() < 1e-3);
    }

    #[test]
    fn configured_seed_locks_regeneration() {
        let mut viewer = seeded(77);
        assert!(viewer.lock_seed);
        let stars = viewer.sketch.stars.clone();

        viewer.regenerate();

        assert_eq!(viewer.sketch.seed, 77);
        assert_eq!(viewer.sketch.stars, stars);
    }

    #[test]
    fn redraw_picks_up_config_changes() {
        let mut viewer = seeded(3);
        viewer.cfg.num_stars = 5;

        viewer.redraw_with(viewer.sketch.seed);

        assert_eq!(viewer.sketch.stars.len(), 5);
        assert_eq!(viewer.sketch.seed, 3);
    }

    #[test]
    fn export_writes_svg_and_keeps_sketch_unsorted() {
        let dir = tempfile::tempdir().unwrap();
        let mut viewer = Viewer::new(SketchConfig {
            seed: Some(9),
            output: dir.path().join("view.svg"),
            ..SketchConfig::default()
        });
        let before = viewer.sketch.drawing.clone();

        viewer.export().unwrap();

        let svg = std::fs::read_to_string(dir.path().join("view.svg")).unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(viewer.sketch.drawing, before);
    }
}
