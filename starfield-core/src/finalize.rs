//! Post-processing applied to a finished [`Drawing`] before it is written.
//!
//! Steps implement [`Finalize`] and run in sequence through
//! [`run_finalizers`]. The only in-tree step is [`LineSort`], which reorders
//! paths to cut down pen-up travel; line simplification is left to external
//! plotting tools.

use crate::canvas::{Drawing, Layer, Path};
use glam::Vec2;
use tracing::{debug, info};

/// A post-processing step over a whole drawing.
pub trait Finalize {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn apply(&self, drawing: &mut Drawing);
}

/// Runs `steps` in order over `drawing`.
pub fn run_finalizers(drawing: &mut Drawing, steps: &[&dyn Finalize]) {
    for step in steps {
        let before = drawing.pen_up_distance();
        step.apply(drawing);
        info!(
            step = step.name(),
            paths = drawing.paths.len(),
            pen_up_before = before,
            pen_up_after = drawing.pen_up_distance(),
            "finalize step done"
        );
    }
}

/// Greedy nearest-neighbour path ordering, one layer at a time.
///
/// Starting from the page origin, the pen repeatedly moves to the closest
/// remaining path start. With `allow_flip`, open paths may also be entered
/// from their end and are then reversed. Layers are emitted in ascending
/// order. If the greedy order of a layer would travel further than its
/// current order, the current order is kept.
#[derive(Clone, Copy, Debug)]
pub struct LineSort {
    pub allow_flip: bool,
}

impl Default for LineSort {
    fn default() -> Self {
        Self { allow_flip: true }
    }
}

fn travel(paths: &[Path]) -> f32 {
    paths
        .windows(2)
        .map(|w| w[0].shape.end().distance(w[1].shape.start()))
        .sum()
}

impl LineSort {
    fn sort_layer(&self, mut remaining: Vec<Path>) -> Vec<Path> {
        let mut sorted = Vec::with_capacity(remaining.len());
        let mut pen = Vec2::ZERO;

        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_d2 = f32::MAX;
            let mut best_flip = false;

            for (i, path) in remaining.iter().enumerate() {
                let d2 = path.shape.start().distance_squared(pen);
                if d2 < best_d2 {
                    best = i;
                    best_d2 = d2;
                    best_flip = false;
                }
                if self.allow_flip && !path.shape.is_closed() {
                    let d2 = path.shape.end().distance_squared(pen);
                    if d2 < best_d2 {
                        best = i;
                        best_d2 = d2;
                        best_flip = true;
                    }
                }
            }

            let mut path = remaining.swap_remove(best);
            if best_flip {
                path.shape = path.shape.reversed();
            }
            pen = path.shape.end();
            sorted.push(path);
        }

        sorted
    }
}

impl Finalize for LineSort {
    fn name(&self) -> &'static str {
        "linesort"
    }

    fn apply(&self, drawing: &mut Drawing) {
        let layers: Vec<Layer> = drawing.layers();
        let mut paths = std::mem::take(&mut drawing.paths);
        let mut out = Vec::with_capacity(paths.len());

        for layer in layers {
            let (in_layer, rest): (Vec<Path>, Vec<Path>) =
                paths.into_iter().partition(|p| p.layer == layer);
            paths = rest;

            let original = travel(&in_layer);
            let sorted = self.sort_layer(in_layer.clone());
            let greedy = travel(&sorted);
            debug!(layer, original, greedy, "layer sorted");

            if greedy <= original {
                out.extend(sorted);
            } else {
                out.extend(in_layer);
            }
        }

        drawing.paths = out;
    }
}
