//! SVG serialization of a [`Drawing`].
//!
//! The document is sized in inches with a `viewBox` in canvas units, and
//! holds one Inkscape-style layer group per pen layer.

use crate::{
    canvas::{Drawing, Shape, UNITS_PER_INCH},
    error::ExportError,
};
use glam::Vec2;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Rounds to a thousandth of a unit, without producing `-0`.
fn num(v: f32) -> f32 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { 0.0 } else { r }
}

struct Pt(Vec2);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", num(self.0.x), num(self.0.y))
    }
}

/// Display adapter writing a drawing as an SVG document.
pub struct Svg<'a>(pub &'a Drawing);

impl Svg<'_> {
    fn write_shape(f: &mut fmt::Formatter<'_>, shape: &Shape) -> fmt::Result {
        match shape {
            Shape::CubicBezier([a1, c1, c2, a2]) => writeln!(
                f,
                r#"    <path d="M{} C{} {} {}"/>"#,
                Pt(*a1),
                Pt(*c1),
                Pt(*c2),
                Pt(*a2)
            ),
            Shape::Circle { center, radius } => writeln!(
                f,
                r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                num(center.x),
                num(center.y),
                num(*radius)
            ),
            Shape::Polyline { points, closed } => {
                let tag = if *closed { "polygon" } else { "polyline" };
                write!(f, r#"    <{tag} points=""#)?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", Pt(*p))?;
                }
                writeln!(f, r#""/>"#)
            }
        }
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="{}in" height="{}in" viewBox="0 0 {} {}">"#,
            num(d.width / UNITS_PER_INCH),
            num(d.height / UNITS_PER_INCH),
            num(d.width),
            num(d.height)
        )?;

        for layer in d.layers() {
            writeln!(
                f,
                r#"  <g inkscape:groupmode="layer" inkscape:label="{layer}" id="layer{layer}" fill="none" stroke="black" stroke-width="1">"#
            )?;
            for path in d.paths.iter().filter(|p| p.layer == layer) {
                Self::write_shape(f, &path.shape)?;
            }
            writeln!(f, "  </g>")?;
        }

        writeln!(f, "</svg>")
    }
}

impl Drawing {
    /// Renders the drawing as a complete SVG document.
    pub fn to_svg(&self) -> String {
        Svg(self).to_string()
    }

    /// Writes the drawing as SVG to `path`.
    pub fn write_svg(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_svg()).map_err(ExportError::WriteError)?;
        info!(path = %path.display(), paths = self.paths.len(), "wrote svg");
        Ok(())
    }
}
