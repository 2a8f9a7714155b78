use super::{Shape, ShapeKind, fractal, indent};
use crate::errors::Result;
use crate::svg::presentation_attrs;
use crate::types::Point;

/// An axis-aligned rectangle stored as center plus size
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    center: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Top-left corner in SVG coordinates
    pub fn origin(&self) -> Point {
        self.center.translated(-self.width / 2.0, -self.height / 2.0)
    }
}

impl Shape for Rectangle {
    fn center(&self) -> Result<Point> {
        Ok(self.center)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
    }

    fn describe(&self, level: usize) -> String {
        format!(
            "{}Rectangle Centre={:.1},{:.1} L={:.1} H={:.1}",
            indent(level),
            self.center.x,
            self.center.y,
            self.width,
            self.height
        )
    }

    fn to_svg(&self) -> String {
        let origin = self.origin();
        format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" {} />"#,
            origin.x,
            origin.y,
            self.width,
            self.height,
            presentation_attrs()
        )
    }

    fn duplicate(&self) -> ShapeKind {
        self.clone().into()
    }

    fn height(&self) -> Result<f64> {
        Ok(self.height)
    }

    fn width(&self) -> Result<f64> {
        Ok(self.width)
    }

    fn rescale(&mut self, width_factor: f64, height_factor: f64) -> Result<()> {
        self.width *= width_factor;
        self.height *= height_factor;
        Ok(())
    }

    fn expand_fractal(&self, base: ShapeKind, depth: u32) -> Result<ShapeKind> {
        fractal::subdivide(base, depth, self.width, self.height)
    }
}
