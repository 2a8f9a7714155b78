use super::{Shape, ShapeKind, fractal_unsupported, indent};
use crate::errors::{Result, ShapeError};
use crate::svg::presentation_attrs;
use crate::types::Point;

/// A circle shape
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle, rejecting negative or non-finite radii
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::InvalidRadius { value: radius });
        }
        Ok(Self { center, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn center(&self) -> Result<Point> {
        Ok(self.center)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
    }

    fn describe(&self, level: usize) -> String {
        format!(
            "{}Circle center={},{} r={}",
            indent(level),
            self.center.x,
            self.center.y,
            self.radius
        )
    }

    fn to_svg(&self) -> String {
        format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" {} />"#,
            self.center.x,
            self.center.y,
            self.radius,
            presentation_attrs()
        )
    }

    fn duplicate(&self) -> ShapeKind {
        self.clone().into()
    }

    fn height(&self) -> Result<f64> {
        Ok(self.radius * 2.0)
    }

    fn width(&self) -> Result<f64> {
        Ok(self.radius * 2.0)
    }

    fn rescale(&mut self, width_factor: f64, height_factor: f64) -> Result<()> {
        for value in [width_factor, height_factor] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShapeError::InvalidCircleScale { value });
            }
        }
        if width_factor != height_factor {
            return Err(ShapeError::UnequalCircleScale {
                width: width_factor,
                height: height_factor,
            });
        }
        self.radius *= width_factor;
        Ok(())
    }

    fn expand_fractal(&self, base: ShapeKind, depth: u32) -> Result<ShapeKind> {
        fractal_unsupported("circle", base, depth)
    }
}
