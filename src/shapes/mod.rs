//! Shape types
//!
//! Each shape is its own type that knows how to:
//! - Report its center and bounding extents
//! - Move and rescale itself in place
//! - Describe and render itself to SVG
//! - Duplicate itself without sharing geometry

use enum_dispatch::enum_dispatch;

use crate::defaults;
use crate::errors::Result;
use crate::types::Point;

mod circle;
mod fractal;
mod group;
mod line;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use group::Group;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

/// Common behavior for all shapes, groups included
#[enum_dispatch]
pub trait Shape {
    /// The geometric reference point of the shape
    fn center(&self) -> Result<Point>;

    /// Shift all owned geometry by `(dx, dy)`
    fn translate(&mut self, dx: f64, dy: f64);

    /// Human-readable description, indented by two spaces per `indent` level
    fn describe(&self, indent: usize) -> String;

    /// Render the shape as an SVG fragment
    fn to_svg(&self) -> String;

    /// Deep copy; the result shares nothing with `self`
    fn duplicate(&self) -> ShapeKind;

    /// Bounding extent along the y axis
    fn height(&self) -> Result<f64>;

    /// Bounding extent along the x axis
    fn width(&self) -> Result<f64>;

    /// Scale the shape around its own center by per-axis factors
    fn rescale(&mut self, width_factor: f64, height_factor: f64) -> Result<()>;

    /// Build a self-similar tree from `base`, `depth` levels deep.
    ///
    /// Depth 0 returns `base` unchanged.
    fn expand_fractal(&self, base: ShapeKind, depth: u32) -> Result<ShapeKind>;
}

// ============================================================================
// Shape Enum
// ============================================================================

/// A shape enum wrapping all shape types
///
/// This provides uniform storage (a [`Group`] holds these) while each variant
/// holds its own geometry.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Line(Line),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Group(Group),
}

impl ShapeKind {
    /// Lowercase name of the variant, as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Line(_) => "line",
            ShapeKind::Polygon(_) => "polygon",
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::Triangle(_) => "triangle",
            ShapeKind::Group(_) => "group",
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            ShapeKind::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ShapeKind::Group(_))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn indent(level: usize) -> String {
    defaults::INDENT.repeat(level)
}

/// `"<indent>Name x1,y1 x2,y2 ..."` with truncated coordinates
fn describe_vertices(level: usize, name: &str, vertices: &[Point]) -> String {
    let mut out = format!("{}{}", indent(level), name);
    for p in vertices {
        out.push(' ');
        out.push_str(&p.to_string());
    }
    out
}

/// Arithmetic mean of the vertices; callers guarantee a non-empty slice
fn centroid(vertices: &[Point]) -> Point {
    let n = vertices.len() as f64;
    let sum = vertices
        .iter()
        .fold(Point::ORIGIN, |acc, &p| acc + p);
    Point::new(sum.x / n, sum.y / n)
}

/// Max minus min of one coordinate across the vertices
fn span(vertices: &[Point], axis: impl Fn(&Point) -> f64) -> f64 {
    let (min, max) = vertices
        .iter()
        .map(axis)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    max - min
}

fn translate_vertices(vertices: &mut [Point], dx: f64, dy: f64) {
    for p in vertices.iter_mut() {
        *p = p.translated(dx, dy);
    }
}

fn scale_vertices(vertices: &mut [Point], origin: Point, sx: f64, sy: f64) {
    for p in vertices.iter_mut() {
        *p = p.scaled_about(origin, sx, sy);
    }
}

/// Fractal expansion for shapes without a subdivision rule
fn fractal_unsupported(shape: &'static str, base: ShapeKind, depth: u32) -> Result<ShapeKind> {
    if depth == 0 {
        return Ok(base);
    }
    Err(crate::errors::ShapeError::UnsupportedFractal { shape })
}

// ============================================================================
// Tests
// ============================================================================
