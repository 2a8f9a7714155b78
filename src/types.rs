//! Coordinate value types.

use glam::{DVec2, dvec2};
use std::fmt;
use std::ops::Add;

/// A 2-D coordinate.
///
/// Points are plain values: every shape owns its own copies and duplication
/// never shares them.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// A new point shifted by `(dx, dy)`
    #[inline]
    pub fn translated(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Calculate the midpoint between two points
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Point) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    /// Move this point away from (or toward) `origin` by per-axis factors
    pub fn scaled_about(self, origin: Point, sx: f64, sy: f64) -> Point {
        let o = origin.to_dvec2();
        (o + (self.to_dvec2() - o) * dvec2(sx, sy)).into()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_dvec2()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Coordinate-wise sum
impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Truncates both coordinates toward zero, as used by the polygon-family descriptions
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x as i64, self.y as i64)
    }
}

/// Turn a flat `x1, y1, x2, y2, ...` slice into points.
///
/// Returns `None` when the slice has an odd length.
pub(crate) fn points_from_coords(coords: &[f64]) -> Option<Vec<Point>> {
    if coords.len() % 2 != 0 {
        return None;
    }
    Some(
        coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect(),
    )
}
