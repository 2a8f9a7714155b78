use super::{
    Shape, ShapeKind, centroid, describe_vertices, fractal, scale_vertices, span,
    translate_vertices,
};
use crate::errors::{Result, ShapeError};
use crate::svg::points_element;
use crate::types::{Point, points_from_coords};

const MIN_VERTICES: usize = 3;

/// A closed polygon with three or more vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices {
                shape: "polygon",
                min: MIN_VERTICES,
                got: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Build from a flat `x1, y1, x2, y2, ...` list
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        let vertices = points_from_coords(coords)
            .ok_or(ShapeError::OddCoordinateCount { count: coords.len() })?;
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Shape for Polygon {
    fn center(&self) -> Result<Point> {
        Ok(centroid(&self.vertices))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        translate_vertices(&mut self.vertices, dx, dy);
    }

    fn describe(&self, level: usize) -> String {
        describe_vertices(level, "Polygon", &self.vertices)
    }

    fn to_svg(&self) -> String {
        points_element("polygon", &self.vertices)
    }

    fn duplicate(&self) -> ShapeKind {
        self.clone().into()
    }

    fn height(&self) -> Result<f64> {
        Ok(span(&self.vertices, |p| p.y))
    }

    fn width(&self) -> Result<f64> {
        Ok(span(&self.vertices, |p| p.x))
    }

    fn rescale(&mut self, width_factor: f64, height_factor: f64) -> Result<()> {
        let center = centroid(&self.vertices);
        scale_vertices(&mut self.vertices, center, width_factor, height_factor);
        Ok(())
    }

    fn expand_fractal(&self, base: ShapeKind, depth: u32) -> Result<ShapeKind> {
        fractal::subdivide(base, depth, self.width()?, self.height()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn square() -> Polygon {
        Polygon::from_coords(&[0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0]).unwrap()
    }

    #[test]
    fn construction_needs_three_vertices() {
        let err = Polygon::from_coords(&[0.0, 0.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert!(Polygon::from_coords(&[0.0, 0.0, 1.0, 1.0, 2.0]).is_err());
        assert!(Polygon::from_coords(&[0.0, 0.0, 1.0, 1.0, 2.0, 0.0]).is_ok());
    }

    #[test]
    fn center_and_extents() {
        let poly = square();
        assert_eq!(poly.center().unwrap(), Point::new(50.0, 50.0));
        assert_eq!(poly.width().unwrap(), 100.0);
        assert_eq!(poly.height().unwrap(), 100.0);
    }

    #[test]
    fn unit_rescale_is_a_no_op() {
        let mut poly = square();
        poly.rescale(1.0, 1.0).unwrap();
        assert_eq!(poly, square());
    }

    #[test]
    fn rescale_per_axis() {
        let mut poly = square();
        poly.rescale(0.5, 2.0).unwrap();
        assert_eq!(poly.width().unwrap(), 50.0);
        assert_eq!(poly.height().unwrap(), 200.0);
        assert_eq!(poly.center().unwrap(), Point::new(50.0, 50.0));
    }

    #[test]
    fn description_truncates() {
        let poly = Polygon::from_coords(&[0.5, 1.9, 10.2, 0.0, 5.0, 7.7]).unwrap();
        assert_eq!(poly.describe(2), "    Polygon 0,1 10,0 5,7");
    }

    #[test]
    fn fractal_depth_one_has_five_children() {
        let poly = square();
        let out = poly.expand_fractal(poly.duplicate(), 1).unwrap();
        let group = out.as_group().unwrap();
        assert_eq!(group.len(), 5);
        assert_eq!(group.children()[0], poly.duplicate());
        // Copies are half size, shifted by half the square's extents.
        let last = &group.children()[4];
        assert_eq!(last.width().unwrap(), 50.0);
        assert_eq!(last.center().unwrap(), Point::new(100.0, 100.0));
    }

    #[test]
    fn fractal_depth_zero_is_identity() {
        let poly = square();
        assert_eq!(poly.expand_fractal(poly.duplicate(), 0).unwrap(), poly.duplicate());
    }
}
