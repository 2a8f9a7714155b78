use super::{
    Shape, ShapeKind, centroid, describe_vertices, fractal_unsupported, scale_vertices, span,
    translate_vertices,
};
use crate::errors::{Result, ShapeError};
use crate::svg::points_element;
use crate::types::Point;

/// A triangle; the vertex count is fixed by the array type
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Build from a vertex list that must hold exactly three points
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        let got = vertices.len();
        let vertices: [Point; 3] = vertices
            .try_into()
            .map_err(|_| ShapeError::WrongVertexCount {
                shape: "triangle",
                expected: 3,
                got,
            })?;
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }
}

impl Shape for Triangle {
    fn center(&self) -> Result<Point> {
        Ok(centroid(&self.vertices))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        translate_vertices(&mut self.vertices, dx, dy);
    }

    fn describe(&self, level: usize) -> String {
        describe_vertices(level, "Triangle", &self.vertices)
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
        fractal_unsupported("triangle", base, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn sample() -> Triangle {
        Triangle::new(
            Point::new(192.0, 128.0),
            Point::new(256.0, 128.0),
            Point::new(256.0, 256.0),
        )
    }

    #[test]
    fn exactly_three_vertices() {
        let two = vec![Point::ORIGIN, Point::new(1.0, 0.0)];
        let err = Triangle::from_vertices(two).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);

        let three = vec![Point::ORIGIN, Point::new(3.0, 0.0), Point::new(0.0, 3.0)];
        let tri = Triangle::from_vertices(three).unwrap();
        assert_eq!(tri.center().unwrap(), Point::new(1.0, 1.0));
    }

    #[test]
    fn extents() {
        let tri = sample();
        assert_eq!(tri.width().unwrap(), 64.0);
        assert_eq!(tri.height().unwrap(), 128.0);
    }

    #[test]
    fn unit_rescale_is_a_no_op() {
        let right = Triangle::new(Point::ORIGIN, Point::new(6.0, 0.0), Point::new(0.0, 3.0));
        let mut tri = right.clone();
        tri.rescale(1.0, 1.0).unwrap();
        assert_eq!(tri, right);
    }

    #[test]
    fn description_and_markup() {
        let tri = sample();
        assert_eq!(tri.describe(0), "Triangle 192,128 256,128 256,256");
        assert_eq!(
            tri.to_svg(),
            r#"<polygon points="192,128 256,128 256,256" fill="white" stroke="black" />"#
        );
    }

    #[test]
    fn no_fractal_rule() {
        let tri = sample();
        assert_eq!(
            tri.expand_fractal(tri.duplicate(), 1).unwrap_err(),
            ShapeError::UnsupportedFractal { shape: "triangle" }
        );
    }
}
