use super::{
    Shape, ShapeKind, centroid, describe_vertices, fractal_unsupported, scale_vertices, span,
    translate_vertices,
};
use crate::errors::{Result, ShapeError};
use crate::svg::points_element;
use crate::types::{Point, points_from_coords};

const MIN_VERTICES: usize = 2;

/// An open polyline through an ordered list of vertices
///
/// Center, extents and rescaling need more than two vertices; a two-point
/// line can still be moved, described, rendered and extended.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    vertices: Vec<Point>,
}

impl Line {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices {
                shape: "line",
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

    /// Append a vertex to the end of the path
    pub fn add_vertex(&mut self, vertex: Point) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn require_more_than_two(&self, operation: &'static str) -> Result<()> {
        if self.vertices.len() <= MIN_VERTICES {
            return Err(ShapeError::DegenerateLine {
                operation,
                got: self.vertices.len(),
            });
        }
        Ok(())
    }
}

impl Shape for Line {
    fn center(&self) -> Result<Point> {
        self.require_more_than_two("center")?;
        Ok(centroid(&self.vertices))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        translate_vertices(&mut self.vertices, dx, dy);
    }

    fn describe(&self, level: usize) -> String {
        describe_vertices(level, "Line", &self.vertices)
    }

    fn to_svg(&self) -> String {
        points_element("polyline", &self.vertices)
    }

    fn duplicate(&self) -> ShapeKind {
        self.clone().into()
    }

    fn height(&self) -> Result<f64> {
        self.require_more_than_two("height")?;
        Ok(span(&self.vertices, |p| p.y))
    }

    fn width(&self) -> Result<f64> {
        self.require_more_than_two("width")?;
        Ok(span(&self.vertices, |p| p.x))
    }

    fn rescale(&mut self, width_factor: f64, height_factor: f64) -> Result<()> {
        let center = self.center()?;
        scale_vertices(&mut self.vertices, center, width_factor, height_factor);
        Ok(())
    }

    fn expand_fractal(&self, base: ShapeKind, depth: u32) -> Result<ShapeKind> {
        fractal_unsupported("line", base, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn zigzag() -> Line {
        Line::from_coords(&[128.0, 128.0, 128.0, 256.0, 256.0, 128.0, 256.0, 256.0]).unwrap()
    }

    #[test]
    fn construction_needs_two_vertices() {
        let err = Line::new(vec![Point::ORIGIN]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert!(Line::from_coords(&[0.0, 0.0, 1.0, 1.0]).is_ok());
        assert_eq!(
            Line::from_coords(&[0.0, 0.0, 1.0]).unwrap_err(),
            ShapeError::OddCoordinateCount { count: 3 }
        );
    }

    #[test]
    fn two_vertex_line_has_no_center() {
        let line = Line::from_coords(&[0.0, 0.0, 10.0, 10.0]).unwrap();
        for err in [
            line.center().unwrap_err(),
            line.width().unwrap_err(),
            line.height().unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::InsufficientGeometry);
        }
        let mut line = line;
        assert!(line.rescale(2.0, 2.0).is_err());
        assert_eq!(line.vertices()[1], Point::new(10.0, 10.0));
    }

    #[test]
    fn adding_a_vertex_unlocks_center() {
        let mut line = Line::from_coords(&[0.0, 0.0, 6.0, 0.0]).unwrap();
        line.add_vertex(Point::new(0.0, 3.0));
        assert_eq!(line.center().unwrap(), Point::new(2.0, 1.0));
    }

    #[test]
    fn extents_and_rescale() {
        let mut line = zigzag();
        assert_eq!(line.width().unwrap(), 128.0);
        assert_eq!(line.height().unwrap(), 128.0);
        assert_eq!(line.center().unwrap(), Point::new(192.0, 192.0));

        line.rescale(0.5, 2.0).unwrap();
        assert_eq!(line.width().unwrap(), 64.0);
        assert_eq!(line.height().unwrap(), 256.0);
        assert_eq!(line.center().unwrap(), Point::new(192.0, 192.0));
    }

    #[test]
    fn description_and_markup_keep_order() {
        let line = zigzag();
        assert_eq!(line.describe(0), "Line 128,128 128,256 256,128 256,256");
        assert_eq!(
            line.to_svg(),
            r#"<polyline points="128,128 128,256 256,128 256,256" fill="white" stroke="black" />"#
        );
    }

    #[test]
    fn no_fractal_rule() {
        let line = zigzag();
        let err = line.expand_fractal(line.duplicate(), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }
}
