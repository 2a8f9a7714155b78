//! Quadrant subdivision shared by the shapes that define a fractal rule
//!
//! Each level wraps the previous result in a new group together with four
//! half-scale copies offset onto a 2x2 grid. The grid is sized from the
//! shape that owns the rule, not from the copies.

use super::{Group, Shape, ShapeKind};
use crate::defaults::{FRACTAL_SCALE, MAX_FRACTAL_DEPTH};
use crate::errors::{Result, ShapeError};
use crate::log::{debug, trace};

/// Expand `base` by `depth` levels on a grid of `cell_width` x `cell_height`
pub(super) fn subdivide(
    base: ShapeKind,
    depth: u32,
    cell_width: f64,
    cell_height: f64,
) -> Result<ShapeKind> {
    if depth > MAX_FRACTAL_DEPTH {
        return Err(ShapeError::FractalDepthTooLarge {
            depth,
            max: MAX_FRACTAL_DEPTH,
        });
    }
    debug!(depth, cell_width, cell_height, "fractal expansion");
    expand(base, depth, cell_width, cell_height)
}

fn expand(base: ShapeKind, depth: u32, cell_width: f64, cell_height: f64) -> Result<ShapeKind> {
    if depth == 0 {
        return Ok(base);
    }

    let mut copies = Vec::with_capacity(4);
    for i in 0..4u32 {
        let mut copy = base.duplicate();
        copy.rescale(FRACTAL_SCALE, FRACTAL_SCALE)?;
        let dx = f64::from(i % 2) * cell_width / 2.0;
        let dy = f64::from(i / 2) * cell_height / 2.0;
        copy.translate(dx, dy);
        copies.push(copy);
    }

    let mut group = Group::new(vec![base]);
    for copy in copies {
        group.add(copy);
    }
    trace!(depth, children = group.len(), "fractal level built");

    expand(group.into(), depth - 1, cell_width, cell_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::shapes::Rectangle;
    use crate::types::Point;

    #[test]
    fn depth_zero_is_identity() {
        let base: ShapeKind = Rectangle::new(Point::ORIGIN, 2.0, 2.0).into();
        assert_eq!(subdivide(base.clone(), 0, 2.0, 2.0).unwrap(), base);
    }

    #[test]
    fn depth_above_limit_is_rejected() {
        let base: ShapeKind = Rectangle::new(Point::ORIGIN, 2.0, 2.0).into();
        let err = subdivide(base, MAX_FRACTAL_DEPTH + 1, 2.0, 2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn copies_land_on_the_grid() {
        let base: ShapeKind = Rectangle::new(Point::new(10.0, 10.0), 20.0, 20.0).into();
        let out = subdivide(base, 1, 40.0, 80.0).unwrap();
        let group = out.as_group().unwrap();
        let centers: Vec<Point> = group
            .children()
            .iter()
            .map(|c| c.center().unwrap())
            .collect();
        assert_eq!(
            centers,
            vec![
                Point::new(10.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(30.0, 10.0),
                Point::new(10.0, 50.0),
                Point::new(30.0, 50.0),
            ]
        );
    }
}
