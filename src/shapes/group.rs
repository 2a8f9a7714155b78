use super::{Shape, ShapeKind, fractal_unsupported, indent};
use crate::errors::{Result, ShapeError};
use crate::log::{trace, warn};
use crate::svg::group_element;
use crate::types::Point;

/// An ordered collection of owned shapes, itself a shape
///
/// Children are moved in, so a group can never end up containing itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    children: Vec<ShapeKind>,
}

impl Group {
    pub fn new(children: Vec<ShapeKind>) -> Self {
        Self { children }
    }

    /// Append a shape and return the group for chaining
    pub fn add(&mut self, shape: impl Into<ShapeKind>) -> &mut Self {
        self.children.push(shape.into());
        self
    }

    pub fn children(&self) -> &[ShapeKind] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn require_children(&self, operation: &'static str) -> Result<()> {
        if self.children.is_empty() {
            return Err(ShapeError::EmptyGroup { operation });
        }
        Ok(())
    }

    /// `max(c + extent) - min(c - extent)` over the children
    fn extent(
        &self,
        operation: &'static str,
        measure: impl Fn(&ShapeKind) -> Result<(f64, f64)>,
    ) -> Result<f64> {
        self.require_children(operation)?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for child in &self.children {
            let (c, size) = measure(child)?;
            min = min.min(c - size);
            max = max.max(c + size);
        }
        Ok(max - min)
    }
}

impl FromIterator<ShapeKind> for Group {
    fn from_iter<I: IntoIterator<Item = ShapeKind>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for Group {
    /// Midpoint of the two child centers that lie furthest apart
    fn center(&self) -> Result<Point> {
        self.require_children("center")?;
        let centers = self
            .children
            .iter()
            .map(Shape::center)
            .collect::<Result<Vec<_>>>()?;

        // Strict comparison: the first pair found at the largest distance wins.
        let (mut p1, mut p2) = (centers[0], centers[0]);
        let mut max_distance = 0.0;
        for &a in &centers {
            for &b in &centers {
                let distance = a.distance(b);
                if distance > max_distance {
                    max_distance = distance;
                    p1 = a;
                    p2 = b;
                }
            }
        }
        trace!(?p1, ?p2, max_distance, "group center pair");
        Ok(p1.midpoint(p2))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    fn describe(&self, level: usize) -> String {
        let mut out = format!("{}Group\n", indent(level));
        for child in &self.children {
            out.push_str(child.describe(level + 1).trim_end_matches('\n'));
            out.push('\n');
        }
        out
    }

    fn to_svg(&self) -> String {
        group_element(self.children.iter().map(Shape::to_svg))
    }

    fn duplicate(&self) -> ShapeKind {
        self.children
            .iter()
            .map(Shape::duplicate)
            .collect::<Group>()
            .into()
    }

    fn height(&self) -> Result<f64> {
        self.extent("height", |child| Ok((child.center()?.y, child.height()?)))
    }

    fn width(&self) -> Result<f64> {
        self.extent("width", |child| Ok((child.center()?.x, child.width()?)))
    }

    /// Rescale every child in place; child positions are left alone
    fn rescale(&mut self, width_factor: f64, height_factor: f64) -> Result<()> {
        self.require_children("rescale")?;
        // Stage on a copy so a failing child leaves the group untouched.
        let mut staged = self.children.clone();
        for child in &mut staged {
            if let Err(err) = child.rescale(width_factor, height_factor) {
                warn!(%err, kind = child.kind_name(), "group rescale rejected");
                return Err(err);
            }
        }
        self.children = staged;
        Ok(())
    }

    fn expand_fractal(&self, base: ShapeKind, depth: u32) -> Result<ShapeKind> {
        fractal_unsupported("group", base, depth)
    }
}
