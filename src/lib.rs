//! Composable 2-D shapes.
//!
//! Build primitives ([`Circle`], [`Line`], [`Polygon`], [`Rectangle`],
//! [`Triangle`]), nest them in [`Group`]s, move and rescale them, then ask for
//! a text description or an SVG fragment. Polygons and rectangles can also
//! grow a self-similar tree with [`Shape::expand_fractal`].
//!
//! ```
//! use shapetree::{Circle, Group, Point, Shape};
//!
//! let mut group = Group::default();
//! group.add(Circle::new(Point::new(256.0, 256.0), 128.0)?);
//! assert_eq!(group.describe(0), "Group\n  Circle center=256,256 r=128\n");
//! # Ok::<(), shapetree::ShapeError>(())
//! ```

pub mod defaults;
pub mod errors;
pub mod log;
pub mod shapes;
pub mod svg;
pub mod types;

pub use errors::{ErrorKind, ShapeError};
pub use shapes::{Circle, Group, Line, Polygon, Rectangle, Shape, ShapeKind, Triangle};
pub use types::Point;
