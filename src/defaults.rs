//! Default presentation settings and limits

/// One level of description indentation
pub const INDENT: &str = "  ";
pub const FILL: &str = "white";
pub const STROKE: &str = "black";

/// Scale applied to each copy during fractal expansion
pub const FRACTAL_SCALE: f64 = 0.5;

/// Each level multiplies the shape count by five, so keep the recursion shallow
pub const MAX_FRACTAL_DEPTH: u32 = 8;
