//! Error types with diagnostics using miette
//!
//! Every failure is scoped to the call that produced it. [`ShapeError::kind`]
//! groups the variants into the four conditions callers usually branch on.

use miette::Diagnostic;
use thiserror::Error;

/// Broad category of a [`ShapeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value could not be constructed with the given geometry
    InvariantViolation,
    /// The shape holds too little geometry for the requested computation
    InsufficientGeometry,
    /// An argument was rejected and the receiver left untouched
    InvalidArgument,
    /// The operation has no definition for this shape kind
    Unsupported,
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised by shape construction and shape operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{shape} needs at least {min} vertices, got {got}")]
    #[diagnostic(code(shapetree::construct::too_few_vertices))]
    TooFewVertices {
        shape: &'static str,
        min: usize,
        got: usize,
    },

    #[error("{shape} needs exactly {expected} vertices, got {got}")]
    #[diagnostic(code(shapetree::construct::wrong_vertex_count))]
    WrongVertexCount {
        shape: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("odd number of coordinates: {count}")]
    #[diagnostic(
        code(shapetree::construct::odd_coordinates),
        help("coordinates are given as x1, y1, x2, y2, ...")
    )]
    OddCoordinateCount { count: usize },

    #[error("invalid radius: {value}")]
    #[diagnostic(
        code(shapetree::construct::invalid_radius),
        help("a radius must be finite and non-negative")
    )]
    InvalidRadius { value: f64 },

    #[error("cannot compute {operation} of an empty group")]
    #[diagnostic(
        code(shapetree::geometry::empty_group),
        help("add at least one shape to the group first")
    )]
    EmptyGroup { operation: &'static str },

    #[error("cannot compute {operation} of a line with {got} vertices")]
    #[diagnostic(
        code(shapetree::geometry::degenerate_line),
        help("this operation needs a line with more than 2 vertices")
    )]
    DegenerateLine { operation: &'static str, got: usize },

    #[error("circle cannot be rescaled by unequal factors {width} and {height}")]
    #[diagnostic(
        code(shapetree::argument::unequal_circle_scale),
        help("a circle has a single scale; pass the same factor twice")
    )]
    UnequalCircleScale { width: f64, height: f64 },

    #[error("invalid circle scale factor: {value}")]
    #[diagnostic(
        code(shapetree::argument::invalid_circle_scale),
        help("a circle scale factor must be finite and non-negative")
    )]
    InvalidCircleScale { value: f64 },

    #[error("fractal expansion is not supported for {shape}")]
    #[diagnostic(
        code(shapetree::unsupported::fractal),
        help("only polygons and rectangles define a subdivision rule")
    )]
    UnsupportedFractal { shape: &'static str },

    #[error("fractal depth {depth} exceeds the limit of {max}")]
    #[diagnostic(code(shapetree::argument::fractal_depth))]
    FractalDepthTooLarge { depth: u32, max: u32 },
}

impl ShapeError {
    /// Which of the four error conditions this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShapeError::TooFewVertices { .. }
            | ShapeError::WrongVertexCount { .. }
            | ShapeError::OddCoordinateCount { .. }
            | ShapeError::InvalidRadius { .. } => ErrorKind::InvariantViolation,
            ShapeError::EmptyGroup { .. } | ShapeError::DegenerateLine { .. } => {
                ErrorKind::InsufficientGeometry
            }
            ShapeError::UnequalCircleScale { .. }
            | ShapeError::InvalidCircleScale { .. }
            | ShapeError::FractalDepthTooLarge { .. } => ErrorKind::InvalidArgument,
            ShapeError::UnsupportedFractal { .. } => ErrorKind::Unsupported,
        }
    }
}

pub type Result<T, E = ShapeError> = std::result::Result<T, E>;
