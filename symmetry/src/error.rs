use std::path::PathBuf;

use strum_macros::Display;
use thiserror::Error;

/// Which half of the point cloud an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Side {
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "right")]
    Right,
}

/// Errors produced while reading points or computing a symmetry score.
#[derive(Debug, Error)]
pub enum SymmetryError {
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Point set is empty")]
    EmptyInput,

    #[error("Point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error(
        "Cannot resolve symmetry axis: provisional split has {left} left and {right} right points"
    )]
    DegenerateAxis { left: usize, right: usize },

    #[error("The {side} half is empty, no correspondence can be formed")]
    EmptyHalf { side: Side },

    #[error("Real-side points have zero dispersion, score is undefined")]
    ZeroDispersion,

    #[error("Point index {index} is not present in the point set")]
    UnknownPointIndex { index: usize },

    #[error("Symmetry score requested before the mapping was computed")]
    Sequencing,
}

pub type Result<T> = std::result::Result<T, SymmetryError>;
