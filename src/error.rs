//! Error type shared by the transform engine and the gradient operator.
use crate::kind::TransformKind;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DttError>;

/// Invalid-argument failures. Every variant is raised before any transform
/// runs, so a failed call never leaves partial output behind.
#[derive(Debug, Clone, Error)]
pub enum DttError {
    /// Kind code outside 1..=8.
    #[error("transform kind must be an integer between 1 and 8, got {0}")]
    InvalidKind(i64),

    /// Shift code outside 0..=2.
    #[error("shift must be 0 (centered), 1 (forward) or 2 (backward), got {0}")]
    InvalidShift(i64),

    /// Axis does not exist on the array.
    #[error("axis {axis} out of range for array of rank {ndim}")]
    InvalidAxis {
        /// requested axis
        axis: usize,
        /// rank of the array
        ndim: usize,
    },

    /// Only 1-, 2- and 3-dimensional arrays are transformed.
    #[error("array must be 1D, 2D or 3D, got rank {0}")]
    UnsupportedRank(usize),

    /// Grid spacing of the gradient operator.
    #[error("grid spacing must be finite and greater than zero, got {0}")]
    InvalidSpacing(f64),

    /// Input shorter than the symmetry of the kind requires.
    #[error("{kind} needs at least {min} samples, got {len}")]
    TooShort {
        /// requested kind
        kind: TransformKind,
        /// minimum length
        min: usize,
        /// supplied length
        len: usize,
    },

    /// Per-axis kind vector of the wrong length.
    #[error("expected {expected} transform kinds (one per axis), got {got}")]
    KindCountMismatch {
        /// number of axes
        expected: usize,
        /// number of kinds supplied
        got: usize,
    },

    /// Output buffer does not match the input.
    #[error("shape mismatch: input {input:?}, output {output:?}")]
    ShapeMismatch {
        /// input shape
        input: Vec<usize>,
        /// output shape
        output: Vec<usize>,
    },

    /// Strided layout does not fit the supplied buffers.
    #[error("invalid strided layout: {0}")]
    Layout(#[from] ndarray::ShapeError),
}
