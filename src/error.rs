//! Error types for libmatrix operations

use thiserror::Error;

/// Result type for libmatrix operations
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors that can occur during Vector and Matrix operations
///
/// All three kinds are raised synchronously at the point of detection and
/// before any result is allocated, so a failed operation never leaves a
/// partially computed value behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinalgError {
    /// A requested dimension is zero, or literal data does not fill the shape
    #[error("Size error: {0}")]
    Size(String),

    /// Element access at or beyond a fixed bound
    #[error("Index out of bounds: {0}")]
    Index(String),

    /// Operands have incompatible shapes for the operation
    #[error("Dimension mismatch: {0}")]
    Dimension(String),
}

impl LinalgError {
    pub(crate) fn vector_index(index: usize, len: usize) -> Self {
        LinalgError::Index(format!("index {index} for vector of length {len}"))
    }

    pub(crate) fn matrix_index(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        LinalgError::Index(format!(
            "position ({row}, {col}) for matrix of shape {rows}x{cols}"
        ))
    }

    pub(crate) fn vector_lengths(op: &str, left: usize, right: usize) -> Self {
        LinalgError::Dimension(format!(
            "{op} requires equal vector lengths, got {left} and {right}"
        ))
    }

    pub(crate) fn matrix_shapes(op: &str, left: (usize, usize), right: (usize, usize)) -> Self {
        LinalgError::Dimension(format!(
            "{op} requires identical shapes, got {}x{} and {}x{}",
            left.0, left.1, right.0, right.1
        ))
    }
}
