//! libmatrix: Generic Vector and Matrix Arithmetic
//!
//! **libmatrix** provides two fixed-shape value types over any primitive
//! numeric element type:
//!
//! 1. [`Vector`] - a fixed-length ordered sequence of numbers
//! 2. [`Matrix`] - a fixed-shape, row-major dense table of numbers
//!
//! # Design Principles
//!
//! - **Checked shapes**: every binary operation validates its operands and
//!   reports a [`LinalgError`] instead of panicking
//! - **Nothing half-done**: results are always freshly allocated after
//!   validation; a failed operation leaves no visible state behind
//! - **Synchronous API**: optional rayon kernels (`parallel` feature) split
//!   large operations across threads, but every call returns a finished value
//!
//! # Quick Start
//!
//! ```rust
//! use libmatrix::{Matrix, Vector};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 1]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap();
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.as_slice(), &[2, 3, 4, 2]);
//!
//! let v1 = Vector::from_slice(&[1, 2]).unwrap();
//! let v2 = Vector::from_slice(&[1, 4]).unwrap();
//! assert_eq!((&v1 * &v2).unwrap(), 9);
//! ```

pub mod backends;
pub mod config;
pub mod element;
pub mod error;
pub mod matrix;
mod ops;
pub mod vector;

pub use config::DispatchConfig;
pub use element::Element;
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use vector::Vector;

use std::sync::OnceLock;

/// Backend execution target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Single-threaded loops on the calling thread
    Scalar,
    /// Rayon thread pool (falls back to Scalar without the `parallel` feature)
    Parallel,
    /// Auto-select best available
    Auto,
}

impl Backend {
    /// Select the best available backend for the current platform
    ///
    /// This is a convenience wrapper around `select_best_available_backend()`
    pub fn select_best() -> Self {
        select_best_available_backend()
    }
}

/// Select the best available backend for the current platform
///
/// Returns [`Backend::Parallel`] when the `parallel` feature is enabled and
/// the machine reports more than one hardware thread, otherwise
/// [`Backend::Scalar`]. The probe runs once per process.
///
/// # Examples
///
/// ```
/// use libmatrix::{select_best_available_backend, Backend};
///
/// let backend = select_best_available_backend();
/// assert_ne!(backend, Backend::Auto);
/// ```
pub fn select_best_available_backend() -> Backend {
    static BEST: OnceLock<Backend> = OnceLock::new();
    *BEST.get_or_init(detect_backend)
}

#[cfg(feature = "parallel")]
fn detect_backend() -> Backend {
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    if threads > 1 {
        Backend::Parallel
    } else {
        Backend::Scalar
    }
}

#[cfg(not(feature = "parallel"))]
fn detect_backend() -> Backend {
    Backend::Scalar
}
