//! Compute kernels behind the Vector and Matrix operations
//!
//! Every public operation validates its operands, allocates a zeroed result
//! and then hands the raw row-major slices to one of the kernels here.
//!
//! # Backends
//!
//! - `scalar`: plain loops, the reference implementation
//! - `parallel`: rayon-based kernels that split the output into disjoint
//!   rows or chunks (requires the `parallel` feature)
//!
//! The caller always blocks until the kernel has finished, so the public API
//! stays synchronous regardless of the backend.

pub mod scalar;

#[cfg(feature = "parallel")]
pub mod parallel;

use crate::{DispatchConfig, Element};

/// Kernel trait defining the loop bodies shared by Vector and Matrix
///
/// All slices are dense and row-major. Callers must ensure:
/// - `a` and `b` have the same length for element-wise operations
/// - `result` has the length of the operation's output
/// - `result` is zero-initialised for the accumulating kernels
///   (`matmul`, `matvec`, `vecmat`)
pub trait Kernel<T: Element> {
    /// Element-wise addition: result[i] = a[i] + b[i]
    fn add(a: &[T], b: &[T], result: &mut [T]);

    /// Element-wise subtraction: result[i] = a[i] - b[i]
    fn sub(a: &[T], b: &[T], result: &mut [T]);

    /// Scalar multiplication: result[i] = scalar * a[i]
    fn scale(a: &[T], scalar: T, result: &mut [T]);

    /// Dot product: sum(a[i] * b[i]), accumulated from zero
    fn dot(a: &[T], b: &[T]) -> T;

    /// Matrix product of an `m×k` matrix `a` and a `k×n` matrix `b`
    ///
    /// `result` is `m×n`.
    fn matmul(a: &[T], b: &[T], result: &mut [T], k: usize, n: usize);

    /// Matrix-vector product: result[i] = Σ_j a[i, j] * v[j]
    ///
    /// `a` has `cols` columns, `result` has one entry per row.
    fn matvec(a: &[T], v: &[T], result: &mut [T], cols: usize);

    /// Vector-matrix product: result[j] = Σ_i v[i] * a[i, j]
    ///
    /// `a` has `cols` columns, `result` has `cols` entries.
    fn vecmat(v: &[T], a: &[T], result: &mut [T], cols: usize);
}

/// Kernel family chosen for a single operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selected {
    Scalar,
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Pick the kernel family for an operation of `work` elementary steps
///
/// Parallel kernels are only worth their scheduling overhead on large
/// inputs, so anything below the configured threshold runs inline.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub(crate) fn select(config: &DispatchConfig, work: usize) -> Selected {
    #[cfg(feature = "parallel")]
    let selected = if config.prefers_parallel(work) {
        Selected::Parallel
    } else {
        Selected::Scalar
    };

    // Parallel requests degrade to inline execution without rayon
    #[cfg(not(feature = "parallel"))]
    let selected = Selected::Scalar;

    #[cfg(feature = "tracing")]
    tracing::trace!(backend = ?selected, work, "kernel dispatch");

    selected
}
