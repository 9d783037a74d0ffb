//! Kernel dispatch configuration
//!
//! Every [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) carries a
//! resolved [`DispatchConfig`]. Operation results inherit the config of their
//! left operand.
//!
//! # Examples
//!
//! ```
//! use libmatrix::{Backend, DispatchConfig};
//!
//! // Always run inline on the calling thread
//! let sequential = DispatchConfig::sequential();
//! assert_eq!(sequential.backend, Backend::Scalar);
//!
//! // Custom configuration using builder pattern
//! let custom = DispatchConfig::new()
//!     .with_backend(Backend::Parallel)
//!     .with_parallel_threshold(10_000)
//!     .build();
//! assert_eq!(custom.parallel_threshold, 10_000);
//! ```

use crate::Backend;

/// Default number of elementary steps before parallel kernels kick in
///
/// Below this, rayon's scheduling overhead dominates the loop itself.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Kernel dispatch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Requested backend (`Auto` is resolved by [`build`](Self::build))
    pub backend: Backend,
    /// Minimum work size (element count, or multiply-adds for products)
    /// for which the parallel backend is used
    pub parallel_threshold: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DispatchConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-threaded preset: every kernel runs inline
    pub fn sequential() -> Self {
        Self::new().with_backend(Backend::Scalar).build()
    }

    /// Parallel preset that dispatches every operation to the thread pool
    ///
    /// Mostly useful for testing the parallel kernels on small inputs.
    pub fn eager_parallel() -> Self {
        Self::new()
            .with_backend(Backend::Parallel)
            .with_parallel_threshold(1)
            .build()
    }

    /// Set the requested backend
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::{Backend, DispatchConfig};
    ///
    /// let config = DispatchConfig::new().with_backend(Backend::Scalar);
    /// assert_eq!(config.backend, Backend::Scalar);
    /// ```
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the parallel dispatch threshold
    ///
    /// A threshold of zero is raised to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::DispatchConfig;
    ///
    /// let config = DispatchConfig::new().with_parallel_threshold(0);
    /// assert_eq!(config.parallel_threshold, 1);
    /// ```
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Finalize the configuration, resolving `Backend::Auto`
    pub fn build(self) -> Self {
        let backend = match self.backend {
            Backend::Auto => crate::select_best_available_backend(),
            other => other,
        };
        Self { backend, ..self }
    }

    /// Whether an operation of `work` steps should use the parallel backend
    pub fn prefers_parallel(&self, work: usize) -> bool {
        self.backend == Backend::Parallel && work >= self.parallel_threshold
    }
}
