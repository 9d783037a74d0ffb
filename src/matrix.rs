//! Matrix operations for libmatrix
//!
//! Provides a fixed-shape, row-major dense matrix and the arithmetic that
//! links it to [`Vector`].
//!
//! # Example
//!
//! ```
//! use libmatrix::Matrix;
//!
//! // Create a 2x3 matrix
//! let m: Matrix<f32> = Matrix::zeros(2, 3).unwrap();
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::backends::scalar::ScalarBackend;
#[cfg(feature = "parallel")]
use crate::backends::parallel::ParallelBackend;
use crate::backends::{self, Kernel, Selected};
use crate::{Backend, DispatchConfig, Element, LinalgError, Result, Vector};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 2D matrix with row-major storage
///
/// Data is stored in row-major format (C-style): element `(r, c)` lives at
/// flat index `r * cols + c`. Both dimensions are greater than zero and fixed
/// at construction.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// # Example
///
/// ```
/// use libmatrix::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.get(0, 0), Ok(&1.0));
/// assert_eq!(m.get(0, 1), Ok(&2.0));
/// assert_eq!(m.get(1, 0), Ok(&3.0));
/// assert_eq!(m.get(1, 1), Ok(&4.0));
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    config: DispatchConfig,
}

impl<T: Element> Matrix<T> {
    /// Creates a new zero-initialised matrix
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Size`] if `rows` or `cols` is zero, or if
    /// `rows * cols` overflows `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::Matrix;
    ///
    /// let m: Matrix<i32> = Matrix::new(3, 4).unwrap();
    /// assert_eq!(m.shape(), (3, 4));
    /// assert!(Matrix::<i32>::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Size(format!(
                "matrix dimensions must be greater than zero, got {rows}x{cols}"
            )));
        }
        checked_len(rows, cols)?;
        Ok(Self::zeros_with_config(
            rows,
            cols,
            DispatchConfig::default().build(),
        ))
    }

    /// Creates a matrix filled with zeros (same as [`new`](Self::new))
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// Zero matrix reusing a parent's config (shape already validated)
    fn zeros_with_config(rows: usize, cols: usize, config: DispatchConfig) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
            config,
        }
    }

    /// Creates a matrix from a vector of row-major data
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Size`] if `data` is empty, a dimension is zero,
    /// `rows * cols` overflows, or `data.len() != rows * cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::Size(
                "matrix literal must contain at least one element".to_string(),
            ));
        }
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Size(format!(
                "matrix dimensions must be greater than zero, got {rows}x{cols}"
            )));
        }
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(LinalgError::Size(format!(
                "data length {} does not match matrix dimensions {}x{} (expected {})",
                data.len(),
                rows,
                cols,
                expected
            )));
        }

        Ok(Matrix {
            rows,
            cols,
            data,
            config: DispatchConfig::default().build(),
        })
    }

    /// Creates a matrix from a slice by copying the data
    ///
    /// # Errors
    ///
    /// Same as [`from_vec`](Self::from_vec).
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates an `n×n` identity matrix
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Size`] if `n` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::Matrix;
    ///
    /// let m: Matrix<f64> = Matrix::identity(3).unwrap();
    /// assert_eq!(m.get(0, 0), Ok(&1.0));
    /// assert_eq!(m.get(0, 1), Ok(&0.0));
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Replace the dispatch configuration, resolving `Backend::Auto`
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config.build();
        self
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements (`rows * cols`)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns a reference to the underlying row-major data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// Get the dispatch configuration
    pub fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Whether `(row, col)` lies inside the matrix
    pub fn exists(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Gets a reference to an element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `row >= rows()` or `col >= cols()`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        if !self.exists(row, col) {
            return Err(LinalgError::matrix_index(row, col, self.rows, self.cols));
        }
        Ok(&self.data[row * self.cols + col])
    }

    /// Gets a mutable reference to an element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `row >= rows()` or `col >= cols()`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if !self.exists(row, col) {
            return Err(LinalgError::matrix_index(row, col, self.rows, self.cols));
        }
        let idx = row * self.cols + col;
        Ok(&mut self.data[idx])
    }

    /// Borrow a single row as a slice
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `row >= rows()`.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(LinalgError::Index(format!(
                "row {row} for matrix with {} rows",
                self.rows
            )));
        }
        Ok(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    fn check_shape(&self, op: &str, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::matrix_shapes(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Element-wise addition
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 1]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[2, 3, 4, 2]);
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_shape("addition", other)?;

        let mut result = Self::zeros_with_config(self.rows, self.cols, self.config);
        match backends::select(&self.config, self.size()) {
            Selected::Scalar => ScalarBackend::add(&self.data, &other.data, &mut result.data),
            #[cfg(feature = "parallel")]
            Selected::Parallel => {
                ParallelBackend::add(&self.data, &other.data, &mut result.data)
            }
        }

        Ok(result)
    }

    /// Element-wise subtraction
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_shape("subtraction", other)?;

        let mut result = Self::zeros_with_config(self.rows, self.cols, self.config);
        match backends::select(&self.config, self.size()) {
            Selected::Scalar => ScalarBackend::sub(&self.data, &other.data, &mut result.data),
            #[cfg(feature = "parallel")]
            Selected::Parallel => {
                ParallelBackend::sub(&self.data, &other.data, &mut result.data)
            }
        }

        Ok(result)
    }

    /// Multiply every element by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = Self::zeros_with_config(self.rows, self.cols, self.config);
        match backends::select(&self.config, self.size()) {
            Selected::Scalar => ScalarBackend::scale(&self.data, scalar, &mut result.data),
            #[cfg(feature = "parallel")]
            Selected::Parallel => ParallelBackend::scale(&self.data, scalar, &mut result.data),
        }
        result
    }

    /// Matrix multiplication (matmul)
    ///
    /// Computes `C = A × B` where A is `m×n`, B is `n×p`, and C is `m×p`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if `self.cols() != other.rows()`,
    /// and [`LinalgError::Size`] if the result shape overflows `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    ///
    /// // [[1, 2],   [[5, 6],   [[19, 22],
    /// //  [3, 4]] ×  [7, 8]] =  [43, 50]]
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dims = %format!("{}x{} @ {}x{}", self.rows, self.cols, other.rows, other.cols))))]
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::Dimension(format!(
                "matrix multiplication {}x{} × {}x{} (inner dimensions {} and {} must match)",
                self.rows, self.cols, other.rows, other.cols, self.cols, other.rows
            )));
        }

        checked_len(self.rows, other.cols)?;
        let mut result = Self::zeros_with_config(self.rows, other.cols, self.config);
        let work = self.size().saturating_mul(other.cols);
        match backends::select(&self.config, work) {
            Selected::Scalar => ScalarBackend::matmul(
                &self.data,
                &other.data,
                &mut result.data,
                self.cols,
                other.cols,
            ),
            #[cfg(feature = "parallel")]
            Selected::Parallel => ParallelBackend::matmul(
                &self.data,
                &other.data,
                &mut result.data,
                self.cols,
                other.cols,
            ),
        }

        Ok(result)
    }

    /// Matrix-vector multiplication (column vector): A × v
    ///
    /// ```text
    /// result[i] = Σ(j=0 to n-1) A[i,j] × v[j]
    /// ```
    ///
    /// The result has one entry per matrix row.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if `v.len() != self.cols()`.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let v = Vector::from_slice(&[1, 2, 3]).unwrap();
    ///
    /// // [[1, 2, 3]   [1]   [14]
    /// //  [4, 5, 6]] × [2] = [32]
    /// //               [3]
    /// assert_eq!(m.matvec(&v).unwrap().as_slice(), &[14, 32]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, v), fields(dims = %format!("{}x{} @ {}", self.rows, self.cols, v.len()))))]
    pub fn matvec(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if v.len() != self.cols {
            return Err(LinalgError::Dimension(format!(
                "vector length {} does not match matrix columns {} for matrix-vector multiplication",
                v.len(),
                self.cols
            )));
        }

        let mut result = vec![T::zero(); self.rows];
        match backends::select(&self.config, self.size()) {
            Selected::Scalar => {
                ScalarBackend::matvec(&self.data, v.as_slice(), &mut result, self.cols)
            }
            #[cfg(feature = "parallel")]
            Selected::Parallel => {
                ParallelBackend::matvec(&self.data, v.as_slice(), &mut result, self.cols)
            }
        }

        Ok(Vector::from_parts(result, self.config))
    }

    /// Vector-matrix multiplication (row vector): vᵀ × A
    ///
    /// ```text
    /// result[j] = Σ(i=0 to m-1) v[i] × A[i,j]
    /// ```
    ///
    /// The result has one entry per matrix column and inherits the vector's
    /// config.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if `v.len() != m.rows()`.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let v = Vector::from_slice(&[1, 2]).unwrap();
    ///
    /// // [1, 2] × [[1, 2, 3]  = [9, 12, 15]
    /// //           [4, 5, 6]]
    /// assert_eq!(Matrix::vecmat(&v, &m).unwrap().as_slice(), &[9, 12, 15]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(v, m), fields(dims = %format!("{} @ {}x{}", v.len(), m.rows, m.cols))))]
    pub fn vecmat(v: &Vector<T>, m: &Matrix<T>) -> Result<Vector<T>> {
        if v.len() != m.rows {
            return Err(LinalgError::Dimension(format!(
                "vector length {} does not match matrix rows {} for vector-matrix multiplication",
                v.len(),
                m.rows
            )));
        }

        let config = v.config();
        let mut result = vec![T::zero(); m.cols];
        match backends::select(&config, m.size()) {
            Selected::Scalar => ScalarBackend::vecmat(v.as_slice(), &m.data, &mut result, m.cols),
            #[cfg(feature = "parallel")]
            Selected::Parallel => {
                ParallelBackend::vecmat(v.as_slice(), &m.data, &mut result, m.cols)
            }
        }

        Ok(Vector::from_parts(result, config))
    }

    /// Row sums of the matrix, each weighted by the matching vector entry
    ///
    /// ```text
    /// result[i] = Σ(j=0 to n-1) v[i] × A[i,j]
    /// ```
    ///
    /// This is the row-scaled accumulation historically exposed as the
    /// "transposed vector times matrix" product. It is *not* `vᵀ × A`; use
    /// [`vecmat`](Self::vecmat) for that.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if `v.len() != self.rows()`.
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let v = Vector::from_slice(&[1, 2]).unwrap();
    /// assert_eq!(m.weighted_row_sums(&v).unwrap().as_slice(), &[6, 30]);
    /// ```
    pub fn weighted_row_sums(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if v.len() != self.rows {
            return Err(LinalgError::Dimension(format!(
                "vector length {} does not match matrix rows {} for weighted row sums",
                v.len(),
                self.rows
            )));
        }

        let result = v
            .iter()
            .zip(self.data.chunks_exact(self.cols))
            .map(|(&weight, row)| row.iter().fold(T::zero(), |acc, &x| acc + weight * x))
            .collect();

        Ok(Vector::from_parts(result, self.config))
    }

    /// Transpose the matrix (swap rows and columns)
    ///
    /// # Example
    ///
    /// ```
    /// use libmatrix::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let t = m.transpose();
    ///
    /// // [[1, 2, 3],     [[1, 4],
    /// //  [4, 5, 6]]  →   [2, 5],
    /// //                  [3, 6]]
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dims = %format!("{}x{}", self.rows, self.cols))))]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros_with_config(self.cols, self.rows, self.config);

        // Block-wise to keep both source rows and destination rows in cache
        const BLOCK_SIZE: usize = 64;

        for i_block in (0..self.rows).step_by(BLOCK_SIZE) {
            for j_block in (0..self.cols).step_by(BLOCK_SIZE) {
                let i_end = (i_block + BLOCK_SIZE).min(self.rows);
                let j_end = (j_block + BLOCK_SIZE).min(self.cols);

                for i in i_block..i_end {
                    let src_row_start = i * self.cols;
                    for j in j_block..j_end {
                        result.data[j * result.cols + i] = self.data[src_row_start + j];
                    }
                }
            }
        }

        result
    }

    /// Equality that treats mismatched shapes as an error
    ///
    /// `==` returns `false` for matrices of different shapes; this variant
    /// reports the mismatch instead.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the shapes differ.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.check_shape("equality", other)?;
        Ok(self.data == other.data)
    }

    /// Exchange contents (data, rows and cols) with `other` in constant time
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

/// Element count of a `rows x cols` matrix, or a size error if it overflows
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        LinalgError::Size(format!(
            "matrix dimensions {rows}x{cols} overflow the addressable element count"
        ))
    })
}

/// Element-wise equality; matrices of different shapes are unequal.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

/// One `| v v … |` line per row.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            write!(f, "| ")?;
            for value in row {
                write!(f, "{value} ")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Generate a matrix of given dimensions with small integer values
    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
        proptest::collection::vec(-100i64..100, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// (A × B) × C = A × (B × C), exactly for integers
        #[test]
        fn test_matmul_associative(
            a in matrix_strategy(3, 4),
            b in matrix_strategy(4, 5),
            c in matrix_strategy(5, 3)
        ) {
            let ab_c = a.matmul(&b).unwrap().matmul(&c).unwrap();
            let a_bc = a.matmul(&b.matmul(&c).unwrap()).unwrap();

            prop_assert_eq!(ab_c.shape(), (3, 3));
            prop_assert_eq!(ab_c, a_bc);
        }

        /// If A is m×n and B is n×p, then A×B is m×p
        #[test]
        fn test_matmul_dimension_property(
            m in 1usize..10,
            n in 1usize..10,
            p in 1usize..10
        ) {
            let a: Matrix<f32> = Matrix::zeros(m, n).unwrap();
            let b: Matrix<f32> = Matrix::zeros(n, p).unwrap();
            prop_assert_eq!(a.matmul(&b).unwrap().shape(), (m, p));
        }

        /// Incompatible inner dimensions always fail
        #[test]
        fn test_matmul_rejects_inner_mismatch(
            m in 1usize..8,
            n in 1usize..8,
            k in 1usize..8,
            p in 1usize..8
        ) {
            prop_assume!(n != k);
            let a: Matrix<i32> = Matrix::zeros(m, n).unwrap();
            let b: Matrix<i32> = Matrix::zeros(k, p).unwrap();
            prop_assert!(matches!(a.matmul(&b), Err(LinalgError::Dimension(_))));
        }

        /// (A + B) - B = A
        #[test]
        fn test_add_sub_roundtrip(
            a in matrix_strategy(4, 3),
            b in matrix_strategy(4, 3)
        ) {
            prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
        }

        /// (A×B)×v = A×(B×v)
        #[test]
        fn test_matvec_associativity(
            a in matrix_strategy(3, 4),
            b in matrix_strategy(4, 5),
            v_data in prop::collection::vec(-10i64..10, 5)
        ) {
            let v = Vector::from_vec(v_data).unwrap();
            let ab_v = a.matmul(&b).unwrap().matvec(&v).unwrap();
            let a_bv = a.matvec(&b.matvec(&v).unwrap()).unwrap();
            prop_assert_eq!(ab_v, a_bv);
        }

        /// v×(A×B) = (v×A)×B
        #[test]
        fn test_vecmat_associativity(
            a in matrix_strategy(3, 4),
            b in matrix_strategy(4, 5),
            v_data in prop::collection::vec(-10i64..10, 3)
        ) {
            let v = Vector::from_vec(v_data).unwrap();
            let v_ab = Matrix::vecmat(&v, &a.matmul(&b).unwrap()).unwrap();
            let va_b = Matrix::vecmat(&Matrix::vecmat(&v, &a).unwrap(), &b).unwrap();
            prop_assert_eq!(v_ab, va_b);
        }

        /// (Aᵀ)ᵀ = A
        #[test]
        fn test_transpose_double_transpose(a in matrix_strategy(5, 7)) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        /// (A×B)ᵀ = Bᵀ×Aᵀ
        #[test]
        fn test_transpose_of_product(
            a in matrix_strategy(3, 4),
            b in matrix_strategy(4, 2)
        ) {
            let left = a.matmul(&b).unwrap().transpose();
            let right = b.transpose().matmul(&a.transpose()).unwrap();
            prop_assert_eq!(left, right);
        }
    }
}
