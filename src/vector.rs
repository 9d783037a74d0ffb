//! Fixed-length numeric vector

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::backends::scalar::ScalarBackend;
#[cfg(feature = "parallel")]
use crate::backends::parallel::ParallelBackend;
use crate::backends::{self, Kernel, Selected};
use crate::{Backend, DispatchConfig, Element, LinalgError, Result};

/// Fixed-length vector of numeric elements
///
/// The length is chosen at construction, is always greater than zero and
/// never changes afterwards. Cloning performs a deep copy; moving transfers
/// the buffer.
///
/// # Examples
///
/// ```
/// use libmatrix::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
/// let b = Vector::from_slice(&[4.0, 5.0, 6.0]).unwrap();
/// let result = a.add(&b).unwrap();
///
/// assert_eq!(result.as_slice(), &[5.0, 7.0, 9.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Vector<T> {
    data: Vec<T>,
    config: DispatchConfig,
}

impl<T: Element> Vector<T> {
    /// Create a zero-initialised vector of `len` elements
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Size`] if `len` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::Vector;
    ///
    /// let v: Vector<i32> = Vector::new(4).unwrap();
    /// assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
    /// assert!(Vector::<i32>::new(0).is_err());
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(LinalgError::Size(
                "vector length must be greater than zero".to_string(),
            ));
        }
        Ok(Self::from_parts(
            vec![T::zero(); len],
            DispatchConfig::default().build(),
        ))
    }

    /// Create a vector that takes ownership of `data`
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Size`] if `data` is empty.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::Size(
                "vector literal must contain at least one element".to_string(),
            ));
        }
        Ok(Self::from_parts(data, DispatchConfig::default().build()))
    }

    /// Create a vector by copying `data`
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Size`] if `data` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(v.len(), 4);
    /// ```
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Replace the dispatch configuration, resolving `Backend::Auto`
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::{Backend, DispatchConfig, Vector};
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0])
    ///     .unwrap()
    ///     .with_config(DispatchConfig::sequential());
    /// assert_eq!(v.backend(), Backend::Scalar);
    /// ```
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config.build();
        self
    }

    /// Build from a non-empty buffer without re-validating
    pub(crate) fn from_parts(data: Vec<T>, config: DispatchConfig) -> Self {
        debug_assert!(!data.is_empty());
        Self { data, config }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of elements (same as [`len`](Self::len))
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Always `false`; vectors are never empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get underlying data as slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// Get the dispatch configuration
    pub fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Checked element access
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::Vector;
    ///
    /// let v = Vector::from_slice(&[10, 20]).unwrap();
    /// assert_eq!(v.get(1), Ok(&20));
    /// assert!(v.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data
            .get(index)
            .ok_or_else(|| LinalgError::vector_index(index, len))
    }

    /// Checked mutable element access
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| LinalgError::vector_index(index, len))
    }

    fn check_len(&self, op: &str, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::vector_lengths(op, self.len(), other.len()));
        }
        Ok(())
    }

    /// Element-wise addition
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_len("addition", other)?;

        let mut result = vec![T::zero(); self.len()];
        match backends::select(&self.config, self.len()) {
            Selected::Scalar => ScalarBackend::add(&self.data, &other.data, &mut result),
            #[cfg(feature = "parallel")]
            Selected::Parallel => ParallelBackend::add(&self.data, &other.data, &mut result),
        }

        Ok(Self::from_parts(result, self.config))
    }

    /// Element-wise subtraction
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::Vector;
    ///
    /// let a = Vector::from_slice(&[5, 7]).unwrap();
    /// let b = Vector::from_slice(&[1, 4]).unwrap();
    /// assert_eq!(a.sub(&b).unwrap().as_slice(), &[4, 3]);
    /// ```
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_len("subtraction", other)?;

        let mut result = vec![T::zero(); self.len()];
        match backends::select(&self.config, self.len()) {
            Selected::Scalar => ScalarBackend::sub(&self.data, &other.data, &mut result),
            #[cfg(feature = "parallel")]
            Selected::Parallel => ParallelBackend::sub(&self.data, &other.data, &mut result),
        }

        Ok(Self::from_parts(result, self.config))
    }

    /// Dot (scalar) product
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_len("dot product", other)?;

        let result = match backends::select(&self.config, self.len()) {
            Selected::Scalar => ScalarBackend::dot(&self.data, &other.data),
            #[cfg(feature = "parallel")]
            Selected::Parallel => ParallelBackend::dot(&self.data, &other.data),
        };

        Ok(result)
    }

    /// Multiply every element by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = vec![T::zero(); self.len()];
        match backends::select(&self.config, self.len()) {
            Selected::Scalar => ScalarBackend::scale(&self.data, scalar, &mut result),
            #[cfg(feature = "parallel")]
            Selected::Parallel => ParallelBackend::scale(&self.data, scalar, &mut result),
        }
        Self::from_parts(result, self.config)
    }

    /// Cross product of two 3-dimensional vectors
    ///
    /// For unsigned element types the middle component underflows unless it
    /// is zero; use a signed or floating-point type.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] unless both vectors have length 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmatrix::Vector;
    ///
    /// let a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = Vector::from_slice(&[1, 3, 10]).unwrap();
    /// assert_eq!(a.cross(&b).unwrap().as_slice(), &[11, -7, 1]);
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.len() != 3 || other.len() != 3 {
            return Err(LinalgError::Dimension(format!(
                "cross product is only defined for length-3 vectors, got {} and {}",
                self.len(),
                other.len()
            )));
        }

        let (a, b) = (&self.data, &other.data);
        let result = vec![
            a[1] * b[2] - a[2] * b[1],
            T::zero() - (a[0] * b[2] - a[2] * b[0]),
            a[0] * b[1] - a[1] * b[0],
        ];

        Ok(Self::from_parts(result, self.config))
    }

    /// Equality that treats mismatched lengths as an error
    ///
    /// `==` returns `false` for vectors of different lengths; this variant
    /// reports the mismatch instead.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimension`] if the lengths differ.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.check_len("equality", other)?;
        Ok(self.data == other.data)
    }

    /// Exchange contents with `other` in constant time
    ///
    /// Lengths may differ; no elements are copied.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T: Element> TryFrom<Vec<T>> for Vector<T> {
    type Error = LinalgError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

/// Element-wise equality; vectors of different lengths are unequal.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// One `| value |` line per element.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "| {value} |")?;
        }
        Ok(())
    }
}
