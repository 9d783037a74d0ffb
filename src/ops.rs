//! Operator overloads for [`Vector`] and [`Matrix`]
//!
//! Binary operators between containers forward to the named methods and
//! return [`Result`] because their shapes are only known at runtime:
//!
//! | Expression      | Method                      | Output                 |
//! |-----------------|-----------------------------|------------------------|
//! | `&v + &w`       | [`Vector::add`]             | `Result<Vector<T>>`    |
//! | `&v - &w`       | [`Vector::sub`]             | `Result<Vector<T>>`    |
//! | `&v * &w`       | [`Vector::dot`]             | `Result<T>`            |
//! | `&a + &b`       | [`Matrix::add`]             | `Result<Matrix<T>>`    |
//! | `&a - &b`       | [`Matrix::sub`]             | `Result<Matrix<T>>`    |
//! | `&a * &b`       | [`Matrix::matmul`]          | `Result<Matrix<T>>`    |
//! | `&a * &v`       | [`Matrix::matvec`]          | `Result<Vector<T>>`    |
//! | `&v * &a`       | [`Matrix::vecmat`]          | `Result<Vector<T>>`    |
//!
//! The left operand is always borrowed so that `a.add(&b)` keeps resolving to
//! the inherent method instead of a consuming operator. The right operand may
//! be owned or borrowed.
//!
//! Scaling by a primitive scalar cannot fail and is available in both
//! directions (`&v * 2`, `2 * &v`, and their owned forms).
//!
//! The scalar must have the element type: `2.0 * &v` works for a
//! `Vector<f64>`, but `2 * &v` does not because `2` is an integer literal.
//! Convert first when the types differ, e.g. `f64::from(k) * &v` or
//! `v.scale(f64::from(k))`.

use std::ops::{Add, Mul, Sub};

use crate::{Element, Matrix, Result, Vector};

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $Lhs:ident, $Rhs:ident, $Output:ty, $f:path) => {
        impl<T: Element> $Trait<&$Rhs<T>> for &$Lhs<T> {
            type Output = $Output;

            fn $method(self, rhs: &$Rhs<T>) -> $Output {
                $f(self, rhs)
            }
        }

        impl<T: Element> $Trait<$Rhs<T>> for &$Lhs<T> {
            type Output = $Output;

            fn $method(self, rhs: $Rhs<T>) -> $Output {
                $f(self, &rhs)
            }
        }
    };
}

impl_binop!(Add, add, Vector, Vector, Result<Vector<T>>, Vector::add);
impl_binop!(Sub, sub, Vector, Vector, Result<Vector<T>>, Vector::sub);
impl_binop!(Mul, mul, Vector, Vector, Result<T>, Vector::dot);

impl_binop!(Add, add, Matrix, Matrix, Result<Matrix<T>>, Matrix::add);
impl_binop!(Sub, sub, Matrix, Matrix, Result<Matrix<T>>, Matrix::sub);
impl_binop!(Mul, mul, Matrix, Matrix, Result<Matrix<T>>, Matrix::matmul);
impl_binop!(Mul, mul, Matrix, Vector, Result<Vector<T>>, Matrix::matvec);
impl_binop!(Mul, mul, Vector, Matrix, Result<Vector<T>>, Matrix::vecmat);

// A generic `impl<T> Mul<Vector<T>> for T` is rejected by the orphan rules,
// so scalar multiplication is spelled out per primitive type.
macro_rules! impl_scalar_mul {
    ($($t:ty),+) => {
        $(
            impl Mul<$t> for &Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, scalar: $t) -> Vector<$t> {
                    self.scale(scalar)
                }
            }

            impl Mul<$t> for Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, scalar: $t) -> Vector<$t> {
                    self.scale(scalar)
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, vector: &Vector<$t>) -> Vector<$t> {
                    vector.scale(self)
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, vector: Vector<$t>) -> Vector<$t> {
                    vector.scale(self)
                }
            }

            impl Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, scalar: $t) -> Matrix<$t> {
                    self.scale(scalar)
                }
            }

            impl Mul<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, scalar: $t) -> Matrix<$t> {
                    self.scale(scalar)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, matrix: &Matrix<$t>) -> Matrix<$t> {
                    matrix.scale(self)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, matrix: Matrix<$t>) -> Matrix<$t> {
                    matrix.scale(self)
                }
            }
        )+
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use crate::{LinalgError, Matrix, Vector};

    #[test]
    fn test_vector_operators() {
        let v1 = Vector::from_slice(&[1, 2]).unwrap();
        let v2 = Vector::from_slice(&[1, 4]).unwrap();

        assert_eq!((&v1 + &v2).unwrap().as_slice(), &[2, 6]);
        assert_eq!((&v1 - v2.clone()).unwrap().as_slice(), &[0, -2]);
        assert_eq!((&v1 * &v2).unwrap(), 9);
        assert!(v1 != v2);
    }

    #[test]
    fn test_scaled_difference() {
        // 2*v1 - v2 == [1, 0]
        let v1 = Vector::from_slice(&[1.0f64, 2.0]).unwrap();
        let v2 = Vector::from_slice(&[1.0, 4.0]).unwrap();
        let result = (&(2.0f64 * &v1) - &v2).unwrap();
        assert_eq!(result.as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let v = Vector::from_slice(&[1i32, -2, 3]).unwrap();
        assert_eq!((&v * 3).as_slice(), &[3, -6, 9]);
        assert_eq!((3 * &v).as_slice(), &[3, -6, 9]);
        assert_eq!(v.clone() * 3, 3 * v);

        let m = Matrix::from_vec(1, 2, vec![1.5f32, -1.0]).unwrap();
        assert_eq!((&m * 2.0).as_slice(), &[3.0, -2.0]);
        assert_eq!((2.0 * m).as_slice(), &[3.0, -2.0]);
    }

    #[test]
    fn test_scalar_mul_converted_scalar() {
        let v = Vector::from_slice(&[0.5f64, -1.5]).unwrap();
        let k: i32 = 2;
        assert_eq!((f64::from(k) * &v).as_slice(), &[1.0, -3.0]);
        assert_eq!(v.scale(f64::from(k)), 2.0 * &v);

        let m = Matrix::from_vec(1, 2, vec![3i64, -4]).unwrap();
        let small: u8 = 3;
        assert_eq!((&m * i64::from(small)).as_slice(), &[9, -12]);
    }

    #[test]
    fn test_vector_operator_mismatch() {
        let a = Vector::from_slice(&[1, 2]).unwrap();
        let b = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert!(matches!(&a + &b, Err(LinalgError::Dimension(_))));
        assert!(matches!(&a - &b, Err(LinalgError::Dimension(_))));
        assert!(matches!(&a * &b, Err(LinalgError::Dimension(_))));
    }

    #[test]
    fn test_matrix_operators() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 1]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap();

        assert_eq!(
            (&a + &b).unwrap(),
            Matrix::from_vec(2, 2, vec![2, 3, 4, 2]).unwrap()
        );
        assert_eq!((&a - &b).unwrap().as_slice(), &[0, 1, 2, 0]);
        assert_eq!((&a * &b).unwrap().as_slice(), &[3, 3, 4, 4]);
        assert!(a != b);
    }

    #[test]
    fn test_mixed_operators() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let v3 = Vector::from_slice(&[1, 2, 3]).unwrap();
        let v2 = Vector::from_slice(&[1, 2]).unwrap();

        assert_eq!((&m * &v3).unwrap().as_slice(), &[14, 32]);
        assert_eq!((&v2 * &m).unwrap().as_slice(), &[9, 12, 15]);
        assert!(matches!(&m * &v2, Err(LinalgError::Dimension(_))));
        assert!(matches!(&v3 * &m, Err(LinalgError::Dimension(_))));
    }

    #[test]
    fn test_operator_chain() {
        let a = Matrix::from_vec(2, 2, vec![1, 1, 3, 1]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap();
        let v1 = Vector::from_slice(&[1, 2]).unwrap();
        let v2 = Vector::from_slice(&[1, 4]).unwrap();

        // a * b * (v1 + v2)
        let ab = (&a * &b).unwrap();
        let result = (&ab * (&v1 + &v2).unwrap()).unwrap();
        assert_eq!(result.as_slice(), &[16, 32]);
    }

    #[test]
    fn test_named_methods_do_not_consume() {
        let a = Vector::from_slice(&[1, 2]).unwrap();
        let b = Vector::from_slice(&[3, 4]).unwrap();
        let _ = a.add(&b).unwrap();
        let _ = a.sub(&b).unwrap();
        assert_eq!(a.as_slice(), &[1, 2]);
    }
}
