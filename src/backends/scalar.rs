//! Scalar (single-threaded) backend implementation
//!
//! This is the portable baseline that every other backend must agree with.
//! It uses simple loops and runs on the calling thread.

use super::Kernel;
use crate::Element;

/// Scalar backend (portable, runs inline)
pub struct ScalarBackend;

impl<T: Element> Kernel<T> for ScalarBackend {
    fn add(a: &[T], b: &[T], result: &mut [T]) {
        for i in 0..a.len() {
            result[i] = a[i] + b[i];
        }
    }

    fn sub(a: &[T], b: &[T], result: &mut [T]) {
        for i in 0..a.len() {
            result[i] = a[i] - b[i];
        }
    }

    fn scale(a: &[T], scalar: T, result: &mut [T]) {
        for (r, &x) in result.iter_mut().zip(a) {
            *r = scalar * x;
        }
    }

    fn dot(a: &[T], b: &[T]) -> T {
        let mut sum = T::zero();
        for i in 0..a.len() {
            sum = sum + a[i] * b[i];
        }
        sum
    }

    fn matmul(a: &[T], b: &[T], result: &mut [T], k: usize, n: usize) {
        if n == 0 {
            return;
        }
        let m = result.len() / n;

        // C[i,j] = Σ A[i,k] × B[k,j]
        for i in 0..m {
            for j in 0..n {
                let mut sum = result[i * n + j];
                for kk in 0..k {
                    sum = sum + a[i * k + kk] * b[kk * n + j];
                }
                result[i * n + j] = sum;
            }
        }
    }

    fn matvec(a: &[T], v: &[T], result: &mut [T], cols: usize) {
        for (i, r) in result.iter_mut().enumerate() {
            let row = &a[i * cols..(i + 1) * cols];
            *r = *r + Self::dot(row, v);
        }
    }

    fn vecmat(v: &[T], a: &[T], result: &mut [T], cols: usize) {
        // Row-wise accumulation keeps access to `a` sequential:
        // result += v[i] * row_i
        for (i, &scalar) in v.iter().enumerate() {
            let row = &a[i * cols..(i + 1) * cols];
            for (r, &x) in result.iter_mut().zip(row) {
                *r = *r + scalar * x;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_add_sub() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let mut result = [0; 3];

        <ScalarBackend as Kernel<i32>>::add(&a, &b, &mut result);
        assert_eq!(result, [5, 7, 9]);

        <ScalarBackend as Kernel<i32>>::sub(&a, &b, &mut result);
        assert_eq!(result, [-3, -3, -3]);
    }

    #[test]
    fn test_scalar_scale() {
        let a = [1.0, -2.0, 0.5];
        let mut result = [0.0; 3];
        <ScalarBackend as Kernel<f64>>::scale(&a, 2.0, &mut result);
        assert_eq!(result, [2.0, -4.0, 1.0]);
    }

    #[test]
    fn test_scalar_dot() {
        let result = <ScalarBackend as Kernel<i64>>::dot(&[1, 2, 3], &[4, 5, 6]);
        assert_eq!(result, 32);
    }

    #[test]
    fn test_scalar_dot_empty_is_zero() {
        let result = <ScalarBackend as Kernel<f32>>::dot(&[], &[]);
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_scalar_matmul() {
        // [[1, 2],   [[5, 6],   [[19, 22],
        //  [3, 4]] ×  [7, 8]] =  [43, 50]]
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut result = [0; 4];
        <ScalarBackend as Kernel<i32>>::matmul(&a, &b, &mut result, 2, 2);
        assert_eq!(result, [19, 22, 43, 50]);
    }

    #[test]
    fn test_scalar_matvec_vecmat() {
        // [[1, 2, 3],
        //  [4, 5, 6]]
        let a = [1, 2, 3, 4, 5, 6];

        let mut av = [0; 2];
        <ScalarBackend as Kernel<i32>>::matvec(&a, &[1, 2, 3], &mut av, 3);
        assert_eq!(av, [14, 32]);

        let mut va = [0; 3];
        <ScalarBackend as Kernel<i32>>::vecmat(&[1, 2], &a, &mut va, 3);
        assert_eq!(va, [9, 12, 15]);
    }
}
