//! Rayon-backed parallel backend
//!
//! Each kernel partitions its output into disjoint rows or elements and lets
//! the rayon pool fill them. Accumulation inside a single output entry keeps
//! the same order as [`ScalarBackend`](super::scalar::ScalarBackend), so
//! `matmul`, `matvec` and `vecmat` produce bit-identical results.
//!
//! `dot` sums fixed-size chunks in parallel and then adds the partial sums in
//! chunk order. The grouping depends only on the input length, never on how
//! rayon schedules the work, so repeated calls return the same bits. For
//! floating-point types that grouping differs from the scalar left-to-right
//! sum.

use rayon::prelude::*;

use super::scalar::ScalarBackend;
use super::Kernel;
use crate::Element;

/// Elements per partial sum in [`ParallelBackend::dot`]
pub const DOT_CHUNK_SIZE: usize = 4096;

/// Parallel backend (rayon thread pool, caller blocks until done)
pub struct ParallelBackend;

impl<T: Element> Kernel<T> for ParallelBackend {
    fn add(a: &[T], b: &[T], result: &mut [T]) {
        result
            .par_iter_mut()
            .zip(a.par_iter().zip(b.par_iter()))
            .for_each(|(r, (&x, &y))| *r = x + y);
    }

    fn sub(a: &[T], b: &[T], result: &mut [T]) {
        result
            .par_iter_mut()
            .zip(a.par_iter().zip(b.par_iter()))
            .for_each(|(r, (&x, &y))| *r = x - y);
    }

    fn scale(a: &[T], scalar: T, result: &mut [T]) {
        result
            .par_iter_mut()
            .zip(a.par_iter())
            .for_each(|(r, &x)| *r = scalar * x);
    }

    fn dot(a: &[T], b: &[T]) -> T {
        let partials: Vec<T> = a
            .par_chunks(DOT_CHUNK_SIZE)
            .zip(b.par_chunks(DOT_CHUNK_SIZE))
            .map(|(x, y)| <ScalarBackend as Kernel<T>>::dot(x, y))
            .collect();

        partials.into_iter().fold(T::zero(), |acc, p| acc + p)
    }

    fn matmul(a: &[T], b: &[T], result: &mut [T], k: usize, n: usize) {
        if n == 0 {
            return;
        }

        // One task per output row; rows never alias
        result.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
            let a_row = &a[i * k..(i + 1) * k];
            for (j, out) in row.iter_mut().enumerate() {
                let mut sum = *out;
                for (kk, &a_ik) in a_row.iter().enumerate() {
                    sum = sum + a_ik * b[kk * n + j];
                }
                *out = sum;
            }
        });
    }

    fn matvec(a: &[T], v: &[T], result: &mut [T], cols: usize) {
        result.par_iter_mut().enumerate().for_each(|(i, r)| {
            let row = &a[i * cols..(i + 1) * cols];
            let mut sum = *r;
            for (&x, &y) in row.iter().zip(v) {
                sum = sum + x * y;
            }
            *r = sum;
        });
    }

    fn vecmat(v: &[T], a: &[T], result: &mut [T], cols: usize) {
        // Column j walks down the rows in the same order as the scalar
        // row-accumulation loop
        result.par_iter_mut().enumerate().for_each(|(j, r)| {
            let mut sum = *r;
            for (i, &scalar) in v.iter().enumerate() {
                sum = sum + scalar * a[i * cols + j];
            }
            *r = sum;
        });
    }
}
