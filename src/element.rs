//! Numeric element types accepted by [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix)

use std::fmt::{Debug, Display};

use num_traits::Num;

/// Numeric element type
///
/// Blanket-implemented for every `Copy` type implementing [`num_traits::Num`],
/// which covers the primitive integers and floats. `bool` is not `Num` and is
/// therefore rejected at compile time.
///
/// The `Send + Sync` bounds let the parallel kernels share operands across the
/// rayon pool.
pub trait Element: Num + Copy + Debug + Display + Send + Sync + 'static {}

impl<T> Element for T where T: Num + Copy + Debug + Display + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn zero_of<T: Element>() -> T {
        T::zero()
    }

    #[test]
    fn test_primitive_elements() {
        assert_eq!(zero_of::<f32>(), 0.0);
        assert_eq!(zero_of::<f64>(), 0.0);
        assert_eq!(zero_of::<i32>(), 0);
        assert_eq!(zero_of::<u8>(), 0);
        assert_eq!(zero_of::<i128>(), 0);
    }

    #[test]
    fn test_one_is_multiplicative_identity() {
        assert_eq!(7i64 * i64::one(), 7);
        assert_eq!(2.5f32 * f32::one(), 2.5);
    }
}
