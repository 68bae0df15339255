//! Numeric component bound for the vector types

use std::fmt::{Debug, Display};

use bytemuck::Pod;

/// Numeric capabilities required of a vector component type.
///
/// Implemented for `f32` and `f64` only. Cross-precision construction routes
/// every component through `f64`: widening is exact, and narrowing back to
/// `f32` rounds silently rather than failing.
pub trait Scalar: Copy + Default + PartialEq + Debug + Display + Pod + 'static {
    /// Widen to `f64`, exactly.
    fn to_f64(self) -> f64;

    /// Convert from `f64`, rounding when the target cannot represent the value.
    fn from_f64(v: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_round_trip() {
        let v = 1.5f32;
        assert_eq!(f32::from_f64(v.to_f64()), v);
    }

    #[test]
    fn test_narrowing_rounds() {
        // 1e-300 underflows f32 to zero; narrowing is silent, not an error
        assert_eq!(f32::from_f64(1e-300), 0.0);
        assert_eq!(f32::from_f64(0.1f64.to_f64()), 0.1f32);
    }

    #[test]
    fn test_f64_identity() {
        assert_eq!(f64::from_f64(0.1), 0.1);
        assert_eq!(0.1f64.to_f64(), 0.1);
    }
}
