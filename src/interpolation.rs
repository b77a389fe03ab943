//! Interpolation methods shared by scalars, vectors, rotations and
//! transforms.
//!
//! Every `interpolated`/`interpolate` method in the crate takes an
//! [`InterpolationMethod`] so callers choose the factor and, for angular
//! quantities, whether to travel the shortest physical path or the raw
//! numeric one.

use crate::scalar::Scalar;

/// How to blend between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationMethod<T: Scalar> {
    /// Constant-rate blend. `factor` is the interpolation progress, 0 being
    /// the source and 1 the destination.
    ///
    /// `shortest` selects the shortest physical distance for angular types
    /// (degrees take the wrap-around path, quaternions slerp the short
    /// arc). Non-angular types ignore it.
    Linear { factor: T, shortest: bool },
}

impl<T: Scalar> InterpolationMethod<T> {
    /// Linear blend taking the shortest path for angular quantities.
    #[inline]
    pub fn linear(factor: T) -> Self {
        Self::Linear {
            factor,
            shortest: true,
        }
    }

    /// Plain per-component blend over the numeric distance, ignoring
    /// wrap-around.
    #[inline]
    pub fn linear_numeric(factor: T) -> Self {
        Self::Linear {
            factor,
            shortest: false,
        }
    }

    /// Applies the method to a raw scalar pair.
    #[inline]
    pub(crate) fn apply(self, from: T, to: T) -> T {
        match self {
            Self::Linear { factor, .. } => lerp(from, to, factor),
        }
    }
}

/// `from + (to - from) * factor`, exact at both endpoints.
#[inline]
pub(crate) fn lerp<T: Scalar>(from: T, to: T, factor: T) -> T {
    from + (to - from) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        assert_eq!(lerp(3.0_f32, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0_f32, 7.0, 1.0), 7.0);
        assert_eq!(lerp(-2.0_f64, 2.0, 0.5), 0.0);
    }

    #[test]
    fn test_apply_matches_lerp() {
        let method = InterpolationMethod::linear(0.25_f32);
        assert_eq!(method.apply(0.0, 8.0), 2.0);
        let numeric = InterpolationMethod::linear_numeric(0.25_f32);
        assert_eq!(numeric.apply(0.0, 8.0), 2.0);
    }
}
