//! Angles in degrees and radians
//!
//! [`Radians`] and [`Degrees`] wrap one scalar each and convert between
//! each other exactly (`rad = deg * π/180`). Degrees additionally know how
//! to wrap into `[0, 360)` and how to find the shortest signed delta to
//! another angle, which is what makes 350°→10° interpolate through 0°
//! instead of backward through 180°.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::interpolation::{InterpolationMethod, lerp};
use crate::scalar::Scalar;

/// An angle in radians.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Radians<T: Scalar>(pub T);

/// An angle in degrees.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Degrees<T: Scalar>(pub T);

impl<T: Scalar> Radians<T> {
    #[inline]
    pub const fn new(raw: T) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0.floor())
    }
    #[inline]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
    #[inline]
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Radians interpolate over the raw scalar; wrap-around handling lives
    /// on [`Degrees`].
    #[inline]
    pub fn interpolated(self, to: Self, method: InterpolationMethod<T>) -> Self {
        Self(method.apply(self.0, to.0))
    }

    #[inline]
    pub fn interpolate(&mut self, to: Self, method: InterpolationMethod<T>) {
        *self = self.interpolated(to, method);
    }
}

impl<T: Scalar> Degrees<T> {
    #[inline]
    pub const fn new(raw: T) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0.floor())
    }
    #[inline]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
    #[inline]
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// The equivalent angle wrapped into `[0, 360)`. Negative values roll
    /// back up past zero.
    ///
    /// The value is scaled before the remainder so angles that only differ
    /// in the sixth decimal place still wrap consistently.
    pub fn normalized(self) -> Self {
        let scale = T::from_f64(1_000_000.0);
        let full = T::from_f64(360.0);
        let degrees = ((self.0 * scale) % (full * scale)) / scale;
        // An exact negative multiple of 360 leaves a -0 remainder, which
        // must not roll up to a full turn.
        if degrees < T::ZERO {
            Self(degrees + full)
        } else {
            Self(degrees)
        }
    }

    /// The shortest signed angle that, added to `self.normalized()`,
    /// lands on `destination.normalized()`.
    ///
    /// Picks the left (negative) or right (positive) wrap, whichever has
    /// the smaller magnitude. Equal source and destination return exactly
    /// zero.
    pub fn shortest_angle(self, destination: Self) -> Self {
        let full = T::from_f64(360.0);

        let mut src = self.0;
        let mut dst = destination.0;

        // Out-of-range operands wrap first: -45 behaves as 315.
        if dst < T::ZERO || dst >= full {
            dst = destination.normalized().0;
        }
        if src < T::ZERO || src >= full {
            src = self.normalized().0;
        }

        if dst == src {
            return Self(T::ZERO);
        }

        let mut left = (full - dst) + src;
        let mut right = dst - src;
        if dst < src && src > T::ZERO {
            left = src - dst;
            right = (full - src) + dst;
        }

        if left <= right {
            Self(-left)
        } else {
            Self(right)
        }
    }

    /// Interpolates toward `to`. With `shortest: true` the path routes
    /// through [`Self::shortest_angle`], so 350°→10° passes through 0°.
    pub fn interpolated(self, to: Self, method: InterpolationMethod<T>) -> Self {
        match method {
            InterpolationMethod::Linear { factor, shortest } => {
                if shortest {
                    let delta = self.shortest_angle(to);
                    Self(lerp(self.0, self.0 + delta.0, factor))
                } else {
                    Self(lerp(self.0, to.0, factor))
                }
            }
        }
    }

    #[inline]
    pub fn interpolate(&mut self, to: Self, method: InterpolationMethod<T>) {
        *self = self.interpolated(to, method);
    }
}

// Conversions: rad = deg * π/180 and back, exactly this formula.
impl<T: Scalar> From<Degrees<T>> for Radians<T> {
    #[inline]
    fn from(value: Degrees<T>) -> Self {
        Self(value.0 * (T::PI / T::from_f64(180.0)))
    }
}

impl<T: Scalar> From<Radians<T>> for Degrees<T> {
    #[inline]
    fn from(value: Radians<T>) -> Self {
        Self(value.0 * (T::from_f64(180.0) / T::PI))
    }
}

macro_rules! impl_angle_ops {
    ($name:ident) => {
        impl<T: Scalar> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }
        impl<T: Scalar> Add<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: T) -> Self {
                Self(self.0 + rhs)
            }
        }
        impl<T: Scalar> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }
        impl<T: Scalar> Sub<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: T) -> Self {
                Self(self.0 - rhs)
            }
        }
        impl<T: Scalar> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl<T: Scalar> Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }
        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self(self.0 * rhs)
            }
        }
        impl<T: Scalar> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                self.0 *= rhs.0;
            }
        }

        impl<T: Scalar> Div for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self(self.0 / rhs.0)
            }
        }
        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self {
                Self(self.0 / rhs)
            }
        }
        impl<T: Scalar> DivAssign for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                self.0 /= rhs.0;
            }
        }

        impl<T: Scalar> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}

impl_angle_ops!(Radians);
impl_angle_ops!(Degrees);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians_and_back() {
        let radians = Radians::from(Degrees::new(180.0_f32));
        assert!((radians.0 - core::f32::consts::PI).abs() < 1e-6);
        let degrees = Degrees::from(Radians::new(core::f64::consts::PI));
        assert!((degrees.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_wraps_positive() {
        assert_eq!(Degrees::new(361.0_f32).normalized(), Degrees::new(1.0));
        assert_eq!(Degrees::new(-1.0_f32).normalized(), Degrees::new(359.0));
        assert_eq!(Degrees::new(720.0_f32).normalized(), Degrees::new(0.0));
    }

    #[test]
    fn test_shortest_angle_small_deltas() {
        let zero = Degrees::new(0.0_f32);
        assert_eq!(zero.shortest_angle(Degrees::new(1.0)), Degrees::new(1.0));
        assert_eq!(zero.shortest_angle(Degrees::new(-1.0)), Degrees::new(-1.0));
    }

    #[test]
    fn test_shortest_angle_equal_after_wrap() {
        let from = Degrees::new(720.0_f32);
        assert_eq!(from.shortest_angle(Degrees::new(-720.0)), Degrees::new(0.0));
    }

    #[test]
    fn test_shortest_angle_prefers_wrap_over_long_path() {
        let delta = Degrees::new(350.0_f32).shortest_angle(Degrees::new(10.0));
        assert!((delta.0 - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_interpolated_shortest_routes_through_zero() {
        let method = InterpolationMethod::linear(0.5_f32);
        let half = Degrees::new(350.0_f32).interpolated(Degrees::new(10.0), method);
        // Halfway along the +20 wrap is 360, not 180.
        assert!((half.0 - 360.0).abs() < 1e-4);
    }

    #[test]
    fn test_interpolated_numeric_goes_backward() {
        let method = InterpolationMethod::linear_numeric(0.5_f32);
        let half = Degrees::new(350.0_f32).interpolated(Degrees::new(10.0), method);
        assert!((half.0 - 180.0).abs() < 1e-4);
    }
}
