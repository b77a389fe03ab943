use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Edge offsets for shrinking a [`Rect`](crate::two::Rect).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Insets<T: Scalar> {
    pub top: T,
    pub leading: T,
    pub bottom: T,
    pub trailing: T,
}

impl<T: Scalar> Insets<T> {
    pub const ZERO: Self = Self {
        top: T::ZERO,
        leading: T::ZERO,
        bottom: T::ZERO,
        trailing: T::ZERO,
    };

    #[inline]
    pub const fn new(top: T, leading: T, bottom: T, trailing: T) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}

impl<T: Scalar> core::ops::Mul<T> for Insets<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(
            self.top * rhs,
            self.leading * rhs,
            self.bottom * rhs,
            self.trailing * rhs,
        )
    }
}

impl<T: Scalar> core::ops::MulAssign<T> for Insets<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> core::ops::Div<T> for Insets<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(
            self.top / rhs,
            self.leading / rhs,
            self.bottom / rhs,
            self.trailing / rhs,
        )
    }
}

impl<T: Scalar> core::ops::DivAssign<T> for Insets<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
