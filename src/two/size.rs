use crate::scalar::Scalar;
use crate::vector::impl_vector2;

/// A 2D extent. `x`/`y` and `width`/`height` address the same storage.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl_vector2!(Size2);

impl<T: Scalar> Size2<T> {
    pub const ONE: Self = Self { x: T::ONE, y: T::ONE };

    #[inline]
    pub const fn from_extents(width: T, height: T) -> Self {
        Self { x: width, y: height }
    }

    #[inline]
    pub fn width(self) -> T {
        self.x
    }

    #[inline]
    pub fn height(self) -> T {
        self.y
    }

    /// Width over height.
    #[inline]
    pub fn aspect_ratio(self) -> T {
        self.x / self.y
    }
}
