use crate::scalar::Scalar;
use crate::vector::impl_vector3;

/// A 3D extent: width along X, height along Y, depth along Z.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector3!(Size3);

impl<T: Scalar> Size3<T> {
    pub const ONE: Self = Self {
        x: T::ONE,
        y: T::ONE,
        z: T::ONE,
    };

    #[inline]
    pub const fn from_extents(width: T, height: T, depth: T) -> Self {
        Self {
            x: width,
            y: height,
            z: depth,
        }
    }

    #[inline]
    pub fn width(self) -> T {
        self.x
    }

    #[inline]
    pub fn height(self) -> T {
        self.y
    }

    #[inline]
    pub fn depth(self) -> T {
        self.z
    }
}
