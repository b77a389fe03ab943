use crate::scalar::Scalar;
use crate::three::Direction3;
use crate::vector::impl_vector3;

/// A location in 3D space.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector3!(Position3);

impl<T: Scalar> Position3<T> {
    /// Euclidean distance to `from`.
    #[inline]
    pub fn distance(self, from: Self) -> T {
        (self - from).magnitude()
    }

    /// True when `other` is closer than `threshold`.
    #[inline]
    pub fn is_near(self, other: Self, threshold: T) -> bool {
        self.distance(other) < threshold
    }

    /// A position `distance` units away from `self` along `direction`.
    #[inline]
    pub fn moved(self, distance: T, toward: Direction3<T>) -> Self {
        let step = toward.normalized() * distance;
        self + Self::new(step.x, step.y, step.z)
    }

    #[inline]
    pub fn move_by(&mut self, distance: T, toward: Direction3<T>) {
        *self = self.moved(distance, toward);
    }
}
