use crate::angle::{Degrees, Radians};
use crate::scalar::Scalar;
use crate::three::Quaternion;
use crate::two::Position2;
use crate::vector::impl_vector2;

/// A heading in the 2D plane, expected (not enforced) to be unit length.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Direction2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl_vector2!(Direction2);

impl<T: Scalar> Direction2<T> {
    pub const UP: Self = Self { x: T::ZERO, y: T::ONE };
    pub const DOWN: Self = Self {
        x: T::ZERO,
        y: T::NEG_ONE,
    };
    pub const LEFT: Self = Self {
        x: T::NEG_ONE,
        y: T::ZERO,
    };
    pub const RIGHT: Self = Self { x: T::ONE, y: T::ZERO };

    /// Unit direction pointing from `origin` toward `destination`.
    #[inline]
    pub fn from_points(origin: Position2<T>, destination: Position2<T>) -> Self {
        let offset = destination - origin;
        Self::new(offset.x, offset.y).normalized()
    }

    /// Direction at `angle` measured counter-clockwise from +X.
    #[inline]
    pub fn from_radians(angle: Radians<T>) -> Self {
        Self::new(angle.0.cos(), angle.0.sin())
    }

    #[inline]
    pub fn from_degrees(angle: Degrees<T>) -> Self {
        Self::from_radians(angle.into())
    }

    /// Unsigned angle between the two headings.
    pub fn angle(self, to: Self) -> Radians<T> {
        let v0 = self.normalized();
        let v1 = to.normalized();
        Radians(v0.dot(v1).acos())
    }

    /// Signed heading about the Z axis, zero at `DOWN`.
    #[inline]
    pub fn angle_around_z(self) -> Radians<T> {
        Radians(self.x.atan2(-self.y))
    }

    /// The heading rotated by `rotation`, treated as lying in the XY plane.
    pub fn rotated(self, rotation: Quaternion<T>) -> Self {
        let lifted = rotation * self;
        Self::new(lifted.x, lifted.y)
    }

    /// Mirror off a surface with the given normal.
    pub fn reflected(self, normal: Self) -> Self {
        let normal = normal.normalized();
        let dn = -T::TWO * self.dot(normal);
        normal * dn + self
    }
}
