use crate::angle::Radians;
use crate::scalar::Scalar;
use crate::three::{Position3, Quaternion};
use crate::vector::impl_vector3;

/// A heading in 3D space, expected (not enforced) to be unit length.
///
/// The coordinate system is right-handed with -Z forward, so
/// [`Direction3::FORWARD`] is `(0, 0, -1)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Direction3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector3!(Direction3);

impl<T: Scalar> Direction3<T> {
    pub const UP: Self = Self {
        x: T::ZERO,
        y: T::ONE,
        z: T::ZERO,
    };
    pub const DOWN: Self = Self {
        x: T::ZERO,
        y: T::NEG_ONE,
        z: T::ZERO,
    };
    pub const LEFT: Self = Self {
        x: T::NEG_ONE,
        y: T::ZERO,
        z: T::ZERO,
    };
    pub const RIGHT: Self = Self {
        x: T::ONE,
        y: T::ZERO,
        z: T::ZERO,
    };
    pub const FORWARD: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::NEG_ONE,
    };
    pub const BACKWARD: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ONE,
    };

    /// Unit direction pointing from `origin` toward `destination`.
    #[inline]
    pub fn from_points(origin: Position3<T>, destination: Position3<T>) -> Self {
        let offset = destination - origin;
        Self::new(offset.x, offset.y, offset.z).normalized()
    }

    /// Unsigned angle between the two headings.
    pub fn angle(self, to: Self) -> Radians<T> {
        let v0 = self.normalized();
        let v1 = to.normalized();
        let dot = v0.dot(v1);
        Radians((dot / (v0.magnitude() * v1.magnitude())).acos())
    }

    #[inline]
    pub fn angle_around_x(self) -> Radians<T> {
        Radians(self.y.atan2(self.z))
    }

    #[inline]
    pub fn angle_around_y(self) -> Radians<T> {
        Radians(self.x.atan2(self.z))
    }

    #[inline]
    pub fn angle_around_z(self) -> Radians<T> {
        Radians(self.y.atan2(self.x))
    }

    /// Applies `rotation` via the sandwich product `q * v * conjugate(q)`.
    pub fn rotated(self, rotation: Quaternion<T>) -> Self {
        rotation.rotate(self)
    }

    /// Some direction perpendicular to `self`, chosen by crossing against
    /// the axis `self` points along least.
    pub fn orthogonal(self) -> Self {
        let x = self.x.abs();
        let y = self.y.abs();
        let z = self.z.abs();

        let other = if x < y {
            if x < z { Self::RIGHT } else { Self::FORWARD }
        } else if y < z {
            Self::UP
        } else {
            Self::FORWARD
        };
        self.cross(other)
    }

    /// Mirror off a surface with the given normal.
    pub fn reflected(self, normal: Self) -> Self {
        let normal = normal.normalized();
        let dn = -T::TWO * self.dot(normal);
        normal * dn + self
    }
}
