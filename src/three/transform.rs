use crate::angle::Degrees;
use crate::interpolation::InterpolationMethod;
use crate::scalar::Scalar;
use crate::three::{Direction3, Matrix4x4, Position3, Quaternion, Size3};

/// Position, rotation and scale with a memoized composition matrix.
///
/// The cache follows a two-state contract. A fresh transform is dirty;
/// any setter that observes an actual change marks it dirty again, and
/// [`matrix`](Transform3::matrix) rebuilds only in that state. Copies
/// carry their cache and dirty flag with them and diverge independently
/// afterward.
#[derive(Copy, Clone, Debug)]
pub struct Transform3<T: Scalar> {
    position: Position3<T>,
    rotation: Quaternion<T>,
    scale: Size3<T>,
    matrix_cache: Matrix4x4<T>,
    needs_update: bool,
}

impl<T: Scalar> Transform3<T> {
    pub const ZERO: Self = Self {
        position: Position3::ZERO,
        rotation: Quaternion::IDENTITY,
        scale: Size3::ZERO,
        matrix_cache: Matrix4x4::IDENTITY,
        needs_update: true,
    };

    pub const IDENTITY: Self = Self {
        position: Position3::ZERO,
        rotation: Quaternion::IDENTITY,
        scale: Size3::ONE,
        matrix_cache: Matrix4x4::IDENTITY,
        needs_update: true,
    };

    pub fn new(position: Position3<T>, rotation: Quaternion<T>, scale: Size3<T>) -> Self {
        Self {
            position,
            rotation,
            scale,
            matrix_cache: Matrix4x4::IDENTITY,
            needs_update: true,
        }
    }

    #[inline]
    pub fn position(&self) -> Position3<T> {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> Quaternion<T> {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> Size3<T> {
        self.scale
    }

    pub fn set_position(&mut self, position: Position3<T>) {
        debug_assert!(position.is_finite());
        if !self.needs_update && self.position != position {
            self.needs_update = true;
        }
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quaternion<T>) {
        debug_assert!(rotation.is_finite());
        if !self.needs_update && self.rotation != rotation {
            self.needs_update = true;
        }
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Size3<T>) {
        debug_assert!(scale.is_finite());
        if !self.needs_update && self.scale != scale {
            self.needs_update = true;
        }
        self.scale = scale;
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }

    /// The cached composition matrix, rebuilt only when dirty.
    pub fn matrix(&mut self) -> Matrix4x4<T> {
        if self.needs_update {
            self.matrix_cache = self.create_matrix();
            self.needs_update = false;
        }
        self.matrix_cache
    }

    /// Builds translation * rotation * scale without touching the cache.
    pub fn create_matrix(&self) -> Matrix4x4<T> {
        Matrix4x4::from_position(self.position)
            * Matrix4x4::from_rotation(self.rotation)
            * Matrix4x4::from_scale(self.scale)
    }

    /// Pre-multiplies a rotation of `angle` about `axis`.
    pub fn rotate(&mut self, angle: Degrees<T>, axis: Direction3<T>) {
        self.set_rotation(Quaternion::from_degrees_axis(angle, axis) * self.rotation);
    }

    pub fn interpolated(self, to: Self, method: InterpolationMethod<T>) -> Self {
        Self::new(
            self.position.interpolated(to.position, method),
            self.rotation.interpolated(to.rotation, method),
            self.scale.interpolated(to.scale, method),
        )
    }

    pub fn interpolate(&mut self, to: Self, method: InterpolationMethod<T>) {
        *self = self.interpolated(to, method);
    }

    /// `self` relative to `removing`: position subtracted, rotation
    /// composed with the other's inverse. Scale stays at identity.
    pub fn difference(&self, removing: &Self) -> Self {
        let mut transform = Self::IDENTITY;
        transform.position = self.position - removing.position;
        transform.rotation = self.rotation * removing.rotation.inverse();
        transform
    }

    pub fn distance(&self, from: &Self) -> T {
        self.position.distance(from.position)
    }
}

impl<T: Scalar> Default for Transform3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// The cache is derived state and never participates in equality.
impl<T: Scalar> PartialEq for Transform3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.rotation == other.rotation
            && self.scale == other.scale
    }
}

impl<T: Scalar> core::ops::Add for Transform3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.position + rhs.position,
            (rhs.rotation * self.rotation).normalized(),
            self.scale + rhs.scale,
        )
    }
}

impl<T: Scalar> core::ops::AddAssign for Transform3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Flat ten-scalar encoding: position, then rotation w-first, then scale.
impl<T: Scalar> serde::Serialize for Transform3<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.w,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.scale.x,
            self.scale.y,
            self.scale.z,
        ]
        .serialize(serializer)
    }
}

impl<'de, T: Scalar> serde::Deserialize<'de> for Transform3<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <[T; 10]>::deserialize(deserializer)?;
        Ok(Self::new(
            Position3::new(values[0], values[1], values[2]),
            Quaternion::new(values[3], values[4], values[5], values[6]),
            Size3::from_extents(values[7], values[8], values[9]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Radians;

    #[test]
    fn test_matrix_is_cached_between_reads() {
        let mut transform = Transform3::new(
            Position3::new(1.0f32, 2.0, 3.0),
            Quaternion::from_angle_axis(Radians(0.5), Direction3::UP),
            Size3::ONE,
        );
        let first = transform.matrix();
        let second = transform.matrix();
        assert_eq!(first.to_array(), second.to_array());
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut transform = Transform3::<f32>::IDENTITY;
        let _ = transform.matrix();
        transform.set_position(Position3::new(5.0, 0.0, 0.0));
        let rebuilt = transform.matrix();
        assert_eq!(rebuilt.position(), Position3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_setting_equal_value_keeps_cache_clean() {
        let mut transform = Transform3::<f32>::IDENTITY;
        let before = transform.matrix();
        transform.set_position(Position3::ZERO);
        assert_eq!(transform.matrix().to_array(), before.to_array());
    }

    #[test]
    fn test_composition_order_is_trs() {
        let mut transform = Transform3::new(
            Position3::new(10.0f32, 0.0, 0.0),
            Quaternion::from_degrees_axis(Degrees(90.0), Direction3::UP),
            Size3::from_extents(2.0, 2.0, 2.0),
        );
        let matrix = transform.matrix();
        // Scale then rotate happens in local space; translation is
        // unaffected by either.
        assert_eq!(matrix.position(), Position3::new(10.0, 0.0, 0.0));
        let transformed = Position3::new(0.0, 0.0, -1.0) * matrix;
        assert!((transformed.x - 8.0).abs() < 1e-5);
        assert!(transformed.z.abs() < 1e-5);
    }

    #[test]
    fn test_difference_round_trip() {
        let a = Transform3::new(
            Position3::new(3.0f32, 1.0, 0.0),
            Quaternion::from_degrees_axis(Degrees(40.0), Direction3::UP),
            Size3::ONE,
        );
        let b = Transform3::new(
            Position3::new(1.0, 1.0, 0.0),
            Quaternion::from_degrees_axis(Degrees(10.0), Direction3::UP),
            Size3::ONE,
        );
        let difference = a.difference(&b);
        assert_eq!(difference.position(), Position3::new(2.0, 0.0, 0.0));
        let recomposed = difference.rotation() * b.rotation();
        let dot = recomposed.w * a.rotation().w
            + recomposed.x * a.rotation().x
            + recomposed.y * a.rotation().y
            + recomposed.z * a.rotation().z;
        assert!(dot.abs() > 0.99999);
    }

    #[test]
    fn test_accumulation_premultiplies_rotation() {
        let mut lhs = Transform3::new(
            Position3::new(1.0f32, 0.0, 0.0),
            Quaternion::from_degrees_axis(Degrees(30.0), Direction3::UP),
            Size3::ONE,
        );
        let rhs = Transform3::new(
            Position3::new(2.0, 0.0, 0.0),
            Quaternion::from_degrees_axis(Degrees(45.0), Direction3::RIGHT),
            Size3::ZERO,
        );
        let expected = (rhs.rotation() * lhs.rotation()).normalized();
        lhs += rhs;
        assert_eq!(lhs.position(), Position3::new(3.0, 0.0, 0.0));
        assert!((lhs.rotation().w - expected.w).abs() < 1e-6);
        assert!((lhs.rotation().x - expected.x).abs() < 1e-6);
    }
}
