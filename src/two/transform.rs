use crate::angle::Degrees;
use crate::interpolation::InterpolationMethod;
use crate::scalar::Scalar;
use crate::three::{Direction3, Matrix4x4, Quaternion, Size3};
use crate::two::{Position2, Size2};

/// Planar placement: a position, a rotation about Z in degrees, and a
/// per-axis scale, with the composed matrix cached behind a dirty flag
/// exactly like [`Transform3`](crate::three::Transform3).
#[derive(Copy, Clone, Debug)]
pub struct Transform2<T: Scalar> {
    position: Position2<T>,
    rotation: Degrees<T>,
    scale: Size2<T>,
    matrix_cache: Matrix4x4<T>,
    needs_update: bool,
}

impl<T: Scalar> Transform2<T> {
    pub const ZERO: Self = Self {
        position: Position2::ZERO,
        rotation: Degrees(T::ZERO),
        scale: Size2::ZERO,
        matrix_cache: Matrix4x4::IDENTITY,
        needs_update: true,
    };

    pub const IDENTITY: Self = Self {
        position: Position2::ZERO,
        rotation: Degrees(T::ZERO),
        scale: Size2::ONE,
        matrix_cache: Matrix4x4::IDENTITY,
        needs_update: true,
    };

    pub fn new(position: Position2<T>, rotation: Degrees<T>, scale: Size2<T>) -> Self {
        Self {
            position,
            rotation,
            scale,
            matrix_cache: Matrix4x4::IDENTITY,
            needs_update: true,
        }
    }

    #[inline]
    pub fn position(&self) -> Position2<T> {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> Degrees<T> {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> Size2<T> {
        self.scale
    }

    pub fn set_position(&mut self, position: Position2<T>) {
        debug_assert!(position.is_finite());
        if !self.needs_update && self.position != position {
            self.needs_update = true;
        }
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Degrees<T>) {
        debug_assert!(rotation.is_finite());
        if !self.needs_update && self.rotation != rotation {
            self.needs_update = true;
        }
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Size2<T>) {
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

    /// The composed translation * rotation * scale matrix, rebuilt only
    /// when a component changed since the last call.
    pub fn matrix(&mut self) -> Matrix4x4<T> {
        if self.needs_update {
            self.matrix_cache = self.create_matrix();
            self.needs_update = false;
        }
        self.matrix_cache
    }

    /// Builds the matrix without touching the cache.
    pub fn create_matrix(&self) -> Matrix4x4<T> {
        let position = Matrix4x4::from_position(crate::three::Position3::new(
            self.position.x,
            self.position.y,
            T::ZERO,
        ));
        let rotation =
            Matrix4x4::from_rotation(Quaternion::from_degrees_axis(self.rotation, Direction3::BACKWARD));
        let scale = Matrix4x4::from_scale(Size3::new(self.scale.x, self.scale.y, T::ONE));
        position * rotation * scale
    }

    pub fn interpolated(self, to: Self, method: InterpolationMethod<T>) -> Self {
        Self::new(
            self.position.interpolated(to.position, method),
            self.rotation.interpolated(to.rotation, method),
            self.scale.interpolated(to.scale, method),
        )
    }

    /// The offset that, added to `removing`, reproduces `self`. Scale is
    /// left at identity.
    pub fn difference(self, removing: Self) -> Self {
        let mut transform = Self::IDENTITY;
        transform.position = self.position - removing.position;
        transform.rotation = self.rotation - removing.rotation;
        transform
    }

    pub fn distance(&self, from: &Self) -> T {
        self.position.distance(from.position)
    }
}

impl<T: Scalar> Default for Transform2<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// The cache is derived state and never participates in equality.
impl<T: Scalar> PartialEq for Transform2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.rotation == other.rotation
            && self.scale == other.scale
    }
}

impl<T: Scalar> core::ops::Add for Transform2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.position + rhs.position,
            self.rotation + rhs.rotation,
            self.scale + rhs.scale,
        )
    }
}

impl<T: Scalar> core::ops::AddAssign for Transform2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Flat five-scalar encoding: px, py, rotation, sx, sy.
impl<T: Scalar> serde::Serialize for Transform2<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [
            self.position.x,
            self.position.y,
            self.rotation.0,
            self.scale.x,
            self.scale.y,
        ]
        .serialize(serializer)
    }
}

impl<'de, T: Scalar> serde::Deserialize<'de> for Transform2<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <[T; 5]>::deserialize(deserializer)?;
        Ok(Self::new(
            Position2::new(values[0], values[1]),
            Degrees(values[2]),
            Size2::new(values[3], values[4]),
        ))
    }
}
