use crate::scalar::Scalar;
use crate::three::{Direction3, Matrix4x4, Quaternion};

/// A dense row-major 3x3 matrix. Elements keep the labels of the 4x4
/// block they come from: `a b c / e f g / i j k`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T: Scalar> {
    pub a: T, pub b: T, pub c: T,
    pub e: T, pub f: T, pub g: T,
    pub i: T, pub j: T, pub k: T,
}

impl<T: Scalar> Default for Matrix3x3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Matrix3x3<T> {
    pub const IDENTITY: Self = Self::new(
        T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ONE,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(a: T, b: T, c: T, e: T, f: T, g: T, i: T, j: T, k: T) -> Self {
        Self {
            a, b, c,
            e, f, g,
            i, j, k,
        }
    }

    /// An orthonormal basis whose third row is `direction`. Degenerate
    /// cross products fall back to the supplied axes.
    pub fn from_direction(
        direction: Direction3<T>,
        up: Direction3<T>,
        right: Direction3<T>,
    ) -> Self {
        // Normalization leaves a degenerate cross product at finite
        // zero, so the fallbacks key on length rather than finiteness.
        let x_axis = if direction == up {
            right
        } else {
            let crossed = up.cross(direction).normalized();
            if crossed.squared_length() > T::ZERO {
                crossed
            } else {
                direction
            }
        };

        let mut y_axis = direction.cross(x_axis).normalized();
        if y_axis.squared_length() == T::ZERO {
            y_axis = up;
        }

        Self::new(
            x_axis.x, x_axis.y, x_axis.z,
            y_axis.x, y_axis.y, y_axis.z,
            direction.x, direction.y, direction.z,
        )
    }

    pub fn rotation(&self) -> Quaternion<T> {
        Quaternion::from_rotation_matrix3(*self)
    }

    pub fn set_rotation(&mut self, quaternion: Quaternion<T>) {
        let w = quaternion.w;
        let x = quaternion.x;
        let y = quaternion.y;
        let z = quaternion.z;

        let fx = (x * z - w * y) * T::TWO;
        let fy = (y * z + w * x) * T::TWO;
        let fz = T::ONE - (x * x + y * y) * T::TWO;

        let ux = (x * y + w * z) * T::TWO;
        let uy = T::ONE - (x * x + z * z) * T::TWO;
        let uz = (y * z - w * x) * T::TWO;

        let rx = T::ONE - (y * y + z * z) * T::TWO;
        let ry = (x * y - w * z) * T::TWO;
        let rz = (x * z + w * y) * T::TWO;

        self.a = rx;
        self.b = ry;
        self.c = rz;
        self.e = ux;
        self.f = uy;
        self.g = uz;
        self.i = fx;
        self.j = fy;
        self.k = fz;
    }

    /// Row-major contents.
    pub fn to_array(&self) -> [T; 9] {
        [
            self.a, self.b, self.c,
            self.e, self.f, self.g,
            self.i, self.j, self.k,
        ]
    }

    pub fn to_transposed_array(&self) -> [T; 9] {
        [
            self.a, self.e, self.i,
            self.b, self.f, self.j,
            self.c, self.g, self.k,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().into_iter().all(|value| value.is_finite())
    }
}

impl<T: Scalar> From<Matrix4x4<T>> for Matrix3x3<T> {
    /// The upper-left 3x3 block.
    fn from(matrix: Matrix4x4<T>) -> Self {
        Self::new(
            matrix.a, matrix.b, matrix.c,
            matrix.e, matrix.f, matrix.g,
            matrix.i, matrix.j, matrix.k,
        )
    }
}

impl<T: Scalar> From<[T; 9]> for Matrix3x3<T> {
    fn from(values: [T; 9]) -> Self {
        Self::new(
            values[0], values[1], values[2],
            values[3], values[4], values[5],
            values[6], values[7], values[8],
        )
    }
}

impl<T: Scalar> core::ops::Index<usize> for Matrix3x3<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            3 => &self.e,
            4 => &self.f,
            5 => &self.g,
            6 => &self.i,
            7 => &self.j,
            8 => &self.k,
            _ => panic!("index {index} out of range 0..9"),
        }
    }
}

impl<T: Scalar> core::ops::IndexMut<usize> for Matrix3x3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            2 => &mut self.c,
            3 => &mut self.e,
            4 => &mut self.f,
            5 => &mut self.g,
            6 => &mut self.i,
            7 => &mut self.j,
            8 => &mut self.k,
            _ => panic!("index {index} out of range 0..9"),
        }
    }
}

impl<T: Scalar> core::ops::Mul for Matrix3x3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.e + self.c * rhs.i,
            self.a * rhs.b + self.b * rhs.f + self.c * rhs.j,
            self.a * rhs.c + self.b * rhs.g + self.c * rhs.k,
            self.e * rhs.a + self.f * rhs.e + self.g * rhs.i,
            self.e * rhs.b + self.f * rhs.f + self.g * rhs.j,
            self.e * rhs.c + self.f * rhs.g + self.g * rhs.k,
            self.i * rhs.a + self.j * rhs.e + self.k * rhs.i,
            self.i * rhs.b + self.j * rhs.f + self.k * rhs.j,
            self.i * rhs.c + self.j * rhs.g + self.k * rhs.k,
        )
    }
}

impl<T: Scalar> core::ops::MulAssign for Matrix3x3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Flat nine-scalar row-major encoding.
impl<T: Scalar> serde::Serialize for Matrix3x3<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

impl<'de, T: Scalar> serde::Deserialize<'de> for Matrix3x3<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <[T; 9]>::deserialize(deserializer)?;
        Ok(Self::from(values))
    }
}

unsafe impl<T: Scalar> bytemuck::Zeroable for Matrix3x3<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Matrix3x3<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_direction_is_orthonormal() {
        let direction = Direction3::new(0.3f32, -0.2, -0.9).normalized();
        let matrix = Matrix3x3::from_direction(direction, Direction3::UP, Direction3::RIGHT);
        let x_axis = Direction3::new(matrix.a, matrix.b, matrix.c);
        let y_axis = Direction3::new(matrix.e, matrix.f, matrix.g);
        let z_axis = Direction3::new(matrix.i, matrix.j, matrix.k);
        assert!((x_axis.magnitude() - 1.0).abs() < 1e-5);
        assert!((y_axis.magnitude() - 1.0).abs() < 1e-5);
        assert!((z_axis.magnitude() - 1.0).abs() < 1e-5);
        assert!(x_axis.dot(y_axis).abs() < 1e-5);
        assert!(y_axis.dot(z_axis).abs() < 1e-5);
    }

    #[test]
    fn test_from_direction_antiparallel_up_keeps_nonzero_rows() {
        // up x direction vanishes here; the fallbacks must kick in
        // instead of collapsing rows to zero.
        let matrix =
            Matrix3x3::from_direction(Direction3::<f32>::DOWN, Direction3::UP, Direction3::RIGHT);
        let x_axis = Direction3::new(matrix.a, matrix.b, matrix.c);
        let y_axis = Direction3::new(matrix.e, matrix.f, matrix.g);
        assert!(x_axis.squared_length() > 0.0);
        assert!(y_axis.squared_length() > 0.0);
        assert!(matrix.is_finite());
    }

    #[test]
    fn test_rotation_round_trip() {
        let rotation = Quaternion::from_angle_axis(
            crate::angle::Radians(0.8f32),
            Direction3::new(1.0, 1.0, 0.0).normalized(),
        );
        let mut matrix = Matrix3x3::IDENTITY;
        matrix.set_rotation(rotation);
        let recovered = matrix.rotation();
        let dot = rotation.w * recovered.w
            + rotation.x * recovered.x
            + rotation.y * recovered.y
            + rotation.z * recovered.z;
        assert!(dot.abs() > 0.9999);
    }
}
