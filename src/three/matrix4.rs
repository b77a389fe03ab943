use crate::scalar::Scalar;
use crate::three::{Direction3, Matrix3x3, Position3, Quaternion, Size3, Transform3};

/// A dense row-major 4x4 matrix with elements labeled `a` through `p`:
///
/// ```text
/// a b c d
/// e f g h
/// i j k l
/// m n o p
/// ```
///
/// Translation lives in the fourth column (`d`, `h`, `l`). Transform
/// matrices compose as translation * rotation * scale.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: Scalar> {
    pub a: T, pub b: T, pub c: T, pub d: T,
    pub e: T, pub f: T, pub g: T, pub h: T,
    pub i: T, pub j: T, pub k: T, pub l: T,
    pub m: T, pub n: T, pub o: T, pub p: T,
}

impl<T: Scalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Matrix4x4<T> {
    pub const IDENTITY: Self = Self::new(
        T::ONE, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ONE,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        a: T, b: T, c: T, d: T,
        e: T, f: T, g: T, h: T,
        i: T, j: T, k: T, l: T,
        m: T, n: T, o: T, p: T,
    ) -> Self {
        Self {
            a, b, c, d,
            e, f, g, h,
            i, j, k, l,
            m, n, o, p,
        }
    }

    /// Every element set to `value`.
    pub const fn repeating(value: T) -> Self {
        Self::new(
            value, value, value, value,
            value, value, value, value,
            value, value, value, value,
            value, value, value, value,
        )
    }

    pub fn become_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    #[inline]
    pub fn row(&self, index: usize) -> [T; 4] {
        match index {
            0 => [self.a, self.b, self.c, self.d],
            1 => [self.e, self.f, self.g, self.h],
            2 => [self.i, self.j, self.k, self.l],
            3 => [self.m, self.n, self.o, self.p],
            _ => panic!("row index {index} out of range"),
        }
    }

    #[inline]
    pub fn column(&self, index: usize) -> [T; 4] {
        match index {
            0 => [self.a, self.e, self.i, self.m],
            1 => [self.b, self.f, self.j, self.n],
            2 => [self.c, self.g, self.k, self.o],
            3 => [self.d, self.h, self.l, self.p],
            _ => panic!("column index {index} out of range"),
        }
    }

    /// A pure translation matrix.
    pub const fn from_position(position: Position3<T>) -> Self {
        Self::new(
            T::ONE, T::ZERO, T::ZERO, position.x,
            T::ZERO, T::ONE, T::ZERO, position.y,
            T::ZERO, T::ZERO, T::ONE, position.z,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        )
    }

    /// A pure rotation matrix with the quaternion's right/up/forward
    /// basis vectors as its rows.
    pub fn from_rotation(quaternion: Quaternion<T>) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_rotation(quaternion);
        matrix
    }

    /// A rotation matrix assembled directly from basis vectors.
    pub const fn from_rotation_basis(
        forward: Direction3<T>,
        up: Direction3<T>,
        right: Direction3<T>,
    ) -> Self {
        Self::new(
            right.x, right.y, right.z, T::ZERO,
            up.x, up.y, up.z, T::ZERO,
            forward.x, forward.y, forward.z, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        )
    }

    /// A pure scale matrix.
    pub const fn from_scale(size: Size3<T>) -> Self {
        Self::new(
            size.x, T::ZERO, T::ZERO, T::ZERO,
            T::ZERO, size.y, T::ZERO, T::ZERO,
            T::ZERO, T::ZERO, size.z, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        )
    }

    /// Right-handed perspective projection. `field_of_view` is the full
    /// vertical angle in radians.
    pub fn perspective(field_of_view: T, aspect_ratio: T, near: T, far: T) -> Self {
        let tan_half_fov = (field_of_view / T::TWO).tan();
        let z_range = near - far;

        let a = T::ONE / (tan_half_fov * aspect_ratio);
        let f = T::ONE / tan_half_fov;
        let k = (-near - far) / z_range;
        let l = far * near * T::TWO / z_range;

        Self::new(
            a, T::ZERO, T::ZERO, T::ZERO,
            T::ZERO, f, T::ZERO, T::ZERO,
            T::ZERO, T::ZERO, k, l,
            T::ZERO, T::ZERO, T::ONE, T::ZERO,
        )
    }

    /// Orthographic projection over the given box.
    pub fn orthographic(top: T, left: T, bottom: T, right: T, near: T, far: T) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = -(far - near);

        Self::new(
            T::TWO / width, T::ZERO, T::ZERO, -(right + left) / width,
            T::ZERO, T::TWO / height, T::ZERO, -(top + bottom) / height,
            T::ZERO, T::ZERO, T::TWO / depth, -(far + near) / depth,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        )
    }

    /// The translation column.
    #[inline]
    pub fn position(&self) -> Position3<T> {
        Position3::new(self.d, self.h, self.l)
    }

    #[inline]
    pub fn set_position(&mut self, position: Position3<T>) {
        self.d = position.x;
        self.h = position.y;
        self.l = position.z;
    }

    /// Per-column magnitude of the upper-left 3x3 block.
    pub fn scale(&self) -> Size3<T> {
        let width = self.a * self.a + self.e * self.e + self.i * self.i;
        let height = self.b * self.b + self.f * self.f + self.j * self.j;
        let depth = self.c * self.c + self.g * self.g + self.k * self.k;
        Size3::from_extents(width.sqrt(), height.sqrt(), depth.sqrt())
    }

    /// Overwrites the diagonal only; any rotation in the upper-left
    /// block is left in place.
    #[inline]
    pub fn set_scale(&mut self, size: Size3<T>) {
        self.a = size.x;
        self.f = size.y;
        self.k = size.z;
    }

    /// The rotation recovered by dividing out scale and extracting a
    /// quaternion from the remaining orthonormal block.
    pub fn rotation(&self) -> Quaternion<T> {
        Quaternion::from_rotation_matrix4(self.rotation_matrix())
    }

    /// Writes the quaternion's basis into the upper-left 3x3 block,
    /// leaving translation untouched.
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

    /// The upper-left block with scale divided out, translation zeroed.
    pub fn rotation_matrix(&self) -> Self {
        let scale = self.scale();
        Self::new(
            self.a / scale.x, self.b / scale.y, self.c / scale.z, T::ZERO,
            self.e / scale.x, self.f / scale.y, self.g / scale.z, T::ZERO,
            self.i / scale.x, self.j / scale.y, self.k / scale.z, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, T::ZERO,
        )
    }

    /// A view matrix at this matrix's position facing `target`.
    pub fn looking_at(&self, target: Position3<T>) -> Self {
        let eye = self.position();
        let offset = eye - target;
        let z_axis = Direction3::new(offset.x, offset.y, offset.z).normalized();
        let x_axis = self.rotation().up().cross(z_axis);
        let y_axis = z_axis.cross(x_axis);

        let eye = Direction3::new(eye.x, eye.y, eye.z);
        Self::new(
            x_axis.x, x_axis.y, x_axis.z, -x_axis.dot(eye),
            y_axis.x, y_axis.y, y_axis.z, -y_axis.dot(eye),
            z_axis.x, z_axis.y, z_axis.z, -z_axis.dot(eye),
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        )
    }

    /// Decomposes into position, rotation and scale.
    pub fn transform(&self) -> Transform3<T> {
        Transform3::new(self.position(), self.rotation(), self.scale())
    }

    /// Closed-form adjugate inverse. A singular matrix trips a debug
    /// assertion; in release the zero determinant propagates non-finite
    /// values to the caller.
    pub fn inverse(&self) -> Self {
        let a = self.f * self.k * self.p - self.f * self.l * self.o - self.j * self.g * self.p
            + self.j * self.h * self.o
            + self.n * self.g * self.l
            - self.n * self.h * self.k;
        let b = -self.b * self.k * self.p + self.b * self.l * self.o + self.j * self.c * self.p
            - self.j * self.d * self.o
            - self.n * self.c * self.l
            + self.n * self.d * self.k;
        let c = self.b * self.g * self.p - self.b * self.h * self.o - self.f * self.c * self.p
            + self.f * self.d * self.o
            + self.n * self.c * self.h
            - self.n * self.d * self.g;
        let d = -self.b * self.g * self.l + self.b * self.h * self.k + self.f * self.c * self.l
            - self.f * self.d * self.k
            - self.j * self.c * self.h
            + self.j * self.d * self.g;

        let e = -self.e * self.k * self.p + self.e * self.l * self.o + self.i * self.g * self.p
            - self.i * self.h * self.o
            - self.m * self.g * self.l
            + self.m * self.h * self.k;
        let f = self.a * self.k * self.p - self.a * self.l * self.o - self.i * self.c * self.p
            + self.i * self.d * self.o
            + self.m * self.c * self.l
            - self.m * self.d * self.k;
        let g = -self.a * self.g * self.p + self.a * self.h * self.o + self.e * self.c * self.p
            - self.e * self.d * self.o
            - self.m * self.c * self.h
            + self.m * self.d * self.g;
        let h = self.a * self.g * self.l - self.a * self.h * self.k - self.e * self.c * self.l
            + self.e * self.d * self.k
            + self.i * self.c * self.h
            - self.i * self.d * self.g;

        let i = self.e * self.j * self.p - self.e * self.l * self.n - self.i * self.f * self.p
            + self.i * self.h * self.n
            + self.m * self.f * self.l
            - self.m * self.h * self.j;
        let j = -self.a * self.j * self.p + self.a * self.l * self.n + self.i * self.b * self.p
            - self.i * self.d * self.n
            - self.m * self.b * self.l
            + self.m * self.d * self.j;
        let k = self.a * self.f * self.p - self.a * self.h * self.n - self.e * self.b * self.p
            + self.e * self.d * self.n
            + self.m * self.b * self.h
            - self.m * self.d * self.f;
        let l = -self.a * self.f * self.l + self.a * self.h * self.j + self.e * self.b * self.l
            - self.e * self.d * self.j
            - self.i * self.b * self.h
            + self.i * self.d * self.f;

        let m = -self.e * self.j * self.o + self.e * self.k * self.n + self.i * self.f * self.o
            - self.i * self.g * self.n
            - self.m * self.f * self.k
            + self.m * self.g * self.j;
        let n = self.a * self.j * self.o - self.a * self.k * self.n - self.i * self.b * self.o
            + self.i * self.c * self.n
            + self.m * self.b * self.k
            - self.m * self.c * self.j;
        let o = -self.a * self.f * self.o + self.a * self.g * self.n + self.e * self.b * self.o
            - self.e * self.c * self.n
            - self.m * self.b * self.g
            + self.m * self.c * self.f;
        let p = self.a * self.f * self.k - self.a * self.g * self.j - self.e * self.b * self.k
            + self.e * self.c * self.j
            + self.i * self.b * self.g
            - self.i * self.c * self.f;

        let mut inv = Self::new(a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p);

        // First-row expansion against the first column of the adjugate.
        let mut det = self.a * inv.a + self.b * inv.e + self.c * inv.i + self.d * inv.m;
        debug_assert!(
            det != T::ZERO,
            "singular matrix has no inverse; for a perspective matrix check the near plane"
        );
        det = T::ONE / det;

        for index in 0..16 {
            inv[index] *= det;
        }
        inv
    }

    pub fn transposed(&self) -> Self {
        Self::new(
            self.a, self.e, self.i, self.m,
            self.b, self.f, self.j, self.n,
            self.c, self.g, self.k, self.o,
            self.d, self.h, self.l, self.p,
        )
    }

    /// Row-major contents.
    pub fn to_array(&self) -> [T; 16] {
        [
            self.a, self.b, self.c, self.d,
            self.e, self.f, self.g, self.h,
            self.i, self.j, self.k, self.l,
            self.m, self.n, self.o, self.p,
        ]
    }

    /// Column-major contents, the order GPU uniform buffers expect.
    pub fn to_transposed_array(&self) -> [T; 16] {
        [
            self.a, self.e, self.i, self.m,
            self.b, self.f, self.j, self.n,
            self.c, self.g, self.k, self.o,
            self.d, self.h, self.l, self.p,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().into_iter().all(|value| value.is_finite())
    }
}

impl<T: Scalar> From<[T; 16]> for Matrix4x4<T> {
    fn from(values: [T; 16]) -> Self {
        Self::new(
            values[0], values[1], values[2], values[3],
            values[4], values[5], values[6], values[7],
            values[8], values[9], values[10], values[11],
            values[12], values[13], values[14], values[15],
        )
    }
}

impl<T: Scalar> From<Matrix3x3<T>> for Matrix4x4<T> {
    /// Embeds a 3x3 linear matrix as the upper-left block of an
    /// otherwise-identity matrix.
    fn from(matrix: Matrix3x3<T>) -> Self {
        Self::new(
            matrix.a, matrix.b, matrix.c, T::ZERO,
            matrix.e, matrix.f, matrix.g, T::ZERO,
            matrix.i, matrix.j, matrix.k, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        )
    }
}

impl<T: Scalar> core::ops::Index<usize> for Matrix4x4<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            3 => &self.d,
            4 => &self.e,
            5 => &self.f,
            6 => &self.g,
            7 => &self.h,
            8 => &self.i,
            9 => &self.j,
            10 => &self.k,
            11 => &self.l,
            12 => &self.m,
            13 => &self.n,
            14 => &self.o,
            15 => &self.p,
            _ => panic!("index {index} out of range 0..16"),
        }
    }
}

impl<T: Scalar> core::ops::IndexMut<usize> for Matrix4x4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            2 => &mut self.c,
            3 => &mut self.d,
            4 => &mut self.e,
            5 => &mut self.f,
            6 => &mut self.g,
            7 => &mut self.h,
            8 => &mut self.i,
            9 => &mut self.j,
            10 => &mut self.k,
            11 => &mut self.l,
            12 => &mut self.m,
            13 => &mut self.n,
            14 => &mut self.o,
            15 => &mut self.p,
            _ => panic!("index {index} out of range 0..16"),
        }
    }
}

impl<T: Scalar> core::ops::Mul for Matrix4x4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.e + self.c * rhs.i + self.d * rhs.m,
            self.a * rhs.b + self.b * rhs.f + self.c * rhs.j + self.d * rhs.n,
            self.a * rhs.c + self.b * rhs.g + self.c * rhs.k + self.d * rhs.o,
            self.a * rhs.d + self.b * rhs.h + self.c * rhs.l + self.d * rhs.p,
            self.e * rhs.a + self.f * rhs.e + self.g * rhs.i + self.h * rhs.m,
            self.e * rhs.b + self.f * rhs.f + self.g * rhs.j + self.h * rhs.n,
            self.e * rhs.c + self.f * rhs.g + self.g * rhs.k + self.h * rhs.o,
            self.e * rhs.d + self.f * rhs.h + self.g * rhs.l + self.h * rhs.p,
            self.i * rhs.a + self.j * rhs.e + self.k * rhs.i + self.l * rhs.m,
            self.i * rhs.b + self.j * rhs.f + self.k * rhs.j + self.l * rhs.n,
            self.i * rhs.c + self.j * rhs.g + self.k * rhs.k + self.l * rhs.o,
            self.i * rhs.d + self.j * rhs.h + self.k * rhs.l + self.l * rhs.p,
            self.m * rhs.a + self.n * rhs.e + self.o * rhs.i + self.p * rhs.m,
            self.m * rhs.b + self.n * rhs.f + self.o * rhs.j + self.p * rhs.n,
            self.m * rhs.c + self.n * rhs.g + self.o * rhs.k + self.p * rhs.o,
            self.m * rhs.d + self.n * rhs.h + self.o * rhs.l + self.p * rhs.p,
        )
    }
}

impl<T: Scalar> core::ops::MulAssign for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Flat sixteen-scalar row-major encoding.
impl<T: Scalar> serde::Serialize for Matrix4x4<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

impl<'de, T: Scalar> serde::Deserialize<'de> for Matrix4x4<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <[T; 16]>::deserialize(deserializer)?;
        Ok(Self::from(values))
    }
}

unsafe impl<T: Scalar> bytemuck::Zeroable for Matrix4x4<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Matrix4x4<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_near(lhs: Matrix4x4<f32>, rhs: Matrix4x4<f32>, tolerance: f32) {
        for index in 0..16 {
            assert!(
                (lhs[index] - rhs[index]).abs() < tolerance,
                "element {index}: {} != {}",
                lhs[index],
                rhs[index]
            );
        }
    }

    #[test]
    fn test_identity_multiplication() {
        let matrix = Matrix4x4::from_position(Position3::new(1.0f32, 2.0, 3.0));
        assert_eq!(matrix * Matrix4x4::IDENTITY, matrix);
        assert_eq!(Matrix4x4::IDENTITY * matrix, matrix);
    }

    #[test]
    fn test_inverse_round_trip() {
        let matrix = Matrix4x4::from_position(Position3::new(3.0f32, -2.0, 5.0))
            * Matrix4x4::from_rotation(Quaternion::from_angle_axis(
                crate::angle::Radians(0.7),
                Direction3::UP,
            ))
            * Matrix4x4::from_scale(Size3::from_extents(2.0, 2.0, 2.0));
        assert_matrix_near(matrix * matrix.inverse(), Matrix4x4::IDENTITY, 1e-5);
    }

    #[test]
    fn test_position_round_trip() {
        let position = Position3::new(4.0f32, 5.0, 6.0);
        let matrix = Matrix4x4::from_position(position);
        assert_eq!(matrix.position(), position);
    }

    #[test]
    fn test_scale_decomposition() {
        let matrix = Matrix4x4::from_rotation(Quaternion::from_angle_axis(
            crate::angle::Radians(1.0f32),
            Direction3::UP,
        )) * Matrix4x4::from_scale(Size3::from_extents(2.0, 3.0, 4.0));
        let scale = matrix.scale();
        assert!((scale.x - 2.0).abs() < 1e-5);
        assert!((scale.y - 3.0).abs() < 1e-5);
        assert!((scale.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_transposed_round_trip() {
        let matrix = Matrix4x4::from_position(Position3::new(1.0f32, 2.0, 3.0));
        assert_eq!(matrix.transposed().transposed(), matrix);
    }
}
