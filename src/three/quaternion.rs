use crate::angle::{Degrees, Radians};
use crate::interpolation::InterpolationMethod;
use crate::scalar::Scalar;
use crate::three::{Direction3, Matrix3x3, Matrix4x4, Position3};
use crate::two::Direction2;

/// Limits a look-at rotation to specific Euler axes, for aiming without
/// introducing roll.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LookAtConstraint {
    #[default]
    None,
    JustYaw,
    JustPitch,
    PitchAndYaw,
}

/// A rotation stored as a unit hypercomplex number.
///
/// Every construction helper yields magnitude ≈ 1; composition and
/// interpolation renormalize rather than trusting accumulated products.
/// `q1 * q2` is the Hamilton product and applies `q2` first.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion<T: Scalar> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Quaternion<T> {
    pub const IDENTITY: Self = Self {
        w: T::ONE,
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` about `axis` via the half-angle formula.
    pub fn from_angle_axis(angle: Radians<T>, axis: Direction3<T>) -> Self {
        let sin_half = (angle.0 / T::TWO).sin();
        let cos_half = (angle.0 / T::TWO).cos();
        Self::new(cos_half, axis.x * sin_half, axis.y * sin_half, axis.z * sin_half)
    }

    pub fn from_degrees_axis(angle: Degrees<T>, axis: Direction3<T>) -> Self {
        Self::from_angle_axis(angle.into(), axis)
    }

    /// The shortest rotation carrying `from` onto `to`. Antiparallel
    /// inputs rotate half a turn about an arbitrary orthogonal axis.
    pub fn between(from: Direction3<T>, to: Direction3<T>) -> Self {
        let cos_theta = from.dot(to);
        let k = (from.squared_length() * to.squared_length()).sqrt();

        if cos_theta / k == T::NEG_ONE {
            return Self::from_angle_axis(Radians(T::PI), from.orthogonal().normalized());
        }

        let axis = from.cross(to);
        Self::new(cos_theta + k, axis.x, axis.y, axis.z).normalized()
    }

    /// Yaw about up, then pitch about right, then roll about forward.
    pub fn from_euler(pitch: Degrees<T>, yaw: Degrees<T>, roll: Degrees<T>) -> Self {
        Self::from_degrees_axis(yaw, Direction3::UP)
            * Self::from_degrees_axis(pitch, Direction3::RIGHT)
            * Self::from_degrees_axis(roll, Direction3::FORWARD)
    }

    /// Extraction from a rotation-only 4x4 matrix.
    ///
    /// The matrix stores the rotated basis vectors as rows, so the
    /// elements transpose on the way into the column-vector extraction
    /// formula. Feeding the rows directly would recover the conjugate.
    pub fn from_rotation_matrix4(matrix: Matrix4x4<T>) -> Self {
        Self::extract_rotation(
            matrix.a, matrix.e, matrix.i,
            matrix.b, matrix.f, matrix.j,
            matrix.c, matrix.g, matrix.k,
        )
    }

    pub fn from_rotation_matrix3(matrix: Matrix3x3<T>) -> Self {
        Self::extract_rotation(
            matrix.a, matrix.e, matrix.i,
            matrix.b, matrix.f, matrix.j,
            matrix.c, matrix.g, matrix.k,
        )
    }

    // Trace-based extraction. When the trace is non-positive the branch
    // follows the largest diagonal element, which keeps the divisor away
    // from zero near singular orientations.
    #[allow(clippy::too_many_arguments)]
    fn extract_rotation(a: T, b: T, c: T, e: T, f: T, g: T, i: T, j: T, k: T) -> Self {
        let quarter = T::HALF * T::HALF;
        let trace = a + f + k;

        let raw = if trace > T::ZERO {
            let s = T::HALF / (trace + T::ONE).sqrt();
            Self::new(quarter / s, (g - j) * s, (i - c) * s, (b - e) * s)
        } else if a > f && a > k {
            let s = T::TWO * (T::ONE + a - f - k).sqrt();
            Self::new((g - j) / s, quarter * s, (e + b) / s, (i + c) / s)
        } else if f > k {
            let s = T::TWO * (T::ONE + f - a - k).sqrt();
            Self::new((i - c) / s, (e + b) / s, quarter * s, (j + g) / s)
        } else {
            let s = T::TWO * (T::ONE + k - a - f).sqrt();
            Self::new((b - e) / s, (i + c) / s, (g + j) / s, quarter * s)
        };
        raw.normalized()
    }

    /// Orientation whose forward axis is `direction`.
    pub fn from_direction(
        direction: Direction3<T>,
        up: Direction3<T>,
        right: Direction3<T>,
    ) -> Self {
        Matrix3x3::from_direction(direction.normalized(), up, right)
            .rotation()
            .normalized()
    }

    /// Orientation facing `direction`, optionally constrained to yaw
    /// and/or pitch. `is_camera` flips the heading conventions for view
    /// rotations.
    pub fn from_direction_constrained(
        direction: Direction3<T>,
        up: Direction3<T>,
        right: Direction3<T>,
        constraint: LookAtConstraint,
        is_camera: bool,
    ) -> Self {
        match constraint {
            LookAtConstraint::None => Self::from_direction(direction, up, right),
            LookAtConstraint::JustPitch => {
                let magnitude = Direction2::new(direction.x, direction.z).magnitude();
                let pitch = direction.y.atan2(magnitude);
                if is_camera {
                    Self::from_angle_axis(Radians(pitch), right)
                } else {
                    Self::from_angle_axis(Radians(-pitch), right)
                }
            }
            LookAtConstraint::JustYaw => {
                let mut rotation = Self::from_angle_axis(direction.angle_around_y(), up);
                if is_camera {
                    rotation = rotation * Self::from_degrees_axis(Degrees(T::from_f64(180.0)), Direction3::UP);
                }
                rotation
            }
            LookAtConstraint::PitchAndYaw => {
                Self::from_direction_constrained(direction, up, right, LookAtConstraint::JustYaw, is_camera)
                    * Self::from_direction_constrained(
                        direction,
                        up,
                        right,
                        LookAtConstraint::JustPitch,
                        is_camera,
                    )
            }
        }
    }

    /// Orientation at `source` facing `target`.
    pub fn looking_at(
        target: Position3<T>,
        source: Position3<T>,
        up: Direction3<T>,
        right: Direction3<T>,
        constraint: LookAtConstraint,
        is_camera: bool,
    ) -> Self {
        Self::from_direction_constrained(
            Direction3::from_points(source, target),
            up,
            right,
            constraint,
            is_camera,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn squared_length(self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn magnitude(self) -> T {
        self.squared_length().sqrt()
    }

    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        Self::new(
            self.w / magnitude,
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
        )
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// `conjugate / squaredLength`; equal to the conjugate for unit
    /// quaternions.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.squared_length()
    }

    /// The imaginary part as a direction.
    #[inline]
    pub fn direction(self) -> Direction3<T> {
        Direction3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn forward(self) -> Direction3<T> {
        self.rotate(Direction3::FORWARD)
    }
    #[inline]
    pub fn backward(self) -> Direction3<T> {
        self.rotate(Direction3::BACKWARD)
    }
    #[inline]
    pub fn up(self) -> Direction3<T> {
        self.rotate(Direction3::UP)
    }
    #[inline]
    pub fn down(self) -> Direction3<T> {
        self.rotate(Direction3::DOWN)
    }
    #[inline]
    pub fn left(self) -> Direction3<T> {
        self.rotate(Direction3::LEFT)
    }
    #[inline]
    pub fn right(self) -> Direction3<T> {
        self.rotate(Direction3::RIGHT)
    }

    /// The sandwich product `q * v * conjugate(q)`.
    pub fn rotate(self, vector: Direction3<T>) -> Direction3<T> {
        let conjugate = self.normalized().conjugate();
        (self * vector * conjugate).direction()
    }

    /// `shortest: true` routes through slerp, otherwise a component
    /// lerp with renormalization.
    pub fn interpolated(self, to: Self, method: InterpolationMethod<T>) -> Self {
        match method {
            InterpolationMethod::Linear { factor, shortest } => {
                if shortest {
                    self.slerped(to, factor)
                } else {
                    self.lerped(to, factor)
                }
            }
        }
    }

    pub fn interpolate(&mut self, to: Self, method: InterpolationMethod<T>) {
        *self = self.interpolated(to, method);
    }

    fn lerped(self, to: Self, factor: T) -> Self {
        let remainder = T::ONE - factor;
        Self::new(
            remainder * self.w + factor * to.w,
            remainder * self.x + factor * to.x,
            remainder * self.y + factor * to.y,
            remainder * self.z + factor * to.z,
        )
        .normalized()
    }

    fn slerped(self, to: Self, factor: T) -> Self {
        let mut to = to;
        let mut cos_half_theta =
            self.w * to.w + self.x * to.x + self.y * to.y + self.z * to.z;
        // Take the short arc.
        if cos_half_theta < T::ZERO {
            to = Self::new(-to.w, -to.x, -to.y, -to.z);
            cos_half_theta = -cos_half_theta;
        }
        // Coincident or opposite orientations interpolate to self.
        if cos_half_theta.abs() >= T::ONE {
            return self;
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (T::ONE - cos_half_theta * cos_half_theta).sqrt();
        // Half a turn apart: any normal axis works, blend components.
        if sin_half_theta.abs() < T::from_f64(0.001) {
            return Self::new(
                self.w * T::HALF + to.w * T::HALF,
                self.x * T::HALF + to.x * T::HALF,
                self.y * T::HALF + to.y * T::HALF,
                self.z * T::HALF + to.z * T::HALF,
            );
        }

        let ratio_a = ((T::ONE - factor) * half_theta).sin() / sin_half_theta;
        let ratio_b = (factor * half_theta).sin() / sin_half_theta;
        Self::new(
            self.w * ratio_a + to.w * ratio_b,
            self.x * ratio_a + to.x * ratio_b,
            self.y * ratio_a + to.y * ratio_b,
            self.z * ratio_a + to.z * ratio_b,
        )
    }
}

impl<T: Scalar> core::ops::Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.x * rhs.w + self.w * rhs.x + self.y * rhs.z - self.z * rhs.y,
            self.y * rhs.w + self.w * rhs.y + self.z * rhs.x - self.x * rhs.z,
            self.z * rhs.w + self.w * rhs.z + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> core::ops::MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Lifts the vector into the imaginary part; half of a sandwich product.
impl<T: Scalar> core::ops::Mul<Direction3<T>> for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Direction3<T>) -> Self {
        Self::new(
            -self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

/// The 2D lift: the vector is treated as lying in the XY plane.
impl<T: Scalar> core::ops::Mul<Direction2<T>> for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Direction2<T>) -> Self {
        Self::new(
            -self.x * rhs.x - self.y * rhs.y,
            self.w * rhs.x - self.z * rhs.y,
            self.w * rhs.y + self.z * rhs.x,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> core::ops::Mul<T> for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> core::ops::Div<T> for Quaternion<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> core::ops::Add for Quaternion<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl<T: Scalar> core::ops::Sub for Quaternion<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

// Flat four-scalar encoding, w first.
impl<T: Scalar> serde::Serialize for Quaternion<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.w, self.x, self.y, self.z].serialize(serializer)
    }
}

impl<'de, T: Scalar> serde::Deserialize<'de> for Quaternion<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <[T; 4]>::deserialize(deserializer)?;
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

unsafe impl<T: Scalar> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Quaternion<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_direction_near(lhs: Direction3<f32>, rhs: Direction3<f32>, tolerance: f32) {
        assert!((lhs.x - rhs.x).abs() < tolerance, "{lhs:?} != {rhs:?}");
        assert!((lhs.y - rhs.y).abs() < tolerance, "{lhs:?} != {rhs:?}");
        assert!((lhs.z - rhs.z).abs() < tolerance, "{lhs:?} != {rhs:?}");
    }

    #[test]
    fn test_from_angle_axis_is_unit() {
        let rotation = Quaternion::from_angle_axis(Radians(1.3f32), Direction3::UP);
        assert!((rotation.magnitude() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quarter_turn_about_up() {
        let rotation = Quaternion::from_degrees_axis(Degrees(90.0f32), Direction3::UP);
        let rotated = rotation.rotate(Direction3::FORWARD);
        assert_direction_near(rotated, Direction3::LEFT, 1e-6);
    }

    #[test]
    fn test_between_recovers_rotation() {
        let from = Direction3::<f32>::FORWARD;
        let to = Direction3::new(1.0, 0.0, -1.0).normalized();
        let rotation = Quaternion::between(from, to);
        assert_direction_near(rotation.rotate(from), to, 1e-5);
    }

    #[test]
    fn test_between_antiparallel() {
        let rotation = Quaternion::between(Direction3::<f32>::UP, Direction3::DOWN);
        assert!(rotation.is_finite());
        assert_direction_near(rotation.rotate(Direction3::UP), Direction3::DOWN, 1e-5);
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let rotation = Quaternion::from_euler(Degrees(30.0f32), Degrees(45.0), Degrees(10.0));
        let vector = Direction3::new(0.2, 0.5, -0.8).normalized();
        let round_trip = rotation.inverse().rotate(rotation.rotate(vector));
        assert_direction_near(round_trip, vector, 1e-5);
    }

    #[test]
    fn test_matrix_extraction_round_trip() {
        let rotation = Quaternion::from_angle_axis(
            Radians(2.5f32),
            Direction3::new(1.0, -2.0, 0.5).normalized(),
        );
        let matrix = Matrix4x4::from_rotation(rotation);
        let recovered = Quaternion::from_rotation_matrix4(matrix);
        let dot = rotation.w * recovered.w
            + rotation.x * recovered.x
            + rotation.y * recovered.y
            + rotation.z * recovered.z;
        // q and -q encode the same rotation.
        assert!(dot.abs() > 0.99999);
    }

    #[test]
    fn test_slerp_self_is_stable() {
        let rotation = Quaternion::from_angle_axis(Radians(0.9f32), Direction3::UP);
        let midpoint = rotation.interpolated(rotation, InterpolationMethod::linear(0.5));
        assert!((midpoint.w - rotation.w).abs() < 1e-6);
        assert!((midpoint.x - rotation.x).abs() < 1e-6);
        assert!((midpoint.y - rotation.y).abs() < 1e-6);
        assert!((midpoint.z - rotation.z).abs() < 1e-6);
    }

    #[test]
    fn test_slerp_takes_short_arc() {
        let from = Quaternion::from_degrees_axis(Degrees(10.0f32), Direction3::UP);
        let to = Quaternion::from_degrees_axis(Degrees(350.0f32), Direction3::UP);
        let midpoint = from.interpolated(to, InterpolationMethod::linear(0.5));
        let rotated = midpoint.rotate(Direction3::FORWARD);
        // The short arc passes through 0 degrees, not 180.
        assert!(rotated.z < -0.9);
    }

    #[test]
    fn test_composition_order() {
        let q1 = Quaternion::from_degrees_axis(Degrees(35.0f32), Direction3::UP);
        let q2 = Quaternion::from_degrees_axis(Degrees(70.0f32), Direction3::RIGHT);
        let vector = Direction3::new(0.3, -0.4, 0.5).normalized();
        let composed = (q1 * q2).rotate(vector);
        let sequential = q1.rotate(q2.rotate(vector));
        assert_direction_near(composed, sequential, 1e-5);
    }
}
