//! Shared vector algebra
//!
//! The semantic component types (`Position*`, `Direction*`, `Size*`) have
//! identical layout per dimension but distinct roles and extra operations.
//! The common contract (component-wise arithmetic, dot/cross, magnitude,
//! guarded normalization, rounding, interpolation, the flat serde encoding
//! and the GPU layout impls) is generated once per dimension by the
//! macros below and invoked by each concrete type.
//!
//! Normalization is guarded: a zero-length value normalizes to itself
//! instead of producing NaN. The `fast-inv-sqrt` feature swaps the exact
//! square root for the bit-trick approximation without changing the
//! public signatures.

macro_rules! impl_vector2 {
    ($name:ident) => {
        impl<T: $crate::scalar::Scalar> $name<T> {
            pub const ZERO: Self = Self {
                x: T::ZERO,
                y: T::ZERO,
            };

            #[inline]
            pub const fn new(x: T, y: T) -> Self {
                Self { x, y }
            }

            /// Both components set to `value`.
            #[inline]
            pub const fn splat(value: T) -> Self {
                Self { x: value, y: value }
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.x.is_finite() && self.y.is_finite()
            }

            #[inline]
            pub fn squared_length(self) -> T {
                self.x * self.x + self.y * self.y
            }

            #[inline]
            pub fn magnitude(self) -> T {
                self.squared_length().sqrt()
            }

            #[inline]
            pub fn dot(self, other: Self) -> T {
                self.x * other.x + self.y * other.y
            }

            /// The z component of the 3D cross product of the two vectors
            /// lifted into the XY plane.
            #[inline]
            pub fn cross(self, other: Self) -> T {
                self.x * other.y - other.x * self.y
            }

            /// Unit-length copy. Zero-length input is returned unchanged
            /// rather than dividing into NaN.
            #[cfg(not(feature = "fast-inv-sqrt"))]
            #[inline]
            pub fn normalized(self) -> Self {
                let magnitude = self.magnitude();
                if magnitude == T::ZERO {
                    return self;
                }
                self / magnitude
            }

            /// Unit-length copy via the approximate inverse square root.
            #[cfg(feature = "fast-inv-sqrt")]
            #[inline]
            pub fn normalized(self) -> Self {
                let squared = self.squared_length();
                if squared == T::ZERO {
                    return self;
                }
                self * squared.fast_inverse_sqrt()
            }

            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Component-wise square root.
            #[inline]
            pub fn sqrt(self) -> Self {
                Self::new(self.x.sqrt(), self.y.sqrt())
            }

            #[inline]
            pub fn floor(self) -> Self {
                Self::new(self.x.floor(), self.y.floor())
            }
            #[inline]
            pub fn ceil(self) -> Self {
                Self::new(self.x.ceil(), self.y.ceil())
            }
            #[inline]
            pub fn round(self) -> Self {
                Self::new(self.x.round(), self.y.round())
            }
            #[inline]
            pub fn abs(self) -> Self {
                Self::new(self.x.abs(), self.y.abs())
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::new(self.x.min(other.x), self.y.min(other.y))
            }
            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::new(self.x.max(other.x), self.y.max(other.y))
            }

            #[inline]
            pub fn min_component(self) -> T {
                self.x.min(self.y)
            }
            #[inline]
            pub fn max_component(self) -> T {
                self.x.max(self.y)
            }

            /// Per-component linear blend.
            #[inline]
            pub fn interpolated(
                self,
                to: Self,
                method: $crate::interpolation::InterpolationMethod<T>,
            ) -> Self {
                Self::new(method.apply(self.x, to.x), method.apply(self.y, to.y))
            }

            #[inline]
            pub fn interpolate(
                &mut self,
                to: Self,
                method: $crate::interpolation::InterpolationMethod<T>,
            ) {
                *self = self.interpolated(to, method);
            }

            #[inline]
            pub fn to_array(self) -> [T; 2] {
                [self.x, self.y]
            }
        }

        impl<T: $crate::scalar::Scalar> From<[T; 2]> for $name<T> {
            #[inline]
            fn from(values: [T; 2]) -> Self {
                Self::new(values[0], values[1])
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Index<usize> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    0 => &self.x,
                    1 => &self.y,
                    _ => panic!("index {index} out of range 0..2"),
                }
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    0 => &mut self.x,
                    1 => &mut self.y,
                    _ => panic!("index {index} out of range 0..2"),
                }
            }
        }

        $crate::vector::impl_componentwise_ops!($name, x, y);
        $crate::vector::impl_flat_serde!($name, 2, x, y);
        $crate::vector::impl_gpu_layout!($name);
    };
}

macro_rules! impl_vector3 {
    ($name:ident) => {
        impl<T: $crate::scalar::Scalar> $name<T> {
            pub const ZERO: Self = Self {
                x: T::ZERO,
                y: T::ZERO,
                z: T::ZERO,
            };

            #[inline]
            pub const fn new(x: T, y: T, z: T) -> Self {
                Self { x, y, z }
            }

            /// All three components set to `value`.
            #[inline]
            pub const fn splat(value: T) -> Self {
                Self {
                    x: value,
                    y: value,
                    z: value,
                }
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
            }

            #[inline]
            pub fn squared_length(self) -> T {
                self.x * self.x + self.y * self.y + self.z * self.z
            }

            #[inline]
            pub fn magnitude(self) -> T {
                self.squared_length().sqrt()
            }

            #[inline]
            pub fn dot(self, other: Self) -> T {
                self.x * other.x + self.y * other.y + self.z * other.z
            }

            #[inline]
            pub fn cross(self, other: Self) -> Self {
                Self::new(
                    self.y * other.z - self.z * other.y,
                    self.z * other.x - self.x * other.z,
                    self.x * other.y - self.y * other.x,
                )
            }

            /// Unit-length copy. Zero-length input is returned unchanged
            /// rather than dividing into NaN.
            #[cfg(not(feature = "fast-inv-sqrt"))]
            #[inline]
            pub fn normalized(self) -> Self {
                let magnitude = self.magnitude();
                if magnitude == T::ZERO {
                    return self;
                }
                self / magnitude
            }

            /// Unit-length copy via the approximate inverse square root.
            #[cfg(feature = "fast-inv-sqrt")]
            #[inline]
            pub fn normalized(self) -> Self {
                let squared = self.squared_length();
                if squared == T::ZERO {
                    return self;
                }
                self * squared.fast_inverse_sqrt()
            }

            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Component-wise square root.
            #[inline]
            pub fn sqrt(self) -> Self {
                Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
            }

            #[inline]
            pub fn floor(self) -> Self {
                Self::new(self.x.floor(), self.y.floor(), self.z.floor())
            }
            #[inline]
            pub fn ceil(self) -> Self {
                Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
            }
            #[inline]
            pub fn round(self) -> Self {
                Self::new(self.x.round(), self.y.round(), self.z.round())
            }
            #[inline]
            pub fn abs(self) -> Self {
                Self::new(self.x.abs(), self.y.abs(), self.z.abs())
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::new(
                    self.x.min(other.x),
                    self.y.min(other.y),
                    self.z.min(other.z),
                )
            }
            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::new(
                    self.x.max(other.x),
                    self.y.max(other.y),
                    self.z.max(other.z),
                )
            }

            #[inline]
            pub fn min_component(self) -> T {
                self.x.min(self.y.min(self.z))
            }
            #[inline]
            pub fn max_component(self) -> T {
                self.x.max(self.y.max(self.z))
            }

            /// Per-component linear blend.
            #[inline]
            pub fn interpolated(
                self,
                to: Self,
                method: $crate::interpolation::InterpolationMethod<T>,
            ) -> Self {
                Self::new(
                    method.apply(self.x, to.x),
                    method.apply(self.y, to.y),
                    method.apply(self.z, to.z),
                )
            }

            #[inline]
            pub fn interpolate(
                &mut self,
                to: Self,
                method: $crate::interpolation::InterpolationMethod<T>,
            ) {
                *self = self.interpolated(to, method);
            }

            #[inline]
            pub fn to_array(self) -> [T; 3] {
                [self.x, self.y, self.z]
            }
        }

        impl<T: $crate::scalar::Scalar> From<[T; 3]> for $name<T> {
            #[inline]
            fn from(values: [T; 3]) -> Self {
                Self::new(values[0], values[1], values[2])
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Index<usize> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    0 => &self.x,
                    1 => &self.y,
                    2 => &self.z,
                    _ => panic!("index {index} out of range 0..3"),
                }
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    0 => &mut self.x,
                    1 => &mut self.y,
                    2 => &mut self.z,
                    _ => panic!("index {index} out of range 0..3"),
                }
            }
        }

        // Row-vector application: the vector runs against the matrix rows
        // and picks up the d/h/l translation column.
        impl<T: $crate::scalar::Scalar> core::ops::Mul<$crate::three::Matrix4x4<T>> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: $crate::three::Matrix4x4<T>) -> Self {
                Self::new(
                    self.x * rhs.a + self.y * rhs.b + self.z * rhs.c + rhs.d,
                    self.x * rhs.e + self.y * rhs.f + self.z * rhs.g + rhs.h,
                    self.x * rhs.i + self.y * rhs.j + self.z * rhs.k + rhs.l,
                )
            }
        }

        // Column-vector (pre-multiplied) application with the m/n/o
        // translation row. Deliberately not equivalent to the row form.
        impl<T: $crate::scalar::Scalar> core::ops::Mul<$name<T>> for $crate::three::Matrix4x4<T> {
            type Output = $name<T>;
            fn mul(self, rhs: $name<T>) -> $name<T> {
                $name::new(
                    rhs.x * self.a + rhs.y * self.e + rhs.z * self.i + self.m,
                    rhs.x * self.b + rhs.y * self.f + rhs.z * self.j + self.n,
                    rhs.x * self.c + rhs.y * self.g + rhs.z * self.k + self.o,
                )
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Mul<$crate::three::Matrix3x3<T>> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: $crate::three::Matrix3x3<T>) -> Self {
                Self::new(
                    self.x * rhs.a + self.y * rhs.e + self.z * rhs.i,
                    self.x * rhs.b + self.y * rhs.f + self.z * rhs.j,
                    self.x * rhs.c + self.y * rhs.g + self.z * rhs.k,
                )
            }
        }

        $crate::vector::impl_componentwise_ops!($name, x, y, z);
        $crate::vector::impl_flat_serde!($name, 3, x, y, z);
        $crate::vector::impl_gpu_layout!($name);
    };
}

/// Component-wise `+ - * /` against self and broadcast against a scalar,
/// with the assign forms and negation.
macro_rules! impl_componentwise_ops {
    ($name:ident, $($field:ident),+) => {
        impl<T: $crate::scalar::Scalar> core::ops::Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field *= rhs.$field;)+
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::Div for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::DivAssign for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$field /= rhs.$field;)+
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Add<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: T) -> Self {
                Self { $($field: self.$field + rhs),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::AddAssign<T> for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: T) {
                $(self.$field += rhs;)+
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::Sub<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: T) -> Self {
                Self { $($field: self.$field - rhs),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::SubAssign<T> for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: T) {
                $(self.$field -= rhs;)+
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field *= rhs;)+
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }
        impl<T: $crate::scalar::Scalar> core::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                $(self.$field /= rhs;)+
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

/// The order-fixed flat encoding: a plain sequence of components, the
/// on-disk/network contract for persisted scene data.
macro_rules! impl_flat_serde {
    ($name:ident, $count:literal, $($field:ident),+) => {
        impl<T: $crate::scalar::Scalar> serde::Serialize for $name<T> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                [$(self.$field),+].serialize(serializer)
            }
        }

        impl<'de, T: $crate::scalar::Scalar> serde::Deserialize<'de> for $name<T> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let values = <[T; $count]>::deserialize(deserializer)?;
                Ok(Self::from(values))
            }
        }
    };
}

/// `#[repr(C)]` structs of one float width have no padding, so they can be
/// cast straight into vertex/uniform buffers.
macro_rules! impl_gpu_layout {
    ($name:ident) => {
        unsafe impl<T: $crate::scalar::Scalar> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: $crate::scalar::Scalar> bytemuck::Pod for $name<T> {}
    };
}

pub(crate) use {
    impl_componentwise_ops, impl_flat_serde, impl_gpu_layout, impl_vector2, impl_vector3,
};
