//! Kinemath Geometry Library
//!
//! A 2D/3D geometry and linear-algebra toolkit for real-time games:
//! vectors, points, directions, sizes, angles, quaternions, 4x4/3x3
//! matrices, cached rigid transforms, and a convex collision-primitive
//! contract. Rendering and simulation code builds on these for
//! predictable numeric behavior rather than novel algorithms.
//!
//! Everything is generic over the scalar width through the [`Scalar`]
//! trait, implemented for `f32` and `f64`. All types are plain values
//! with copy semantics; the only hidden state is the per-transform
//! matrix cache, which copies along with its owner.
//!
//! # Modules
//!
//! - [`angle`] - `Degrees`/`Radians` with wrap-around normalization and shortest-path deltas
//! - [`two`] - planar positions, directions, sizes, rects and `Transform2`
//! - [`three`] - 3D vector types, `Quaternion`, `Matrix4x4`/`Matrix3x3`, `Transform3`
//! - [`collision`] - the `Collider3D` contract with sphere and box shapes
//!
//! # Example
//!
//! ```ignore
//! use kinemath::{
//!     Degrees, Direction3, InterpolationMethod, Position3, Quaternion, Size3, Transform3,
//! };
//!
//! let mut transform: Transform3<f32> = Transform3::IDENTITY;
//! transform.set_position(Position3::new(0.0, 1.0, -5.0));
//! transform.rotate(Degrees(90.0), Direction3::UP);
//!
//! // The composed matrix is cached until the next mutation.
//! let model = transform.matrix();
//!
//! let target = Transform3::new(
//!     Position3::new(4.0, 1.0, -5.0),
//!     Quaternion::IDENTITY,
//!     Size3::ONE,
//! );
//! let halfway = transform.interpolated(target, InterpolationMethod::linear(0.5));
//! ```

pub mod angle;
pub mod collision;
pub mod interpolation;
pub mod scalar;
pub mod three;
pub mod two;

pub(crate) mod vector;

pub use angle::{Degrees, Radians};
pub use collision::{
    AabbCollider3D, Collider3D, Interpenetration3D, Ray3D, SphereCollider3D, Surface3D,
    SurfaceImpact3D, SurfaceType,
};
pub use interpolation::InterpolationMethod;
pub use scalar::Scalar;
pub use three::{
    Direction3, LookAtConstraint, Matrix3x3, Matrix4x4, Position3, Quaternion, Size3, Transform3,
};
pub use two::{Circle, Direction2, Insets, Position2, Rect, Size2, Transform2};

// Vector and matrix types are cast directly into GPU buffers; their
// layout must stay a bare array of scalars.
static_assertions::assert_eq_size!(Position3<f32>, [f32; 3]);
static_assertions::assert_eq_size!(Direction3<f32>, [f32; 3]);
static_assertions::assert_eq_size!(Size3<f32>, [f32; 3]);
static_assertions::assert_eq_size!(Position2<f32>, [f32; 2]);
static_assertions::assert_eq_size!(Quaternion<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Matrix4x4<f32>, [f32; 16]);
static_assertions::assert_eq_size!(Matrix3x3<f32>, [f32; 9]);
static_assertions::assert_eq_size!(Position3<f64>, [f64; 3]);
static_assertions::assert_eq_size!(Matrix4x4<f64>, [f64; 16]);
