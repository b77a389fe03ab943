//! 3D geometry
//!
//! The core of the crate: positions, directions and sizes sharing the
//! common vector contract, quaternion rotation algebra, dense 4x4/3x3
//! matrices with adjugate inversion and TRS decomposition, and the
//! cached-matrix `Transform3`.
//!
//! Composition order is fixed throughout. A transform matrix is built
//! as translation * rotation * scale, `a * b` applies `b` first, and
//! transform accumulation pre-multiplies the incoming rotation.

mod direction;
mod matrix3;
mod matrix4;
mod position;
mod quaternion;
mod size;
mod transform;

pub use direction::Direction3;
pub use matrix3::Matrix3x3;
pub use matrix4::Matrix4x4;
pub use position::Position3;
pub use quaternion::{LookAtConstraint, Quaternion};
pub use size::Size3;
pub use transform::Transform3;
