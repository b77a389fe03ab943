//! 2D geometry
//!
//! Screen-space and gameplay-plane types. `Position2`, `Direction2` and
//! `Size2` share the common vector contract; `Rect`, `Insets` and `Circle`
//! are plain value aggregates on top of them, and `Transform2` is the
//! planar counterpart of `Transform3` with a degree rotation about Z.

mod circle;
mod direction;
mod insets;
mod position;
mod rect;
mod size;
mod transform;

pub use circle::Circle;
pub use direction::Direction2;
pub use insets::Insets;
pub use position::Position2;
pub use rect::Rect;
pub use size::Size2;
pub use transform::Transform2;
