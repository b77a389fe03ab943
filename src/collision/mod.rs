//! Collision primitives
//!
//! The [`Collider3D`] trait is the contract between the geometry layer
//! and gameplay code: convex shapes answer closest-point, penetration,
//! and ray queries, and derive surface classification from the result
//! normals. Sphere and axis-aligned box shapes are provided; anything
//! convex can join by implementing the trait.
//!
//! Query misses are `None`, never an error. Overlap is reported as an
//! [`Interpenetration3D`] whose depth is negative while the shapes
//! intersect.

mod aabb;
mod collider;
mod ray;
mod sphere;

pub use aabb::AabbCollider3D;
pub use collider::{
    Collider3D, Interpenetration3D, Surface3D, SurfaceImpact3D, SurfaceType,
};
pub use ray::Ray3D;
pub use sphere::SphereCollider3D;
