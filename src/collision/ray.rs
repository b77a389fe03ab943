use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::three::{Direction3, Position3};

/// A half-line: an origin and a unit direction.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Ray3D<T: Scalar> {
    pub origin: Position3<T>,
    pub direction: Direction3<T>,
}

impl<T: Scalar> Ray3D<T> {
    #[inline]
    pub fn new(origin: Position3<T>, direction: Direction3<T>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// The point `distance` units along the ray.
    #[inline]
    pub fn point_at(&self, distance: T) -> Position3<T> {
        self.origin.moved(distance, self.direction)
    }
}
