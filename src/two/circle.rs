use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::two::Position2;

/// A circle described by its center and radius.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Circle<T: Scalar> {
    pub center: Position2<T>,
    pub radius: T,
}

impl<T: Scalar> Circle<T> {
    #[inline]
    pub const fn new(center: Position2<T>, radius: T) -> Self {
        Self { center, radius }
    }
}
