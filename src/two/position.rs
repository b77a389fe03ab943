use crate::scalar::Scalar;
use crate::vector::impl_vector2;

/// A location in 2D space.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl_vector2!(Position2);

impl<T: Scalar> Position2<T> {
    /// Euclidean distance to `from`.
    #[inline]
    pub fn distance(self, from: Self) -> T {
        (self - from).magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Position2::new(0.0f32, 0.0);
        let b = Position2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_componentwise_ops() {
        let a = Position2::new(1.0f32, 2.0);
        let b = Position2::new(4.0, 6.0);
        assert_eq!(a + b, Position2::new(5.0, 8.0));
        assert_eq!(b - a, Position2::new(3.0, 4.0));
        assert_eq!(a * 2.0, Position2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Position2::new(2.0, 3.0));
    }
}
