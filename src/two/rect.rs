use serde::{Deserialize, Serialize};

use crate::interpolation::InterpolationMethod;
use crate::scalar::Scalar;
use crate::two::{Circle, Insets, Position2, Size2};

/// An axis-aligned rectangle. `position` is the top-left corner with +Y
/// growing downward, matching screen coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rect<T: Scalar> {
    pub position: Position2<T>,
    pub size: Size2<T>,
}

impl<T: Scalar> Rect<T> {
    pub const ZERO: Self = Self {
        position: Position2::ZERO,
        size: Size2::ZERO,
    };

    #[inline]
    pub const fn new(position: Position2<T>, size: Size2<T>) -> Self {
        Self { position, size }
    }

    #[inline]
    pub const fn from_extents(x: T, y: T, width: T, height: T) -> Self {
        Self {
            position: Position2::new(x, y),
            size: Size2::from_extents(width, height),
        }
    }

    #[inline]
    pub fn area(self) -> T {
        self.size.x * self.size.y
    }

    /// The left edge.
    #[inline]
    pub fn x(self) -> T {
        self.position.x
    }

    /// The top edge.
    #[inline]
    pub fn y(self) -> T {
        self.position.y
    }

    #[inline]
    pub fn width(self) -> T {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> T {
        self.size.y
    }

    /// The right edge.
    #[inline]
    pub fn max_x(self) -> T {
        self.position.x + self.size.x
    }

    /// The bottom edge.
    #[inline]
    pub fn max_y(self) -> T {
        self.position.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Position2<T> {
        Position2::new(
            self.position.x + self.size.x / T::TWO,
            self.position.y + self.size.y / T::TWO,
        )
    }

    #[inline]
    pub fn set_center(&mut self, center: Position2<T>) {
        self.position.x = center.x - self.size.x / T::TWO;
        self.position.y = center.y - self.size.y / T::TWO;
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.position.is_finite() && self.size.is_finite()
    }

    /// Edge-inclusive containment.
    pub fn contains(self, position: Position2<T>) -> bool {
        if position.x < self.x() || position.x > self.max_x() {
            return false;
        }
        if position.y < self.y() || position.y > self.max_y() {
            return false;
        }
        true
    }

    /// Edge-touching rectangles count as intersecting.
    pub fn intersects(self, other: Self) -> bool {
        let overlap_x = (self.x() - other.x()).abs() * T::TWO <= self.width() + other.width();
        let overlap_y = (self.y() - other.y()).abs() * T::TWO <= self.height() + other.height();
        overlap_x && overlap_y
    }

    /// Coarse test against the circle's bounding corners.
    pub fn intersects_circle(self, circle: Circle<T>) -> bool {
        let corners = [
            Position2::new(circle.center.x - circle.radius, circle.center.y - circle.radius),
            Position2::new(circle.center.x + circle.radius, circle.center.y - circle.radius),
            Position2::new(circle.center.x - circle.radius, circle.center.y + circle.radius),
            Position2::new(circle.center.x + circle.radius, circle.center.y + circle.radius),
        ];
        corners.into_iter().any(|corner| self.contains(corner))
    }

    /// Pushes an overlapping circle's center just outside the rect along
    /// the axes where it overlaps. Non-overlapping circles are unchanged.
    pub fn nearest_outside_position_from(self, circle: Circle<T>) -> Position2<T> {
        let mut position = circle.center;
        if self.intersects_circle(circle) {
            let center = self.center();
            if circle.center.x > center.x {
                position.x = circle.center.x + circle.radius + self.width() / T::TWO;
            } else if circle.center.x < center.x {
                position.x = circle.center.x - circle.radius - self.width() / T::TWO;
            }
            if circle.center.y > center.y {
                position.y = circle.center.y - circle.radius - self.height() / T::TWO;
            } else if circle.center.y < center.y {
                position.y = circle.center.y + circle.radius + self.height() / T::TWO;
            }
        }
        position
    }

    /// Shrinks each edge inward by the matching inset.
    pub fn inset(self, insets: Insets<T>) -> Self {
        let mut copy = self;
        copy.position.x += insets.leading;
        copy.position.y += insets.top;
        copy.size.x -= insets.leading + insets.trailing;
        copy.size.y -= insets.top + insets.bottom;
        copy
    }

    pub fn interpolated(self, to: Self, method: InterpolationMethod<T>) -> Self {
        Self {
            position: self.position.interpolated(to.position, method),
            size: self.size.interpolated(to.size, method),
        }
    }
}

impl<T: Scalar> core::ops::Mul<T> for Rect<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.position * rhs, self.size * rhs)
    }
}

impl<T: Scalar> core::ops::MulAssign<T> for Rect<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> core::ops::Div<T> for Rect<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.position / rhs, self.size / rhs)
    }
}

impl<T: Scalar> core::ops::DivAssign<T> for Rect<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
