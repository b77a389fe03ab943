use crate::angle::Radians;
use crate::collision::Ray3D;
use crate::scalar::Scalar;
use crate::three::{Direction3, Position3, Transform3};

/// The query contract implemented by convex collision shapes.
///
/// `center` is the shape's world centroid and `offset` the translation
/// from the owning node's centroid to it; `position` is their sum.
/// Shapes are kept in world space by feeding them the owner's transform
/// through [`update`](Collider3D::update).
pub trait Collider3D<T: Scalar> {
    fn center(&self) -> Position3<T>;

    /// The translation difference from node centroid to geometry centroid.
    fn offset(&self) -> Position3<T>;

    fn position(&self) -> Position3<T> {
        self.center() + self.offset()
    }

    /// Moves and resizes the shape to follow `transform`.
    fn update(&mut self, transform: &Transform3<T>);

    /// The point on the shape's surface nearest to `point`.
    fn closest_surface_point(&self, point: Position3<T>) -> Position3<T>;

    /// Overlap state against another collider, `None` when separated.
    fn interpenetration(&self, collider: &dyn Collider3D<T>) -> Option<Interpenetration3D<T>>;

    /// Where `ray` first hits the surface, `None` on a miss.
    fn surface_point(&self, ray: &Ray3D<T>) -> Option<Position3<T>>;

    /// The outward normal of the face nearest `point`.
    fn surface_normal(&self, facing: Position3<T>) -> Direction3<T>;

    /// Surface hit with its normal, chaining `surface_point` and
    /// `surface_normal`.
    fn surface_impact(&self, ray: &Ray3D<T>) -> Option<SurfaceImpact3D<T>> {
        let position = self.surface_point(ray)?;
        Some(SurfaceImpact3D {
            normal: self.surface_normal(position),
            position,
        })
    }
}

/// The overlap between two colliding shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpenetration3D<T: Scalar> {
    /// Signed separation along `direction`; negative while overlapping.
    pub depth: T,
    /// The direction to push along to separate the shapes.
    pub direction: Direction3<T>,
    /// Contact points contributing to the overlap.
    pub points: Vec<Position3<T>>,
}

impl<T: Scalar> Interpenetration3D<T> {
    pub fn new(depth: T, direction: Direction3<T>, points: Vec<Position3<T>>) -> Self {
        Self {
            depth,
            direction,
            points,
        }
    }

    /// True when the shapes genuinely overlap, past a small tolerance
    /// that absorbs floating-point contact jitter.
    pub fn is_colliding(&self) -> bool {
        self.depth < T::from_f64(-0.0001) && self.direction.is_finite() && self.depth.is_finite()
    }

    /// True when every field is usable: finite depth and direction and
    /// a non-empty, fully finite point set.
    pub fn is_valid(&self) -> bool {
        self.depth.is_finite()
            && self.direction.is_finite()
            && !self.points.is_empty()
            && self.points.iter().all(|point| point.is_finite())
    }
}

/// A ray hit: where the surface was struck and its outward normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceImpact3D<T: Scalar> {
    pub normal: Direction3<T>,
    pub position: Position3<T>,
}

impl<T: Scalar> Surface3D<T> for SurfaceImpact3D<T> {
    fn normal(&self) -> Direction3<T> {
        self.normal
    }
}

/// Walkability classes derived from a surface normal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Wall,
    Ceiling,
    Ramp,
    Floor,
}

impl SurfaceType {
    /// True if an object can rest on this surface type.
    pub fn is_walkable(self) -> bool {
        matches!(self, SurfaceType::Floor | SurfaceType::Ramp)
    }
}

/// Anything with an outward normal can be classified against world-up.
pub trait Surface3D<T: Scalar> {
    fn normal(&self) -> Direction3<T>;

    /// Classification by the angle between the normal and world-up.
    /// The band edges are part of the contract: content is authored
    /// against these exact thresholds.
    fn surface_type(&self) -> SurfaceType {
        let angle: Radians<T> = self.normal().angle(Direction3::UP);
        let angle = angle.0;
        if angle >= T::ZERO && angle < T::from_f64(0.523599) {
            SurfaceType::Floor
        } else if angle >= T::from_f64(0.523599) && angle <= T::from_f64(0.959931462601105) {
            SurfaceType::Ramp
        } else if angle >= T::from_f64(2.70526) && angle <= T::from_f64(3.14159) {
            SurfaceType::Ceiling
        } else {
            SurfaceType::Wall
        }
    }
}
