use crate::collision::{Collider3D, Interpenetration3D, Ray3D};
use crate::scalar::Scalar;
use crate::three::{Direction3, Position3, Transform3};

/// A sphere collider. The stored radius is the local radius scaled by
/// the owning transform's largest scale axis, so non-uniform scale
/// yields a bounding sphere rather than an ellipsoid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereCollider3D<T: Scalar> {
    center: Position3<T>,
    offset: Position3<T>,
    radius: T,
    local_offset: Position3<T>,
    local_radius: T,
}

impl<T: Scalar> SphereCollider3D<T> {
    pub fn new(offset: Position3<T>, radius: T) -> Self {
        Self {
            center: Position3::ZERO,
            offset,
            radius,
            local_offset: offset,
            local_radius: radius,
        }
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }
}

impl<T: Scalar> Collider3D<T> for SphereCollider3D<T> {
    fn center(&self) -> Position3<T> {
        self.center
    }

    fn offset(&self) -> Position3<T> {
        self.offset
    }

    fn update(&mut self, transform: &Transform3<T>) {
        self.center = transform.position();
        let scale = transform.scale();
        self.offset = self.local_offset * scale.max_component();
        self.radius = self.local_radius * scale.max_component();
    }

    fn closest_surface_point(&self, point: Position3<T>) -> Position3<T> {
        let toward = Direction3::from_points(self.position(), point);
        self.position().moved(self.radius, toward)
    }

    fn interpenetration(&self, collider: &dyn Collider3D<T>) -> Option<Interpenetration3D<T>> {
        let surface = collider.closest_surface_point(self.position());
        let distance = self.position().distance(surface);
        let depth = distance - self.radius;
        if depth >= T::ZERO {
            return None;
        }
        let direction = Direction3::from_points(self.position(), surface);
        Some(Interpenetration3D::new(depth, direction, vec![surface]))
    }

    fn surface_point(&self, ray: &Ray3D<T>) -> Option<Position3<T>> {
        // Quadratic in the ray parameter; the discriminant decides the hit.
        let offset = ray.origin - self.position();
        let b = ray.direction.dot(Direction3::new(offset.x, offset.y, offset.z));
        let c = offset.dot(offset) - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < T::ZERO {
            return None;
        }
        let sqrt_discriminant = discriminant.sqrt();
        let near = -b - sqrt_discriminant;
        let far = -b + sqrt_discriminant;
        if far < T::ZERO {
            return None;
        }
        let distance = if near >= T::ZERO { near } else { far };
        Some(ray.point_at(distance))
    }

    fn surface_normal(&self, facing: Position3<T>) -> Direction3<T> {
        Direction3::from_points(self.position(), facing)
    }
}
