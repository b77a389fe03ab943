use crate::collision::{Collider3D, Interpenetration3D, Ray3D};
use crate::scalar::Scalar;
use crate::three::{Direction3, Position3, Size3, Transform3};

/// An axis-aligned box collider described by its center and half
/// extents along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AabbCollider3D<T: Scalar> {
    center: Position3<T>,
    offset: Position3<T>,
    half_extents: Size3<T>,
    local_offset: Position3<T>,
    local_half_extents: Size3<T>,
}

impl<T: Scalar> AabbCollider3D<T> {
    pub fn new(offset: Position3<T>, half_extents: Size3<T>) -> Self {
        Self {
            center: Position3::ZERO,
            offset,
            half_extents,
            local_offset: offset,
            local_half_extents: half_extents,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Size3<T> {
        self.half_extents
    }

    /// The corner with the smallest coordinates.
    pub fn min_position(&self) -> Position3<T> {
        let position = self.position();
        Position3::new(
            position.x - self.half_extents.x,
            position.y - self.half_extents.y,
            position.z - self.half_extents.z,
        )
    }

    /// The corner with the largest coordinates.
    pub fn max_position(&self) -> Position3<T> {
        let position = self.position();
        Position3::new(
            position.x + self.half_extents.x,
            position.y + self.half_extents.y,
            position.z + self.half_extents.z,
        )
    }

    /// Edge-inclusive containment.
    pub fn contains(&self, point: Position3<T>) -> bool {
        let min = self.min_position();
        let max = self.max_position();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    fn clamped(&self, point: Position3<T>) -> Position3<T> {
        point.max(self.min_position()).min(self.max_position())
    }
}

impl<T: Scalar> Collider3D<T> for AabbCollider3D<T> {
    fn center(&self) -> Position3<T> {
        self.center
    }

    fn offset(&self) -> Position3<T> {
        self.offset
    }

    fn update(&mut self, transform: &Transform3<T>) {
        let scale = transform.scale();
        self.center = transform.position();
        self.offset = Position3::new(
            self.local_offset.x * scale.x,
            self.local_offset.y * scale.y,
            self.local_offset.z * scale.z,
        );
        self.half_extents = self.local_half_extents * scale;
    }

    fn closest_surface_point(&self, point: Position3<T>) -> Position3<T> {
        let clamped = self.clamped(point);
        if clamped != point {
            return clamped;
        }
        // Interior points snap to the nearest face.
        let min = self.min_position();
        let max = self.max_position();
        let distances = [
            (point.x - min.x, 0, min.x),
            (max.x - point.x, 0, max.x),
            (point.y - min.y, 1, min.y),
            (max.y - point.y, 1, max.y),
            (point.z - min.z, 2, min.z),
            (max.z - point.z, 2, max.z),
        ];
        let mut nearest = distances[0];
        for candidate in distances {
            if candidate.0 < nearest.0 {
                nearest = candidate;
            }
        }
        let mut snapped = point;
        snapped[nearest.1] = nearest.2;
        snapped
    }

    fn interpenetration(&self, collider: &dyn Collider3D<T>) -> Option<Interpenetration3D<T>> {
        let contact = collider.closest_surface_point(self.position());
        if !self.contains(contact) {
            return None;
        }
        let own_surface = self.closest_surface_point(contact);
        let depth = -contact.distance(own_surface);
        let direction = Direction3::from_points(self.position(), contact);
        Some(Interpenetration3D::new(depth, direction, vec![contact]))
    }

    /// Slab-method intersection: entry and exit times per axis pair,
    /// overlapped across the three axes.
    fn surface_point(&self, ray: &Ray3D<T>) -> Option<Position3<T>> {
        let min = self.min_position();
        let max = self.max_position();
        let epsilon = T::from_f64(1e-10);

        let inv = |component: T| {
            if component.abs() > epsilon {
                T::ONE / component
            } else {
                T::MAX * component.signum()
            }
        };
        let inv_x = inv(ray.direction.x);
        let inv_y = inv(ray.direction.y);
        let inv_z = inv(ray.direction.z);

        let t1 = (min.x - ray.origin.x) * inv_x;
        let t2 = (max.x - ray.origin.x) * inv_x;
        let mut t_min = t1.min(t2);
        let mut t_max = t1.max(t2);

        let t3 = (min.y - ray.origin.y) * inv_y;
        let t4 = (max.y - ray.origin.y) * inv_y;
        t_min = t_min.max(t3.min(t4));
        t_max = t_max.min(t3.max(t4));

        let t5 = (min.z - ray.origin.z) * inv_z;
        let t6 = (max.z - ray.origin.z) * inv_z;
        t_min = t_min.max(t5.min(t6));
        t_max = t_max.min(t5.max(t6));

        if t_max < t_min || t_max < T::ZERO {
            return None;
        }
        // A negative entry time means the ray starts inside the box.
        let distance = if t_min >= T::ZERO { t_min } else { t_max };
        Some(ray.point_at(distance))
    }

    /// The outward normal of the face whose plane the point is nearest,
    /// chosen by the dominant axis of the half-extent-normalized offset.
    fn surface_normal(&self, facing: Position3<T>) -> Direction3<T> {
        let local = facing - self.position();
        let normalized = Direction3::new(
            local.x / self.half_extents.x,
            local.y / self.half_extents.y,
            local.z / self.half_extents.z,
        );
        let magnitudes = normalized.abs();

        if magnitudes.x >= magnitudes.y && magnitudes.x >= magnitudes.z {
            Direction3::new(normalized.x.signum(), T::ZERO, T::ZERO)
        } else if magnitudes.y >= magnitudes.x && magnitudes.y >= magnitudes.z {
            Direction3::new(T::ZERO, normalized.y.signum(), T::ZERO)
        } else {
            Direction3::new(T::ZERO, T::ZERO, normalized.z.signum())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::SphereCollider3D;

    fn unit_box() -> AabbCollider3D<f32> {
        AabbCollider3D::new(Position3::ZERO, Size3::from_extents(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_ray_hits_near_face() {
        let aabb = unit_box();
        let ray = Ray3D::new(Position3::new(0.0, 0.0, 5.0), Direction3::FORWARD);
        let hit = aabb.surface_point(&ray).unwrap();
        assert!((hit.z - 1.0).abs() < 1e-5);

        let normal = aabb.surface_normal(hit);
        assert_eq!(normal, Direction3::BACKWARD);
    }

    #[test]
    fn test_ray_from_inside_hits_exit_face() {
        let aabb = unit_box();
        let ray = Ray3D::new(Position3::ZERO, Direction3::UP);
        let hit = aabb.surface_point(&ray).unwrap();
        assert!((hit.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_miss_is_none() {
        let aabb = unit_box();
        let ray = Ray3D::new(Position3::new(5.0, 0.0, 5.0), Direction3::FORWARD);
        assert!(aabb.surface_point(&ray).is_none());
    }

    #[test]
    fn test_closest_surface_point_clamps_outside() {
        let aabb = unit_box();
        let point = aabb.closest_surface_point(Position3::new(3.0, 0.5, 0.0));
        assert_eq!(point, Position3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_closest_surface_point_snaps_interior() {
        let aabb = unit_box();
        let point = aabb.closest_surface_point(Position3::new(0.9, 0.0, 0.0));
        assert_eq!(point, Position3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_update_follows_transform() {
        let mut aabb = unit_box();
        let transform = Transform3::new(
            Position3::new(10.0, 0.0, 0.0),
            crate::three::Quaternion::IDENTITY,
            Size3::from_extents(2.0, 1.0, 1.0),
        );
        aabb.update(&transform);
        assert_eq!(aabb.center(), Position3::new(10.0, 0.0, 0.0));
        assert_eq!(aabb.half_extents(), Size3::from_extents(2.0, 1.0, 1.0));
    }

    #[test]
    fn test_sphere_box_interpenetration() {
        let aabb = unit_box();
        let sphere = SphereCollider3D::new(Position3::new(1.5f32, 0.0, 0.0), 1.0);
        let interpenetration = aabb.interpenetration(&sphere).unwrap();
        assert!(interpenetration.is_colliding());
        assert!(interpenetration.is_valid());

        let far_sphere = SphereCollider3D::new(Position3::new(5.0, 0.0, 0.0), 1.0);
        assert!(aabb.interpenetration(&far_sphere).is_none());
    }
}
