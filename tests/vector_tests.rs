//! Vector Tests - Shared Algebra Contract
//!
//! Tests for the component-wise algebra, dot/cross products, guarded
//! normalization, and matrix application shared by the semantic vector
//! types.

use kinemath::{
    Direction3, InterpolationMethod, Matrix4x4, Position2, Position3, Quaternion, Radians, Size3,
};

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalized_is_unit_length() {
    let samples = [
        Direction3::new(3.0f32, 4.0, 0.0),
        Direction3::new(-2.0, 7.0, 0.1),
        Direction3::new(0.001, 0.0, 0.0),
        Direction3::new(100.0, -250.0, 775.0),
    ];
    for vector in samples {
        let normalized = vector.normalized();
        assert!(
            (normalized.magnitude() - 1.0).abs() < 1e-5,
            "{vector:?} normalized to magnitude {}",
            normalized.magnitude()
        );
    }
}

#[test]
fn test_zero_vector_normalize_is_noop() {
    let zero = Direction3::<f32>::ZERO;
    assert_eq!(zero.normalized(), zero);

    let mut mutable = Position2::<f64>::ZERO;
    mutable.normalize();
    assert_eq!(mutable, Position2::ZERO);
}

// ============================================================================
// Product Tests
// ============================================================================

#[test]
fn test_dot_of_perpendicular_is_zero() {
    assert_eq!(Direction3::<f32>::UP.dot(Direction3::RIGHT), 0.0);
    assert_eq!(Position2::new(1.0f32, 0.0).dot(Position2::new(0.0, 1.0)), 0.0);
}

#[test]
fn test_cross_follows_right_hand_rule() {
    let cross = Direction3::<f32>::RIGHT.cross(Direction3::UP);
    assert_eq!(cross, Direction3::BACKWARD);

    let reversed = Direction3::<f32>::UP.cross(Direction3::RIGHT);
    assert_eq!(reversed, Direction3::FORWARD);
}

#[test]
fn test_cross_2d_returns_virtual_z() {
    let virtual_z = Position2::new(1.0f32, 0.0).cross(Position2::new(0.0, 1.0));
    assert_eq!(virtual_z, 1.0);
    let reversed = Position2::new(0.0f32, 1.0).cross(Position2::new(1.0, 0.0));
    assert_eq!(reversed, -1.0);
}

// ============================================================================
// Component-wise Operation Tests
// ============================================================================

#[test]
fn test_rounding_family() {
    let vector = Position3::new(1.4f32, -1.4, 2.5);
    assert_eq!(vector.floor(), Position3::new(1.0, -2.0, 2.0));
    assert_eq!(vector.ceil(), Position3::new(2.0, -1.0, 3.0));
    assert_eq!(vector.abs(), Position3::new(1.4, 1.4, 2.5));
}

#[test]
fn test_min_max_components() {
    let vector = Position3::new(3.0f32, -1.0, 2.0);
    assert_eq!(vector.min_component(), -1.0);
    assert_eq!(vector.max_component(), 3.0);

    let other = Position3::new(0.0f32, 5.0, 2.5);
    assert_eq!(vector.min(other), Position3::new(0.0, -1.0, 2.0));
    assert_eq!(vector.max(other), Position3::new(3.0, 5.0, 2.5));
}

#[test]
fn test_scalar_broadcast() {
    let vector = Position3::new(1.0f32, 2.0, 3.0);
    assert_eq!(vector * 2.0, Position3::new(2.0, 4.0, 6.0));
    assert_eq!(vector + 1.0, Position3::new(2.0, 3.0, 4.0));
    assert_eq!(-vector, Position3::new(-1.0, -2.0, -3.0));
}

// ============================================================================
// Interpolation Tests
// ============================================================================

#[test]
fn test_interpolation_endpoints_exact() {
    let from = Position3::new(1.0f32, 2.0, 3.0);
    let to = Position3::new(-4.0, 0.5, 12.0);
    assert_eq!(from.interpolated(to, InterpolationMethod::linear(0.0)), from);
    assert_eq!(from.interpolated(to, InterpolationMethod::linear(1.0)), to);
}

#[test]
fn test_interpolation_midpoint() {
    let from = Position3::new(0.0f32, 0.0, 0.0);
    let to = Position3::new(10.0, -10.0, 4.0);
    let midpoint = from.interpolated(to, InterpolationMethod::linear(0.5));
    assert_eq!(midpoint, Position3::new(5.0, -5.0, 2.0));
}

// ============================================================================
// Matrix Application Tests
// ============================================================================

#[test]
fn test_row_application_picks_up_translation() {
    let matrix = Matrix4x4::from_position(Position3::new(1.0f32, 2.0, 3.0));
    let moved = Position3::new(1.0, 1.0, 1.0) * matrix;
    assert_eq!(moved, Position3::new(2.0, 3.0, 4.0));
}

#[test]
fn test_row_and_column_forms_differ() {
    let rotation = Matrix4x4::from_rotation(Quaternion::from_angle_axis(
        Radians(1.0f32),
        Direction3::new(1.0, 1.0, 1.0).normalized(),
    ));
    let vector = Position3::new(1.0, 2.0, 3.0);
    let row_form = vector * rotation;
    let column_form = rotation * vector;
    let difference = (row_form - column_form).magnitude();
    assert!(difference > 1e-3);
}

#[test]
fn test_row_against_rotation_matches_quaternion() {
    let rotation = Quaternion::from_angle_axis(Radians(0.6f32), Direction3::UP);
    let matrix = Matrix4x4::from_rotation(rotation);
    let direction = Direction3::new(0.3, 0.1, -0.9).normalized();
    let by_matrix = direction * matrix;
    let by_quaternion = rotation.rotate(direction);
    assert!((by_matrix.x - by_quaternion.x).abs() < 1e-5);
    assert!((by_matrix.y - by_quaternion.y).abs() < 1e-5);
    assert!((by_matrix.z - by_quaternion.z).abs() < 1e-5);
}

// ============================================================================
// Size Tests
// ============================================================================

#[test]
fn test_size_accessors() {
    let size = Size3::from_extents(4.0f32, 5.0, 6.0);
    assert_eq!(size.width(), 4.0);
    assert_eq!(size.height(), 5.0);
    assert_eq!(size.depth(), 6.0);
}
