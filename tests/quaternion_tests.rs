//! Quaternion Tests - Construction, Composition and Interpolation
//!
//! Tests covering the construction helpers, Hamilton composition,
//! slerp/lerp behavior, and degenerate inputs.

use kinemath::{Degrees, Direction3, InterpolationMethod, Matrix4x4, Quaternion, Radians};

fn assert_rotation_eq(lhs: Quaternion<f32>, rhs: Quaternion<f32>, tolerance: f32) {
    // q and -q encode the same rotation, compare via the dot product.
    let dot = lhs.w * rhs.w + lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z;
    assert!(dot.abs() > 1.0 - tolerance, "{lhs:?} != {rhs:?} (dot {dot})");
}

fn assert_direction_eq(lhs: Direction3<f32>, rhs: Direction3<f32>, tolerance: f32) {
    assert!((lhs.x - rhs.x).abs() < tolerance, "{lhs:?} != {rhs:?}");
    assert!((lhs.y - rhs.y).abs() < tolerance, "{lhs:?} != {rhs:?}");
    assert!((lhs.z - rhs.z).abs() < tolerance, "{lhs:?} != {rhs:?}");
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_construction_paths_agree() {
    // A quarter turn about up built four ways.
    let by_axis = Quaternion::from_degrees_axis(Degrees(90.0f32), Direction3::UP);
    let by_radians = Quaternion::from_angle_axis(Radians(std::f32::consts::FRAC_PI_2), Direction3::UP);
    let by_euler = Quaternion::from_euler(Degrees(0.0), Degrees(90.0), Degrees(0.0));
    let by_matrix = Quaternion::from_rotation_matrix4(Matrix4x4::from_rotation(by_axis));

    assert_rotation_eq(by_axis, by_radians, 1e-6);
    assert_rotation_eq(by_axis, by_euler, 1e-6);
    assert_rotation_eq(by_axis, by_matrix, 1e-5);
}

#[test]
fn test_identity_rotates_nothing() {
    let vector = Direction3::new(0.1f32, -0.7, 0.7).normalized();
    assert_direction_eq(Quaternion::IDENTITY.rotate(vector), vector, 1e-6);
    assert_eq!(Quaternion::<f32>::default(), Quaternion::IDENTITY);
}

#[test]
fn test_between_produces_shortest_rotation() {
    let from = Direction3::<f32>::FORWARD;
    let to = Direction3::<f32>::RIGHT;
    let rotation = Quaternion::between(from, to);
    assert!((rotation.magnitude() - 1.0).abs() < 1e-5);
    assert_direction_eq(rotation.rotate(from), to, 1e-5);
}

#[test]
fn test_between_antiparallel_is_half_turn() {
    for direction in [
        Direction3::<f32>::UP,
        Direction3::RIGHT,
        Direction3::new(1.0, 2.0, -0.5).normalized(),
    ] {
        let rotation = Quaternion::between(direction, -direction);
        assert!(rotation.is_finite());
        assert_direction_eq(rotation.rotate(direction), -direction, 1e-4);
    }
}

#[test]
fn test_matrix_extraction_near_singular_orientations() {
    // Half turns about each axis make the trace non-positive and force
    // the largest-diagonal branches.
    for axis in [Direction3::<f32>::RIGHT, Direction3::UP, Direction3::BACKWARD] {
        let rotation = Quaternion::from_degrees_axis(Degrees(180.0), axis);
        let recovered = Quaternion::from_rotation_matrix4(Matrix4x4::from_rotation(rotation));
        assert_rotation_eq(rotation, recovered, 1e-4);
    }
}

// ============================================================================
// Composition Tests
// ============================================================================

#[test]
fn test_composition_applies_right_factor_first() {
    let q1 = Quaternion::from_degrees_axis(Degrees(25.0f32), Direction3::UP);
    let q2 = Quaternion::from_degrees_axis(Degrees(65.0f32), Direction3::RIGHT);
    let vector = Direction3::new(0.2, 0.8, -0.4).normalized();

    let composed = (q1 * q2).rotate(vector);
    let sequential = q1.rotate(q2.rotate(vector));
    assert_direction_eq(composed, sequential, 1e-5);
}

#[test]
fn test_inverse_composes_to_identity() {
    let rotation = Quaternion::from_euler(Degrees(15.0f32), Degrees(160.0), Degrees(-40.0));
    let identity = rotation * rotation.inverse();
    assert_rotation_eq(identity, Quaternion::IDENTITY, 1e-5);
}

#[test]
fn test_conjugate_equals_inverse_for_unit() {
    let rotation = Quaternion::from_degrees_axis(Degrees(73.0f32), Direction3::UP);
    let conjugate = rotation.conjugate();
    let inverse = rotation.inverse();
    assert!((conjugate.w - inverse.w).abs() < 1e-6);
    assert!((conjugate.x - inverse.x).abs() < 1e-6);
    assert!((conjugate.y - inverse.y).abs() < 1e-6);
    assert!((conjugate.z - inverse.z).abs() < 1e-6);
}

#[test]
fn test_basis_directions() {
    let quarter = Quaternion::from_degrees_axis(Degrees(90.0f32), Direction3::UP);
    assert_direction_eq(quarter.forward(), Direction3::LEFT, 1e-6);
    assert_direction_eq(quarter.right(), Direction3::FORWARD, 1e-6);
    assert_direction_eq(quarter.up(), Direction3::UP, 1e-6);
}

// ============================================================================
// Interpolation Tests
// ============================================================================

#[test]
fn test_slerp_self_is_stable() {
    let rotation = Quaternion::from_euler(Degrees(30.0f32), Degrees(-75.0), Degrees(5.0));
    let midpoint = rotation.interpolated(rotation, InterpolationMethod::linear(0.5));
    assert_rotation_eq(midpoint, rotation, 1e-6);
}

#[test]
fn test_lerp_endpoints_exact() {
    let from = Quaternion::from_degrees_axis(Degrees(10.0f32), Direction3::UP);
    let to = Quaternion::from_degrees_axis(Degrees(100.0f32), Direction3::UP);
    let at_start = from.interpolated(to, InterpolationMethod::linear_numeric(0.0));
    let at_end = from.interpolated(to, InterpolationMethod::linear_numeric(1.0));
    assert_rotation_eq(at_start, from, 1e-6);
    assert_rotation_eq(at_end, to, 1e-6);
}

#[test]
fn test_slerp_midpoint_halves_the_angle() {
    let from = Quaternion::<f32>::IDENTITY;
    let to = Quaternion::from_degrees_axis(Degrees(90.0f32), Direction3::UP);
    let midpoint = from.interpolated(to, InterpolationMethod::linear(0.5));
    let expected = Quaternion::from_degrees_axis(Degrees(45.0f32), Direction3::UP);
    assert_rotation_eq(midpoint, expected, 1e-5);
}

#[test]
fn test_slerp_takes_short_arc_through_zero() {
    let from = Quaternion::from_degrees_axis(Degrees(10.0f32), Direction3::UP);
    let to = Quaternion::from_degrees_axis(Degrees(350.0f32), Direction3::UP);
    let midpoint = from.interpolated(to, InterpolationMethod::linear(0.5));
    // The short arc meets at zero degrees, leaving forward unrotated.
    assert_direction_eq(midpoint.rotate(Direction3::FORWARD), Direction3::FORWARD, 1e-3);
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_construction_helpers_are_unit() {
    let samples = [
        Quaternion::from_degrees_axis(Degrees(33.0f32), Direction3::UP),
        Quaternion::between(Direction3::FORWARD, Direction3::UP),
        Quaternion::from_euler(Degrees(10.0), Degrees(20.0), Degrees(30.0)),
        Quaternion::from_rotation_matrix4(Matrix4x4::from_rotation(
            Quaternion::from_degrees_axis(Degrees(120.0), Direction3::RIGHT),
        )),
    ];
    for rotation in samples {
        assert!((rotation.magnitude() - 1.0).abs() < 1e-5, "{rotation:?}");
    }
}
