use glam::{Mat4, Vec3};
use super::*;

fn test_camera() -> PerspectiveCamera {
    PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new() {
    let camera = test_camera();
    assert_eq!(camera.fov_y_degrees(), 75.0);
    assert_eq!(camera.aspect(), 16.0 / 9.0);
    assert_eq!(camera.near(), 0.1);
    assert_eq!(camera.far(), 1000.0);
    assert_eq!(camera.position(), Vec3::ZERO);
}

// ============================================================================
// Pose
// ============================================================================

#[test]
fn test_set_position_and_look_at() {
    let mut camera = test_camera();
    camera.set_position(Vec3::new(0.0, 3.0, 10.0));
    camera.look_at(Vec3::ZERO);

    assert_eq!(camera.position(), Vec3::new(0.0, 3.0, 10.0));
    assert_eq!(camera.target(), Vec3::ZERO);
}

#[test]
fn test_view_matrix_follows_target() {
    // Orientation is derived from the target, not cached, so moving the
    // target must change the view matrix immediately.
    let mut camera = test_camera();
    camera.set_position(Vec3::new(0.0, 2.0, 6.0));
    camera.look_at(Vec3::ZERO);
    let before = camera.view_matrix();

    camera.look_at(Vec3::new(3.0, 0.0, 0.0));
    let after = camera.view_matrix();
    assert_ne!(before, after);

    let expected = Mat4::look_at_rh(
        Vec3::new(0.0, 2.0, 6.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::Y,
    );
    assert_eq!(after, expected);
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_projection_matrix() {
    let camera = test_camera();
    let expected = Mat4::perspective_rh(75.0f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
    assert_eq!(camera.projection_matrix(), expected);
}

#[test]
fn test_set_aspect_updates_projection() {
    let mut camera = test_camera();
    let before = camera.projection_matrix();

    camera.set_aspect(1.0);
    assert_eq!(camera.aspect(), 1.0);
    assert_ne!(camera.projection_matrix(), before);
}

#[test]
fn test_view_projection_matrix() {
    let mut camera = test_camera();
    camera.set_position(Vec3::new(0.0, 3.0, 10.0));
    camera.look_at(Vec3::ZERO);

    let expected = camera.projection_matrix() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}
