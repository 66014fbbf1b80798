//! Camera Tests - Free-Fly State and Projection
//!
//! Tests for the camera module: discrete keypress operations, matrix
//! construction, and resize behavior.

use glam::{Vec3, Vec4};
use heightfield_engine::camera::{
    FlyCamera, Projection, SCALE_FLOOR, YAW_STEP_DEGREES, turntable_angle,
};

// ============================================================================
// Scale (Zoom)
// ============================================================================

#[test]
fn test_zoom_out_never_below_floor() {
    let mut camera = FlyCamera::new();
    for presses in 1..=30 {
        camera.zoom_out();
        let expected = (1.0 - 0.1 * presses as f32).max(SCALE_FLOOR);
        assert!((camera.scale - expected).abs() < 1e-5, "press {presses}");
        assert!(camera.scale >= SCALE_FLOOR);
    }
}

#[test]
fn test_zoom_in_steps() {
    let mut camera = FlyCamera::new();
    camera.zoom_in();
    camera.zoom_in();
    assert!((camera.scale - 1.2).abs() < 1e-6);
}

// ============================================================================
// Dolly and Strafe
// ============================================================================

#[test]
fn test_dolly_round_trip() {
    let mut camera = FlyCamera::new();
    let (eye, center) = (camera.eye, camera.center);
    camera.dolly_forward();
    camera.dolly_back();
    assert!((camera.eye - eye).length() < 1e-6);
    assert!((camera.center - center).length() < 1e-6);
}

#[test]
fn test_strafe_round_trip() {
    let mut camera = FlyCamera::new();
    let (eye, center) = (camera.eye, camera.center);
    camera.strafe_left();
    camera.strafe_right();
    assert!((camera.eye - eye).length() < 1e-6);
    assert!((camera.center - center).length() < 1e-6);
}

#[test]
fn test_strafe_axis_formula() {
    let camera = FlyCamera::new();
    let expected = camera.ahead().cross(camera.up).normalize();
    assert!((camera.left() - expected).length() < 1e-6);
    // Strafe axis is perpendicular to both view direction and up
    assert!(camera.left().dot(camera.ahead()).abs() < 1e-6);
    assert!(camera.left().dot(camera.up).abs() < 1e-6);
}

#[test]
fn test_strafe_preserves_view_direction() {
    let mut camera = FlyCamera::new();
    let ahead = camera.ahead();
    camera.strafe_left();
    assert!((camera.ahead() - ahead).length() < 1e-6);
}

// ============================================================================
// Yaw
// ============================================================================

#[test]
fn test_yaw_plus_minus_restores_center() {
    let mut camera = FlyCamera::new();
    let center = camera.center;
    camera.yaw_left();
    camera.yaw_right();
    assert!((camera.center - center).length() < 1e-5);
}

#[test]
fn test_yaw_step_is_one_degree() {
    let mut camera = FlyCamera::new();
    let before = camera.ahead();
    camera.yaw_left();
    let angle = before.angle_between(camera.ahead()).to_degrees();
    assert!((angle - YAW_STEP_DEGREES).abs() < 1e-3);
}

#[test]
fn test_ninety_yaw_presses_turn_ninety_degrees() {
    let mut camera = FlyCamera::new();
    let before = camera.ahead();
    for _ in 0..90 {
        camera.yaw_left();
    }
    let angle = before.angle_between(camera.ahead()).to_degrees();
    assert!((angle - 90.0).abs() < 0.01);
    // Eye does not move while yawing
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 5.0));
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_matrix_maps_eye_to_origin() {
    let camera = FlyCamera::new();
    let view = camera.view_matrix();
    let eye_view = view * Vec4::new(camera.eye.x, camera.eye.y, camera.eye.z, 1.0);
    assert!(eye_view.truncate().length() < 1e-5);
}

#[test]
fn test_view_matrix_looks_down_negative_z() {
    let camera = FlyCamera::new();
    let view = camera.view_matrix();
    let center_view = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    // Center is 5 units ahead of the eye, i.e. at -5 on the view Z axis
    assert!((center_view.z - (-5.0)).abs() < 1e-5);
}

#[test]
fn test_model_matrix_is_uniform_scale() {
    let mut camera = FlyCamera::new();
    camera.zoom_in();
    let model = camera.model_matrix();
    let p = model * Vec4::new(1.0, 1.0, 1.0, 1.0);
    assert!((p.truncate() - Vec3::splat(1.1)).length() < 1e-6);
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_resize_then_back_reproduces_matrix() {
    let mut projection = Projection::new(800, 600);
    let original = projection.matrix();

    projection.resize(1920, 1080);
    assert_ne!(projection.matrix(), original);

    projection.resize(800, 600);
    assert_eq!(projection.matrix(), original);
}

#[test]
fn test_aspect_follows_window() {
    let mut projection = Projection::new(800, 600);
    assert!((projection.aspect() - 800.0 / 600.0).abs() < 1e-6);
    projection.resize(1024, 256);
    assert!((projection.aspect() - 4.0).abs() < 1e-6);
}

// ============================================================================
// Turntable
// ============================================================================

#[test]
fn test_turntable_is_pure_function_of_tick() {
    for tick in [0u64, 1, 17, 359, 360, 1000] {
        assert_eq!(turntable_angle(tick), turntable_angle(tick));
        assert_eq!(turntable_angle(tick), (tick % 360) as f32);
    }
}
