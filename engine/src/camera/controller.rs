//! Free-Fly Camera Controller
//!
//! Look-at camera parameterized by eye position, center (look-at target), up
//! vector, and a uniform model scale. Window-system agnostic: input handling
//! happens outside and calls the discrete per-keypress operations here. Each
//! operation is one fixed-size step; continuous movement is just repeated
//! presses delivered by the host event loop.

use glam::{Mat4, Quat, Vec3};

/// Scale change per zoom keypress.
pub const SCALE_STEP: f32 = 0.1;
/// Scale never drops below this, so the model cannot degenerate or invert.
pub const SCALE_FLOOR: f32 = 0.1;
/// World-units moved per dolly/strafe keypress.
pub const MOVE_STEP: f32 = 0.1;
/// Yaw rotation per keypress, in degrees.
pub const YAW_STEP_DEGREES: f32 = 1.0;

/// Camera state: eye/center/up plus a uniform model scale.
///
/// Single writer (the input handler), single reader per frame (the renderer),
/// both on the event-loop thread.
#[derive(Clone, Copy, Debug)]
pub struct FlyCamera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub center: Vec3,
    /// Up vector (unit length).
    pub up: Vec3,
    /// Uniform scale applied to the model matrix.
    pub scale: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        // Eye at +5 on Z looking at the origin; the 3.0..7.0 projection
        // frustum brackets the plane at that distance.
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            center: Vec3::ZERO,
            up: Vec3::Y,
            scale: 1.0,
        }
    }
}

impl FlyCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit vector from eye toward center.
    pub fn ahead(&self) -> Vec3 {
        (self.center - self.eye).normalize()
    }

    /// Strafe axis: `normalize(ahead x up)`.
    pub fn left(&self) -> Vec3 {
        self.ahead().cross(self.up).normalize()
    }

    /// Grow the model scale by one step.
    pub fn zoom_in(&mut self) {
        self.scale += SCALE_STEP;
    }

    /// Shrink the model scale by one step, clamped at the floor.
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - SCALE_STEP).max(SCALE_FLOOR);
    }

    /// Move eye and center together one step along the view direction.
    pub fn dolly_forward(&mut self) {
        self.translate(self.ahead() * MOVE_STEP);
    }

    pub fn dolly_back(&mut self) {
        self.translate(self.ahead() * -MOVE_STEP);
    }

    /// Move eye and center together one step along the strafe axis.
    pub fn strafe_left(&mut self) {
        self.translate(self.left() * MOVE_STEP);
    }

    pub fn strafe_right(&mut self) {
        self.translate(self.left() * -MOVE_STEP);
    }

    /// Rotate `center` around `eye` by one step about the `up` axis.
    pub fn yaw_left(&mut self) {
        self.yaw(YAW_STEP_DEGREES.to_radians());
    }

    pub fn yaw_right(&mut self) {
        self.yaw(-YAW_STEP_DEGREES.to_radians());
    }

    /// View matrix for the current state (right-handed look-at).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }

    /// Model matrix: uniform scale only.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
    }

    fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.center += delta;
    }

    fn yaw(&mut self, angle: f32) {
        let offset = self.center - self.eye;
        let rotation = Quat::from_axis_angle(self.up.normalize(), angle);
        self.center = self.eye + rotation * offset;
    }
}

/// Turntable angle in degrees for a given timer tick.
///
/// Pure in the tick count (1 degree per tick, wrapping at 360) so a frame
/// rendered at tick N is identical no matter how the loop got there.
pub fn turntable_angle(tick: u64) -> f32 {
    (tick % 360) as f32
}
