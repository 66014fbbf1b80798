//! Perspective Projection
//!
//! Projection parameters are constant except for the aspect ratio, which is
//! recomputed only when the window resizes. Identical window sizes always
//! reproduce an identical matrix.

use glam::Mat4;

/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 45.0;
/// Near clip plane.
pub const Z_NEAR: f32 = 3.0;
/// Far clip plane.
pub const Z_FAR: f32 = 7.0;

/// Perspective projection derived from the window size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    aspect: f32,
}

impl Projection {
    /// Projection for an initial window size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self { aspect: 1.0 };
        projection.resize(width, height);
        projection
    }

    /// Recompute the aspect ratio from a new window size. No other state
    /// changes on resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Right-handed perspective matrix (wgpu 0..1 clip depth).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR)
    }
}
