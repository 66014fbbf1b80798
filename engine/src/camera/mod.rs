//! Camera Module
//!
//! Free-fly look-at camera and projection math. Window-system agnostic: only
//! camera state and matrix computation live here.

pub mod controller;
pub mod projection;

pub use controller::{
    FlyCamera, MOVE_STEP, SCALE_FLOOR, SCALE_STEP, YAW_STEP_DEGREES, turntable_angle,
};
pub use projection::{FOV_Y_DEGREES, Projection, Z_FAR, Z_NEAR};
