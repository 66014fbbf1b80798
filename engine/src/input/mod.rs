//! Input Module
//!
//! Platform-agnostic keyboard input: generic key codes plus the key-to-action
//! binding map. Decoupled from winit so the engine can be driven from tests
//! or any other host.

pub mod bindings;
pub mod keyboard;

pub use bindings::{CameraAction, KeyBindings};
pub use keyboard::KeyCode;
