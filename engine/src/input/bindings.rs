//! Input Bindings Module
//!
//! Maps physical keys to logical camera actions, so the camera code never
//! sees key codes and keys can be remapped without touching it.

use std::collections::HashMap;

use super::KeyCode;

/// Logical camera actions the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Grow the model scale (default: `+`)
    ZoomIn,
    /// Shrink the model scale, clamped (default: `-`)
    ZoomOut,
    /// Move eye and center along the view direction (default: W / Up)
    DollyForward,
    /// Move eye and center against the view direction (default: S / Down)
    DollyBack,
    /// Sidestep along the strafe axis (default: A)
    StrafeLeft,
    /// Sidestep against the strafe axis (default: D)
    StrafeRight,
    /// Rotate the look-at target 1 degree about up (default: Left)
    YawLeft,
    /// Rotate the look-at target -1 degree about up (default: Right)
    YawRight,
}

/// Maps physical keys to logical camera actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, CameraAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Default bindings:
    /// - `+` / NumpadAdd = ZoomIn
    /// - `-` / NumpadSubtract = ZoomOut
    /// - W / Up = DollyForward
    /// - S / Down = DollyBack
    /// - A = StrafeLeft, D = StrafeRight
    /// - Left / Right = YawLeft / YawRight
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
        };

        bindings.bind(KeyCode::Equal, CameraAction::ZoomIn);
        bindings.bind(KeyCode::NumpadAdd, CameraAction::ZoomIn);
        bindings.bind(KeyCode::Minus, CameraAction::ZoomOut);
        bindings.bind(KeyCode::NumpadSubtract, CameraAction::ZoomOut);
        bindings.bind(KeyCode::W, CameraAction::DollyForward);
        bindings.bind(KeyCode::ArrowUp, CameraAction::DollyForward);
        bindings.bind(KeyCode::S, CameraAction::DollyBack);
        bindings.bind(KeyCode::ArrowDown, CameraAction::DollyBack);
        bindings.bind(KeyCode::A, CameraAction::StrafeLeft);
        bindings.bind(KeyCode::D, CameraAction::StrafeRight);
        bindings.bind(KeyCode::ArrowLeft, CameraAction::YawLeft);
        bindings.bind(KeyCode::ArrowRight, CameraAction::YawRight);

        bindings
    }

    /// Bind a physical key to an action, replacing any previous binding for
    /// that key.
    pub fn bind(&mut self, key: KeyCode, action: CameraAction) {
        self.key_to_action.insert(key, action);
    }

    /// Look up the action bound to a key.
    pub fn action_for(&self, key: KeyCode) -> Option<CameraAction> {
        self.key_to_action.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for(KeyCode::W), Some(CameraAction::DollyForward));
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), Some(CameraAction::DollyForward));
        assert_eq!(bindings.action_for(KeyCode::Minus), Some(CameraAction::ZoomOut));
        assert_eq!(bindings.action_for(KeyCode::ArrowLeft), Some(CameraAction::YawLeft));
        assert_eq!(bindings.action_for(KeyCode::Escape), None);
        assert_eq!(bindings.action_for(KeyCode::Unknown), None);
    }

    #[test]
    fn test_rebind_replaces() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::W, CameraAction::ZoomIn);
        assert_eq!(bindings.action_for(KeyCode::W), Some(CameraAction::ZoomIn));
    }
}
