//! Keyboard Input Module
//!
//! Generic key codes decoupled from the windowing system. The host adapter
//! translates its native key events into these before handing them to the
//! engine.

/// Generic key codes for the viewer's controls, independent of winit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Zoom keys
    Equal,
    Minus,
    NumpadAdd,
    NumpadSubtract,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}
