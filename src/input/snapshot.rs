//! Copyable per-tick input snapshots.

use glam::Vec2;

/// Held state of the five control keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    /// Escape: request exit.
    pub escape: bool,
    /// Up arrow: lift the eye.
    pub up: bool,
    /// Down arrow: lower the eye.
    pub down: bool,
    /// Left arrow: orbit counter-clockwise.
    pub left: bool,
    /// Right arrow: orbit clockwise.
    pub right: bool,
}

/// Raw input state captured once per update tick.
///
/// A snapshot is a plain value: the camera controller consumes it without
/// ever touching the windowing layer, and a render tick between two update
/// ticks can never observe a half-applied one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Control keys held at the time of the snapshot.
    pub keys: HeldKeys,
    /// Whether the primary mouse button is held.
    pub primary_pressed: bool,
    /// Cursor position in physical pixels.
    pub cursor: Vec2,
}
