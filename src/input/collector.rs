//! Folds window events into raw input state.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::snapshot::{HeldKeys, InputSnapshot};

/// Tracks the current keyboard and mouse state from winit window events.
///
/// The host feeds every window event through [`handle_window_event`] and
/// takes a [`snapshot`] once per update tick; winit types stay at this
/// boundary.
///
/// [`handle_window_event`]: InputCollector::handle_window_event
/// [`snapshot`]: InputCollector::snapshot
#[derive(Debug, Default)]
pub struct InputCollector {
    keys: HeldKeys,
    primary_pressed: bool,
    cursor: Vec2,
}

impl InputCollector {
    /// A collector with nothing held and the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a window event into the tracked state.
    ///
    /// Returns `true` when the event was consumed (a tracked key, the
    /// primary button, or a cursor move).
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key(code, event.state == ElementState::Pressed)
                } else {
                    false
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.primary_pressed = *state == ElementState::Pressed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                true
            }
            _ => false,
        }
    }

    /// Update the held flag for a control key.
    ///
    /// Returns `false` for keys this demo does not consume.
    pub fn key(&mut self, code: KeyCode, pressed: bool) -> bool {
        let slot = match code {
            KeyCode::Escape => &mut self.keys.escape,
            KeyCode::ArrowUp => &mut self.keys.up,
            KeyCode::ArrowDown => &mut self.keys.down,
            KeyCode::ArrowLeft => &mut self.keys.left,
            KeyCode::ArrowRight => &mut self.keys.right,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Copy of the current raw state, taken once per update tick.
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            keys: self.keys,
            primary_pressed: self.primary_pressed,
            cursor: self.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_stay_held_until_released() {
        let mut collector = InputCollector::new();

        assert!(collector.key(KeyCode::ArrowLeft, true));
        assert!(collector.snapshot().keys.left);
        // Still held on the next tick.
        assert!(collector.snapshot().keys.left);

        assert!(collector.key(KeyCode::ArrowLeft, false));
        assert!(!collector.snapshot().keys.left);
    }

    #[test]
    fn all_five_control_keys_are_tracked() {
        let mut collector = InputCollector::new();
        for code in [
            KeyCode::Escape,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
        ] {
            assert!(collector.key(code, true));
        }

        let keys = collector.snapshot().keys;
        assert!(keys.escape && keys.up && keys.down && keys.left && keys.right);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut collector = InputCollector::new();
        assert!(!collector.key(KeyCode::KeyW, true));
        assert_eq!(collector.snapshot(), InputSnapshot::default());
    }
}
