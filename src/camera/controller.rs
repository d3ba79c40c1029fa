//! Orbit/zoom camera state machine.
//!
//! The controller is a pure function over value state: each update tick it
//! takes the previous [`CameraState`] and [`MouseDragState`] together with
//! the tick's [`InputSnapshot`] and returns the next states plus an
//! exit-requested flag. No window or GPU types appear here, so the whole
//! control scheme is unit-testable headlessly.

use glam::{Vec2, Vec3};

use crate::input::InputSnapshot;
use crate::scene::SceneObject;

/// Camera state mutated by the controller every update tick.
///
/// The eye position is recomputed from `orbit_angle` and `orbit_radius`
/// whenever a horizontal orbit step is applied; vertical movement is
/// independent and additive on `eye.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Horizontal orbit angle around the target's vertical axis, radians.
    pub orbit_angle: f32,
    /// Horizontal orbit radius, world units.
    pub orbit_radius: f32,
}

impl CameraState {
    /// Initial state for the given eye position: target at the origin,
    /// orbit radius zero, orbit angle derived from the eye's horizontal
    /// direction.
    #[must_use]
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            orbit_angle: eye.z.atan2(eye.x),
            orbit_radius: 0.0,
        }
    }

    /// Frame the camera around a scene object: look at its center and adopt
    /// its orbit distance.
    pub fn frame(&mut self, object: &SceneObject) {
        self.target = object.center();
        self.orbit_radius = object.orbit_distance();
    }

    /// Place the eye on the horizontal orbit circle for the current angle
    /// and radius. `eye.y` is untouched.
    fn place_on_orbit(&mut self) {
        self.eye.x = self.orbit_radius * self.orbit_angle.cos();
        self.eye.z = self.orbit_radius * self.orbit_angle.sin();
    }
}

/// Phase of the primary-button drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Button up.
    #[default]
    Released,
    /// Button went down this tick; the anchor was just recorded.
    JustPressed,
    /// Button held across ticks; deltas are measured from the anchor.
    Dragging,
}

/// Drag gesture state, re-evaluated from the polled button every tick.
///
/// The anchor is only meaningful while the phase is not
/// [`DragPhase::Released`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseDragState {
    /// Current gesture phase.
    pub phase: DragPhase,
    /// Cursor position the next drag delta is measured from.
    pub anchor: Vec2,
}

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraStep {
    /// Camera state after the tick.
    pub camera: CameraState,
    /// Drag state after the tick.
    pub drag: MouseDragState,
    /// The host should exit before the next render tick.
    pub exit_requested: bool,
}

/// Zoom factor for a vertical drag delta (positive = upward drag).
///
/// Upward drags grow the factor toward 2 as the delta grows; downward drags
/// shrink it, with the denominator floored at 10 so the factor stays finite
/// and inside (0, 1). A zero delta yields exactly 1.
#[must_use]
pub fn zoom_factor(delta: f32) -> f32 {
    if delta < 0.0 {
        1.0 - 1.0 / (100.0 + delta).max(10.0)
    } else {
        1.0 + delta / (delta + 1000.0)
    }
}

/// Per-tick camera control: mouse-drag zoom plus arrow-key orbit and lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitController {
    orbit_step: f32,
    lift_step: f32,
}

impl OrbitController {
    /// Controller with the given per-tick orbit step (radians) and vertical
    /// lift step (world units).
    #[must_use]
    pub fn new(orbit_step: f32, lift_step: f32) -> Self {
        Self {
            orbit_step,
            lift_step,
        }
    }

    /// Advance camera and drag state by one update tick.
    ///
    /// Several keys may apply in the same tick; the mouse gesture is
    /// evaluated first, then Escape, then the vertical and horizontal keys.
    #[must_use]
    pub fn step(
        &self,
        camera: &CameraState,
        drag: &MouseDragState,
        input: &InputSnapshot,
    ) -> CameraStep {
        let mut camera = *camera;
        let mut drag = *drag;

        if input.primary_pressed {
            if drag.phase == DragPhase::Released {
                // Gesture start: record the anchor, move nothing this tick.
                drag.phase = DragPhase::JustPressed;
                drag.anchor = input.cursor;
            } else {
                drag.phase = DragPhase::Dragging;
                let delta = drag.anchor.y - input.cursor.y;
                if delta != 0.0 {
                    let factor = zoom_factor(delta);
                    camera.eye *= factor;
                    // Multiplies the XY-plane magnitude into the existing
                    // radius; see DESIGN.md before changing either part.
                    camera.orbit_radius *= camera.eye.truncate().length();
                    drag.anchor = input.cursor;
                    log::trace!(
                        "drag delta {delta}, zoom factor {factor}, orbit radius {}",
                        camera.orbit_radius
                    );
                }
            }
        } else {
            drag.phase = DragPhase::Released;
        }

        let keys = input.keys;
        let exit_requested = keys.escape;

        if keys.up {
            camera.eye.y += self.lift_step;
        }
        if keys.down {
            camera.eye.y -= self.lift_step;
        }
        if keys.left {
            camera.orbit_angle -= self.orbit_step;
            camera.place_on_orbit();
        }
        if keys.right {
            camera.orbit_angle += self.orbit_step;
            camera.place_on_orbit();
        }

        log::trace!(
            "orbit angle {} (cos {}, sin {})",
            camera.orbit_angle,
            camera.orbit_angle.cos(),
            camera.orbit_angle.sin()
        );

        CameraStep {
            camera,
            drag,
            exit_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HeldKeys;

    const TOLERANCE: f32 = 1e-5;

    fn controller() -> OrbitController {
        OrbitController::new(0.05, 1.0)
    }

    fn camera() -> CameraState {
        let mut camera = CameraState::new(Vec3::new(30.0, 30.0, 30.0));
        camera.frame(&SceneObject::cube(10.0));
        camera
    }

    fn keys(keys: HeldKeys) -> InputSnapshot {
        InputSnapshot {
            keys,
            ..InputSnapshot::default()
        }
    }

    fn mouse(pressed: bool, x: f32, y: f32) -> InputSnapshot {
        InputSnapshot {
            primary_pressed: pressed,
            cursor: Vec2::new(x, y),
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn shrink_factor_stays_inside_unit_interval() {
        for delta in 1..=2000 {
            let factor = zoom_factor(-(delta as f32));
            assert!(factor > 0.0 && factor < 1.0, "delta -{delta}: {factor}");
            assert!(factor >= 0.9, "delta -{delta}: {factor}");
        }
    }

    #[test]
    fn shrink_factor_floors_at_nine_tenths() {
        assert_eq!(zoom_factor(-90.0), 0.9);
        assert_eq!(zoom_factor(-100.0), 0.9);
        assert_eq!(zoom_factor(-1.0e6), 0.9);
    }

    #[test]
    fn growth_factor_stays_below_two() {
        for delta in 1..=2000 {
            let factor = zoom_factor(delta as f32);
            assert!(factor > 1.0 && factor < 2.0, "delta {delta}: {factor}");
        }
        assert!(zoom_factor(1.0e6) > 1.99);
    }

    #[test]
    fn zero_delta_is_identity() {
        assert_eq!(zoom_factor(0.0), 1.0);
    }

    #[test]
    fn framing_adopts_center_and_orbit_distance() {
        let mut state = CameraState::new(Vec3::new(30.0, 30.0, 30.0));
        assert_eq!(state.orbit_radius, 0.0);

        state.frame(&SceneObject::cube(10.0));
        assert_eq!(state.orbit_radius, 50.0);
        assert_eq!(state.target, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn orbit_keys_place_eye_exactly_on_circle() {
        let start = camera();
        let step = controller().step(
            &start,
            &MouseDragState::default(),
            &keys(HeldKeys {
                left: true,
                ..HeldKeys::default()
            }),
        );

        let angle = start.orbit_angle - 0.05;
        assert_eq!(step.camera.orbit_angle, angle);
        assert_eq!(step.camera.eye.x, start.orbit_radius * angle.cos());
        assert_eq!(step.camera.eye.z, start.orbit_radius * angle.sin());
        assert_eq!(step.camera.eye.y, start.eye.y);
    }

    #[test]
    fn four_lefts_then_four_rights_restore_the_angle() {
        let ctrl = controller();
        let mut state = camera();
        let start_angle = state.orbit_angle;
        let drag = MouseDragState::default();

        for _ in 0..4 {
            state = ctrl
                .step(
                    &state,
                    &drag,
                    &keys(HeldKeys {
                        left: true,
                        ..HeldKeys::default()
                    }),
                )
                .camera;
        }
        for _ in 0..4 {
            state = ctrl
                .step(
                    &state,
                    &drag,
                    &keys(HeldKeys {
                        right: true,
                        ..HeldKeys::default()
                    }),
                )
                .camera;
        }

        assert!((state.orbit_angle - start_angle).abs() < TOLERANCE);
    }

    #[test]
    fn lift_keys_move_eye_y_only() {
        let start = camera();
        let ctrl = controller();
        let drag = MouseDragState::default();

        let up = ctrl
            .step(
                &start,
                &drag,
                &keys(HeldKeys {
                    up: true,
                    ..HeldKeys::default()
                }),
            )
            .camera;
        assert_eq!(up.eye, start.eye + Vec3::new(0.0, 1.0, 0.0));

        let down = ctrl
            .step(
                &start,
                &drag,
                &keys(HeldKeys {
                    down: true,
                    ..HeldKeys::default()
                }),
            )
            .camera;
        assert_eq!(down.eye, start.eye - Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn escape_requests_exit() {
        let step = controller().step(
            &camera(),
            &MouseDragState::default(),
            &keys(HeldKeys {
                escape: true,
                ..HeldKeys::default()
            }),
        );
        assert!(step.exit_requested);
    }

    #[test]
    fn press_records_anchor_without_moving() {
        let start = camera();
        let step = controller().step(
            &start,
            &MouseDragState::default(),
            &mouse(true, 100.0, 100.0),
        );

        assert_eq!(step.drag.phase, DragPhase::JustPressed);
        assert_eq!(step.drag.anchor, Vec2::new(100.0, 100.0));
        assert_eq!(step.camera.eye, start.eye);
        assert!(!step.exit_requested);
    }

    #[test]
    fn release_resets_the_phase() {
        let drag = MouseDragState {
            phase: DragPhase::Dragging,
            anchor: Vec2::new(100.0, 100.0),
        };
        let step = controller().step(&camera(), &drag, &mouse(false, 50.0, 50.0));
        assert_eq!(step.drag.phase, DragPhase::Released);
    }

    #[test]
    fn upward_drag_scales_eye_and_advances_anchor() {
        let start = camera();
        let drag = MouseDragState {
            phase: DragPhase::JustPressed,
            anchor: Vec2::new(100.0, 100.0),
        };
        let step = controller().step(&start, &drag, &mouse(true, 100.0, 80.0));

        // delta = 100 - 80 = 20, factor = 1 + 20/1020.
        let factor = 1.0 + 20.0 / 1020.0;
        assert_eq!(step.drag.phase, DragPhase::Dragging);
        assert_eq!(step.drag.anchor, Vec2::new(100.0, 80.0));
        assert!((step.camera.eye.x - start.eye.x * factor).abs() < TOLERANCE);
        assert!((step.camera.eye.y - start.eye.y * factor).abs() < TOLERANCE);
        assert!((step.camera.eye.z - start.eye.z * factor).abs() < TOLERANCE);
    }

    #[test]
    fn drag_radius_compounds_with_horizontal_magnitude() {
        let start = camera();
        let drag = MouseDragState {
            phase: DragPhase::Dragging,
            anchor: Vec2::new(100.0, 100.0),
        };
        let step = controller().step(&start, &drag, &mouse(true, 100.0, 80.0));

        let expected = start.orbit_radius * step.camera.eye.truncate().length();
        assert!((step.camera.orbit_radius - expected).abs() < TOLERANCE);
    }

    #[test]
    fn still_cursor_while_held_changes_nothing() {
        let start = camera();
        let drag = MouseDragState {
            phase: DragPhase::JustPressed,
            anchor: Vec2::new(100.0, 100.0),
        };
        let step = controller().step(&start, &drag, &mouse(true, 100.0, 100.0));

        assert_eq!(step.drag.phase, DragPhase::Dragging);
        assert_eq!(step.drag.anchor, Vec2::new(100.0, 100.0));
        assert_eq!(step.camera, start);
    }
}
