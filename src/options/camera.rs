use serde::{Deserialize, Serialize};

/// Camera projection and control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial eye position in world space.
    pub eye: [f32; 3],
    /// Orbit step per update tick, radians.
    pub orbit_step: f32,
    /// Vertical eye step per update tick, world units.
    pub lift_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 100.0,
            eye: [30.0, 30.0, 30.0],
            orbit_step: 0.05,
            lift_step: 1.0,
        }
    }
}
