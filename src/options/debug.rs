use serde::{Deserialize, Serialize};

/// Debug overlay options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugOptions {
    /// Draw the world axes overlay.
    pub show_axes: bool,
    /// Axis line length in world units.
    pub axis_length: f32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_axes: false,
            axis_length: 75.0,
        }
    }
}
