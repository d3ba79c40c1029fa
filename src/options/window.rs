use serde::{Deserialize, Serialize};

/// Window and surface parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowOptions {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Requested multisample count; negotiated down when the surface format
    /// supports less.
    pub sample_count: u32,
    /// Present frames in sync with the display refresh.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            sample_count: 8,
            vsync: true,
        }
    }
}
