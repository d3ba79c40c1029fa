//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (window, camera, scene, debug overlays) are
//! consolidated here. Options serialize to/from TOML; every sub-struct uses
//! `#[serde(default)]` so partial preset files (e.g. only overriding
//! `[debug]`) work correctly.

mod camera;
mod debug;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::CubeviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window and surface parameters.
    pub window: WindowOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Scene content parameters.
    pub scene: SceneOptions,
    /// Debug overlay options.
    pub debug: DebugOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Io`] when the file cannot be read and
    /// [`CubeviewError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, CubeviewError> {
        let content = std::fs::read_to_string(path).map_err(CubeviewError::Io)?;
        toml::from_str(&content).map_err(|e| CubeviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::OptionsParse`] on serialization failure and
    /// [`CubeviewError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CubeviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CubeviewError::Io)?;
        }
        std::fs::write(path, content).map_err(CubeviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_preset_keeps_defaults_elsewhere() {
        let parsed: Options = toml::from_str("[debug]\nshow_axes = true\n").unwrap();
        assert!(parsed.debug.show_axes);
        assert_eq!(parsed.debug.axis_length, 75.0);
        assert_eq!(parsed.window, WindowOptions::default());
        assert_eq!(parsed.camera, CameraOptions::default());
    }

    #[test]
    fn defaults_match_the_demo_contract() {
        let opts = Options::default();
        assert_eq!((opts.window.width, opts.window.height), (800, 600));
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.camera.znear, 1.0);
        assert_eq!(opts.camera.zfar, 100.0);
        assert_eq!(opts.scene.edge_length, 10.0);
        assert!(!opts.debug.show_axes);
    }
}
