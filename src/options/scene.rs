use serde::{Deserialize, Serialize};

/// Scene content parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Cube edge length in world units.
    pub edge_length: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self { edge_length: 10.0 }
    }
}
