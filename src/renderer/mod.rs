//! Scene rendering: immediate-mode batching and the per-frame pass.

/// World-axes debug overlay emission.
pub mod axes;
/// Per-frame cube emission.
pub mod cube;
/// Immediate-mode vertex batching.
pub mod immediate;
/// The per-frame scene pass.
pub mod scene_renderer;

pub use immediate::{ImmediateBatch, Primitive, Vertex};
pub use scene_renderer::SceneRenderer;
