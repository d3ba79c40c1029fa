//! GPU plumbing: context, framebuffer targets, and growable buffers.

/// Growable GPU buffers streamed to every frame.
pub mod dynamic_buffer;
/// Device, queue, surface, and swapchain configuration.
pub mod render_context;
/// MSAA color and depth attachments.
pub mod targets;

pub use render_context::{RenderContext, RenderContextError};
pub use targets::{FrameTargets, DEPTH_FORMAT};
