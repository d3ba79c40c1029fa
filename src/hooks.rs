//! Host/application capability contract.
//!
//! The window host owns the event loop and drives an implementation of
//! [`FrameHooks`] through three lifecycle calls, so the application never
//! inherits from or reaches into the windowing framework.

use crate::input::InputSnapshot;

/// What the host should do after an update tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlow {
    /// Keep running.
    Continue,
    /// Exit the event loop before the next render tick.
    Exit,
}

/// Lifecycle hooks driven by the window host.
pub trait FrameHooks {
    /// The window surface changed size (also called once after creation,
    /// before the first render tick).
    fn on_resize(&mut self, width: u32, height: u32);

    /// A fixed-rate update tick with the input snapshot taken for this
    /// tick. `dt` is the nominal tick duration in seconds.
    fn on_update(&mut self, input: &InputSnapshot, dt: f32) -> UpdateFlow;

    /// A render tick. Surface errors bubble up for the host to recover
    /// from (reconfigure or drop the frame).
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired.
    fn on_render(&mut self) -> Result<(), wgpu::SurfaceError>;
}
