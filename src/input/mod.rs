//! Input handling: raw state collection and per-tick snapshots.

/// Folds winit window events into raw input state.
pub mod collector;
/// Copyable per-tick input snapshots.
pub mod snapshot;

pub use collector::InputCollector;
pub use snapshot::{HeldKeys, InputSnapshot};
