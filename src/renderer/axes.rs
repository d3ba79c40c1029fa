//! World-axes debug overlay emission.

use super::immediate::{ImmediateBatch, Primitive};

/// Emit the three world axes as colored lines from the origin:
/// +X red, +Y yellow, +Z green.
pub fn emit(batch: &mut ImmediateBatch, length: f32) {
    batch.begin(Primitive::Lines);
    batch.color([1.0, 0.0, 0.0]);
    batch.vertex(0.0, 0.0, 0.0);
    batch.vertex(length, 0.0, 0.0);
    batch.color([1.0, 1.0, 0.0]);
    batch.vertex(0.0, 0.0, 0.0);
    batch.vertex(0.0, length, 0.0);
    batch.color([0.0, 1.0, 0.0]);
    batch.vertex(0.0, 0.0, 0.0);
    batch.vertex(0.0, 0.0, length);
    batch.end();
}
