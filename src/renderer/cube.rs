//! Per-frame cube emission.

use super::immediate::{ImmediateBatch, Primitive};

/// Color of the cube's base ring (red).
pub const BASE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
/// Color of the cube's top ring (yellow).
pub const TOP_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Issue one axis-aligned cube of the given edge length, corner at the
/// origin, with a red-to-yellow vertical gradient.
///
/// A quad strip covers the bottom face, the -Z and +Z side faces, the top
/// face, and the closing edge back to the base; a second batch of quads
/// fills the remaining +X and -X faces. The first pair of quad vertices
/// inherits the base color left by the strip.
pub fn emit(batch: &mut ImmediateBatch, edge: f32) {
    let x = edge;

    batch.begin(Primitive::QuadStrip);
    batch.color(BASE_COLOR);
    batch.vertex(0.0, 0.0, 0.0);
    batch.vertex(x, 0.0, 0.0);
    batch.vertex(0.0, 0.0, x);
    batch.vertex(x, 0.0, x);
    batch.color(TOP_COLOR);
    batch.vertex(0.0, x, x);
    batch.vertex(x, x, x);
    batch.vertex(0.0, x, 0.0);
    batch.vertex(x, x, 0.0);
    batch.color(BASE_COLOR);
    batch.vertex(0.0, 0.0, 0.0);
    batch.vertex(x, 0.0, 0.0);
    batch.end();

    batch.begin(Primitive::Quads);
    batch.vertex(x, 0.0, 0.0);
    batch.vertex(x, 0.0, x);
    batch.color(TOP_COLOR);
    batch.vertex(x, x, x);
    batch.vertex(x, x, 0.0);

    batch.vertex(0.0, x, 0.0);
    batch.vertex(0.0, x, x);
    batch.color(BASE_COLOR);
    batch.vertex(0.0, 0.0, x);
    batch.vertex(0.0, 0.0, 0.0);
    batch.end();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_tessellates_into_six_faces_worth_of_triangles() {
        let mut batch = ImmediateBatch::new();
        emit(&mut batch, 10.0);

        // Strip: 10 vertices -> 4 quads; quads: 8 vertices -> 2 quads.
        // 6 quads * 2 triangles * 3 vertices.
        assert_eq!(batch.triangle_vertices().len(), 36);
        assert!(batch.line_vertices().is_empty());
    }

    #[test]
    fn gradient_is_red_at_base_and_yellow_at_top() {
        let mut batch = ImmediateBatch::new();
        emit(&mut batch, 10.0);

        for vertex in batch.triangle_vertices() {
            if vertex.position[1] == 0.0 {
                assert_eq!(vertex.color, BASE_COLOR, "base vertex {vertex:?}");
            } else {
                assert_eq!(vertex.position[1], 10.0);
                assert_eq!(vertex.color, TOP_COLOR, "top vertex {vertex:?}");
            }
        }
    }

    #[test]
    fn geometry_spans_the_cube_volume() {
        let mut batch = ImmediateBatch::new();
        emit(&mut batch, 10.0);

        for vertex in batch.triangle_vertices() {
            for component in vertex.position {
                assert!(component == 0.0 || component == 10.0);
            }
        }
    }
}
