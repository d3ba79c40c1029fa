//! Immediate-mode vertex batching.
//!
//! Geometry is specified as a sequence of `begin`/`color`/`vertex`/`end`
//! calls each frame and tessellated into a triangle or line stream; nothing
//! is retained between frames. The stream is uploaded to the GPU by the
//! scene renderer after every frame's emission.

/// A single colored vertex in the stream.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
}

/// Interpretation of the vertices recorded between `begin` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Connected quads: after the first pair, every further pair of
    /// vertices closes another quad sharing the previous pair's edge.
    QuadStrip,
    /// Independent quads, four vertices each in perimeter order.
    Quads,
    /// Independent line segments, two vertices each.
    Lines,
}

/// Records immediate-mode calls and tessellates them into draw streams.
///
/// The current color is sticky: it persists across `begin`/`end`
/// boundaries until the next [`color`](Self::color) call, so a batch may
/// deliberately inherit the color left by the previous one.
#[derive(Debug)]
pub struct ImmediateBatch {
    triangles: Vec<Vertex>,
    lines: Vec<Vertex>,
    pending: Vec<Vertex>,
    primitive: Option<Primitive>,
    color: [f32; 3],
}

impl Default for ImmediateBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmediateBatch {
    /// An empty batch with the current color set to white.
    #[must_use]
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            lines: Vec::new(),
            pending: Vec::new(),
            primitive: None,
            color: [1.0, 1.0, 1.0],
        }
    }

    /// Drop all recorded geometry for a new frame. The current color is
    /// kept, matching the sticky-color convention.
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
        self.pending.clear();
        self.primitive = None;
    }

    /// Start a primitive run; an open run is closed first.
    pub fn begin(&mut self, primitive: Primitive) {
        if self.primitive.is_some() {
            self.end();
        }
        self.primitive = Some(primitive);
    }

    /// Set the sticky current color.
    pub fn color(&mut self, rgb: [f32; 3]) {
        self.color = rgb;
    }

    /// Append a vertex carrying the current color to the open run.
    /// Vertices outside a `begin`/`end` pair are dropped.
    pub fn vertex(&mut self, x: f32, y: f32, z: f32) {
        if self.primitive.is_some() {
            self.pending.push(Vertex {
                position: [x, y, z],
                color: self.color,
            });
        }
    }

    /// Close the current run and tessellate it into the draw streams.
    pub fn end(&mut self) {
        let Some(primitive) = self.primitive.take() else {
            return;
        };
        match primitive {
            Primitive::QuadStrip => self.tessellate_quad_strip(),
            Primitive::Quads => self.tessellate_quads(),
            Primitive::Lines => {
                let pairs = self.pending.len() / 2 * 2;
                self.lines.extend_from_slice(&self.pending[..pairs]);
            }
        }
        self.pending.clear();
    }

    /// Tessellated triangle-list vertices recorded this frame.
    #[must_use]
    pub fn triangle_vertices(&self) -> &[Vertex] {
        &self.triangles
    }

    /// Line-list vertices recorded this frame.
    #[must_use]
    pub fn line_vertices(&self) -> &[Vertex] {
        &self.lines
    }

    /// Two triangles for a quad given in perimeter order.
    fn push_quad(&mut self, a: Vertex, b: Vertex, c: Vertex, d: Vertex) {
        self.triangles.extend_from_slice(&[a, b, c, a, c, d]);
    }

    fn tessellate_quad_strip(&mut self) {
        // Quad k spans strip vertices 2k..2k+3; within each quad the last
        // pair is swapped to restore perimeter order.
        let mut i = 0;
        while i + 3 < self.pending.len() {
            let (a, b, c, d) = (
                self.pending[i],
                self.pending[i + 1],
                self.pending[i + 3],
                self.pending[i + 2],
            );
            self.push_quad(a, b, c, d);
            i += 2;
        }
    }

    fn tessellate_quads(&mut self) {
        let mut i = 0;
        while i + 3 < self.pending.len() {
            let (a, b, c, d) = (
                self.pending[i],
                self.pending[i + 1],
                self.pending[i + 2],
                self.pending[i + 3],
            );
            self.push_quad(a, b, c, d);
            i += 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 3] = [1.0, 0.0, 0.0];
    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    fn unit_square(batch: &mut ImmediateBatch) {
        batch.vertex(0.0, 0.0, 0.0);
        batch.vertex(1.0, 0.0, 0.0);
        batch.vertex(1.0, 1.0, 0.0);
        batch.vertex(0.0, 1.0, 0.0);
    }

    #[test]
    fn quad_strip_tessellates_two_triangles_per_quad() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::QuadStrip);
        for i in 0..10 {
            batch.vertex(i as f32, 0.0, 0.0);
        }
        batch.end();

        // 10 strip vertices close 4 quads, 8 triangles, 24 vertices.
        assert_eq!(batch.triangle_vertices().len(), 24);
    }

    #[test]
    fn quad_strip_restores_perimeter_order() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::QuadStrip);
        batch.vertex(0.0, 0.0, 0.0);
        batch.vertex(1.0, 0.0, 0.0);
        batch.vertex(0.0, 1.0, 0.0);
        batch.vertex(1.0, 1.0, 0.0);
        batch.end();

        let positions: Vec<[f32; 3]> = batch
            .triangle_vertices()
            .iter()
            .map(|v| v.position)
            .collect();
        // Quad perimeter (v0, v1, v3, v2) split as (a, b, c) + (a, c, d).
        assert_eq!(
            positions,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn quads_consume_four_vertices_each() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::Quads);
        unit_square(&mut batch);
        unit_square(&mut batch);
        batch.end();

        assert_eq!(batch.triangle_vertices().len(), 12);
    }

    #[test]
    fn color_is_sticky_across_begin_end() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::Quads);
        batch.color(RED);
        unit_square(&mut batch);
        batch.end();

        // No color call: the second batch inherits red.
        batch.begin(Primitive::Quads);
        unit_square(&mut batch);
        batch.end();

        assert!(batch.triangle_vertices().iter().all(|v| v.color == RED));
    }

    #[test]
    fn color_change_applies_to_following_vertices_only() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::Quads);
        batch.color(RED);
        batch.vertex(0.0, 0.0, 0.0);
        batch.vertex(1.0, 0.0, 0.0);
        batch.color(GREEN);
        batch.vertex(1.0, 1.0, 0.0);
        batch.vertex(0.0, 1.0, 0.0);
        batch.end();

        let verts = batch.triangle_vertices();
        // (a, b, c) + (a, c, d) with a, b red and c, d green.
        assert_eq!(verts[0].color, RED);
        assert_eq!(verts[1].color, RED);
        assert_eq!(verts[2].color, GREEN);
        assert_eq!(verts[5].color, GREEN);
    }

    #[test]
    fn lines_drop_an_unpaired_trailing_vertex() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::Lines);
        batch.vertex(0.0, 0.0, 0.0);
        batch.vertex(1.0, 0.0, 0.0);
        batch.vertex(2.0, 0.0, 0.0);
        batch.end();

        assert_eq!(batch.line_vertices().len(), 2);
    }

    #[test]
    fn clear_drops_geometry_but_keeps_color() {
        let mut batch = ImmediateBatch::new();
        batch.begin(Primitive::Quads);
        batch.color(GREEN);
        unit_square(&mut batch);
        batch.end();
        batch.clear();

        assert!(batch.triangle_vertices().is_empty());
        assert!(batch.line_vertices().is_empty());

        batch.begin(Primitive::Quads);
        unit_square(&mut batch);
        batch.end();
        assert!(batch.triangle_vertices().iter().all(|v| v.color == GREEN));
    }
}
