//! Scene object descriptors.
//!
//! The scene holds exactly one object: an axis-aligned cube with one corner
//! at the origin. The descriptor exposes the geometric facts the camera
//! needs (centroid, comfortable orbit distance) so that framing never
//! depends on the renderer having issued any draw calls.

use glam::Vec3;

/// Descriptor for the cube in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    edge_length: f32,
}

impl SceneObject {
    /// Multiplier from edge length to the camera's orbit distance.
    const ORBIT_DISTANCE_FACTOR: f32 = 5.0;

    /// An axis-aligned cube of the given edge length, corner at the origin.
    #[must_use]
    pub fn cube(edge_length: f32) -> Self {
        Self { edge_length }
    }

    /// Edge length in world units.
    #[must_use]
    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    /// Centroid of the object; also the camera's look-at target.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::splat(self.edge_length / 2.0)
    }

    /// Orbit distance giving a comfortable view of the whole object.
    #[must_use]
    pub fn orbit_distance(&self) -> f32 {
        self.edge_length * Self::ORBIT_DISTANCE_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_center_is_half_edge_on_each_axis() {
        let object = SceneObject::cube(10.0);
        assert_eq!(object.center(), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn orbit_distance_is_five_edges() {
        let object = SceneObject::cube(10.0);
        assert_eq!(object.orbit_distance(), 50.0);
    }
}
