//! Projection parameters and the GPU camera uniform.

use glam::{Mat4, Vec3};

use crate::camera::controller::CameraState;

/// Fixed world up direction.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Perspective projection parameters.
///
/// The aspect ratio follows the window; field of view and clip planes are
/// fixed configuration. The matrix is recomputed on every [`rebuild`]
/// (startup and each resize), never per frame.
///
/// [`rebuild`]: Projection::rebuild
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    aspect: f32,
    matrix: Mat4,
}

impl Projection {
    /// Create a projection for the given viewport size.
    #[must_use]
    pub fn new(fovy: f32, znear: f32, zfar: f32, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fovy,
            znear,
            zfar,
            aspect: 1.0,
            matrix: Mat4::IDENTITY,
        };
        projection.rebuild(width, height);
        projection
    }

    /// Recompute the aspect ratio and the projection matrix for a viewport
    /// size. Runs unconditionally, even when the numeric ratio is unchanged.
    pub fn rebuild(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
        self.matrix = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    /// Current viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// The projection matrix computed at the last [`rebuild`](Self::rebuild).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

/// View matrix for the given camera state (right-handed look-at, fixed
/// [`WORLD_UP`]).
#[must_use]
pub fn view_matrix(camera: &CameraState) -> Mat4 {
    Mat4::look_at_rh(camera.eye, camera.target, WORLD_UP)
}

/// GPU uniform holding the combined view-projection matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// A new uniform with an identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Store the combined matrix for the given view and projection.
    pub fn set_view_proj(&mut self, view: Mat4, proj: Mat4) {
        self.view_proj = (proj * view).to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_recomputes_matrix_even_for_equal_aspect() {
        let mut projection = Projection::new(45.0, 1.0, 100.0, 800, 600);
        let before = projection.matrix();

        // 800x600 and 1024x768 are both 4:3; the matrix must still be
        // freshly computed, landing on the same value.
        projection.rebuild(1024, 768);
        assert_eq!(projection.aspect(), 800.0 / 600.0);
        assert_eq!(projection.matrix(), before);

        projection.rebuild(1600, 600);
        assert!(projection.matrix() != before);
    }

    #[test]
    fn view_matrix_uses_eye_target_and_world_up() {
        let camera = CameraState {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            orbit_angle: 0.0,
            orbit_radius: 10.0,
        };
        let expected = Mat4::look_at_rh(camera.eye, camera.target, Vec3::Y);
        assert_eq!(view_matrix(&camera), expected);
    }

    #[test]
    fn uniform_combines_projection_and_view() {
        let projection = Projection::new(45.0, 1.0, 100.0, 800, 600);
        let view = Mat4::look_at_rh(Vec3::new(30.0, 30.0, 30.0), Vec3::ZERO, Vec3::Y);

        let mut uniform = CameraUniform::new();
        uniform.set_view_proj(view, projection.matrix());

        let expected = (projection.matrix() * view).to_cols_array_2d();
        assert_eq!(uniform.view_proj, expected);
    }
}
