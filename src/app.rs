//! The cube demo application.
//!
//! Owns the GPU context, the renderer, and the camera/drag state, and wires
//! them to the host through [`FrameHooks`]. Camera state lives here as
//! plain values; each update tick replaces them with the controller's
//! output.

use std::sync::Arc;

use glam::Vec3;
use winit::window::Window;

use crate::camera::controller::{CameraState, MouseDragState, OrbitController};
use crate::camera::core::{view_matrix, Projection};
use crate::error::CubeviewError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::targets::FrameTargets;
use crate::hooks::{FrameHooks, UpdateFlow};
use crate::input::InputSnapshot;
use crate::options::{DebugOptions, Options};
use crate::renderer::SceneRenderer;
use crate::scene::SceneObject;

/// Demo application: one cube, one orbiting camera.
pub struct CubeApp {
    context: RenderContext,
    targets: FrameTargets,
    renderer: SceneRenderer,
    projection: Projection,
    controller: OrbitController,
    camera: CameraState,
    drag: MouseDragState,
    scene: SceneObject,
    debug: DebugOptions,
}

impl CubeApp {
    /// Build the application against a live window surface.
    ///
    /// The camera starts at the configured eye position and is framed from
    /// the scene descriptor (look-at target at the cube center, orbit
    /// distance of five edge lengths).
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Gpu`] when the GPU context cannot be
    /// initialized.
    pub async fn new(
        window: Arc<Window>,
        size: (u32, u32),
        options: &Options,
    ) -> Result<Self, CubeviewError> {
        let context = RenderContext::new(
            window,
            size,
            options.window.sample_count,
            options.window.vsync,
        )
        .await?;
        let targets =
            FrameTargets::new(&context.device, &context.config, context.sample_count());
        let renderer = SceneRenderer::new(&context);

        let scene = SceneObject::cube(options.scene.edge_length);
        let mut camera = CameraState::new(Vec3::from(options.camera.eye));
        camera.frame(&scene);

        let projection = Projection::new(
            options.camera.fovy,
            options.camera.znear,
            options.camera.zfar,
            size.0,
            size.1,
        );
        let controller =
            OrbitController::new(options.camera.orbit_step, options.camera.lift_step);

        Ok(Self {
            context,
            targets,
            renderer,
            projection,
            controller,
            camera,
            drag: MouseDragState::default(),
            scene,
            debug: options.debug.clone(),
        })
    }

    /// Descriptive adapter string the host puts in the window title.
    #[must_use]
    pub fn adapter_description(&self) -> String {
        self.context.adapter_description()
    }
}

impl FrameHooks for CubeApp {
    fn on_resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.targets = FrameTargets::new(
            &self.context.device,
            &self.context.config,
            self.context.sample_count(),
        );

        // The projection is rebuilt on every resize, even when the numeric
        // aspect ratio did not change; the view matrix is re-uploaded with
        // it so the look direction is established before the next render
        // tick.
        self.projection
            .rebuild(self.context.config.width, self.context.config.height);
        self.renderer.write_camera(
            &self.context,
            view_matrix(&self.camera),
            self.projection.matrix(),
        );
        log::debug!(
            "resize: {}x{} (aspect {})",
            self.context.config.width,
            self.context.config.height,
            self.projection.aspect()
        );
    }

    fn on_update(&mut self, input: &InputSnapshot, _dt: f32) -> UpdateFlow {
        let step = self.controller.step(&self.camera, &self.drag, input);
        self.camera = step.camera;
        self.drag = step.drag;
        if step.exit_requested {
            UpdateFlow::Exit
        } else {
            UpdateFlow::Continue
        }
    }

    fn on_render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.renderer.render(
            &self.context,
            &self.targets,
            view_matrix(&self.camera),
            self.projection.matrix(),
            &self.scene,
            &self.debug,
        )
    }
}
