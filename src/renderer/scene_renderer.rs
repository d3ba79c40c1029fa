//! The per-frame scene pass.
//!
//! Clears color and depth, uploads the view-projection matrix rebuilt from
//! the current camera state, re-issues the frame's geometry through the
//! immediate batcher, and presents.

use glam::Mat4;

use super::immediate::{ImmediateBatch, Vertex};
use super::{axes, cube};
use crate::camera::core::CameraUniform;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::targets::{FrameTargets, DEPTH_FORMAT};
use crate::options::DebugOptions;
use crate::scene::SceneObject;

/// Background clear color (dark gray).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.66,
    g: 0.66,
    b: 0.66,
    a: 1.0,
};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// Renders the scene through the immediate-mode batcher.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform: CameraUniform,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: TypedBuffer<Vertex>,
    line_buffer: TypedBuffer<Vertex>,
    batch: ImmediateBatch,
}

impl SceneRenderer {
    /// Create the pipelines and buffers for the scene pass.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Immediate Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/immediate.wgsl").into(),
            ),
        });

        let uniform = CameraUniform::new();
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = create_pipeline(
            context,
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::TriangleList,
            "Scene Pipeline",
        );
        let line_pipeline = create_pipeline(
            context,
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::LineList,
            "Overlay Line Pipeline",
        );

        let vertex_buffer =
            TypedBuffer::new(device, "Immediate Vertex Buffer", 256, wgpu::BufferUsages::VERTEX);
        let line_buffer =
            TypedBuffer::new(device, "Immediate Line Buffer", 16, wgpu::BufferUsages::VERTEX);

        Self {
            pipeline,
            line_pipeline,
            uniform,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            line_buffer,
            batch: ImmediateBatch::new(),
        }
    }

    /// Upload a view-projection matrix. Called on resize to establish the
    /// look direction before the first render tick, and again every frame.
    pub fn write_camera(&mut self, context: &RenderContext, view: Mat4, proj: Mat4) {
        self.uniform.set_view_proj(view, proj);
        context
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; the host decides whether to reconfigure or drop the frame.
    pub fn render(
        &mut self,
        context: &RenderContext,
        targets: &FrameTargets,
        view: Mat4,
        proj: Mat4,
        object: &SceneObject,
        debug: &DebugOptions,
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_camera(context, view, proj);

        // Re-issue the geometry; nothing is retained across frames.
        self.batch.clear();
        cube::emit(&mut self.batch, object.edge_length());
        if debug.show_axes {
            axes::emit(&mut self.batch, debug.axis_length);
        }
        let _ = self
            .vertex_buffer
            .write(&context.device, &context.queue, self.batch.triangle_vertices());
        let _ = self
            .line_buffer
            .write(&context.device, &context.queue, self.batch.line_vertices());

        let frame = context.get_next_frame()?;
        let surface_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context.create_encoder();
        {
            let (color_view, resolve_target) = targets.color_attachment(&surface_view);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: targets.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.vertex_buffer.buffer().slice(..));
            pass.draw(0..self.vertex_buffer.count() as u32, 0..1);

            if !self.line_buffer.is_empty() {
                pass.set_pipeline(&self.line_pipeline);
                pass.set_vertex_buffer(0, self.line_buffer.buffer().slice(..));
                pass.draw(0..self.line_buffer.count() as u32, 0..1);
            }
        }
        context.submit(encoder);
        frame.present();

        Ok(())
    }
}

fn create_pipeline(
    context: &RenderContext,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            // Quads are emitted with mixed windings; no culling.
            primitive: wgpu::PrimitiveState {
                topology,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: context.sample_count(),
                ..Default::default()
            },
            multiview: None,
            cache: None,
        })
}
