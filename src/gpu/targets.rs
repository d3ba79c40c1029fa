//! Framebuffer attachments owned outside the swapchain.

/// Depth buffer format: 24-bit depth, no stencil.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Multisampled color target and depth target, sized to the surface.
///
/// Rebuilt whenever the surface is reconfigured; the color target is only
/// allocated when multisampling is active (otherwise the pass renders
/// straight into the swapchain texture).
pub struct FrameTargets {
    msaa: Option<wgpu::TextureView>,
    depth: wgpu::TextureView,
    sample_count: u32,
}

impl FrameTargets {
    /// Create attachments matching the surface configuration.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
    ) -> Self {
        let msaa = (sample_count > 1)
            .then(|| attachment(device, config, sample_count, config.format, "MSAA Color Target"));
        let depth = attachment(device, config, sample_count, DEPTH_FORMAT, "Depth Target");
        Self {
            msaa,
            depth,
            sample_count,
        }
    }

    /// Color attachment view and resolve target for an acquired swapchain
    /// view.
    #[must_use]
    pub fn color_attachment<'a>(
        &'a self,
        surface_view: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa {
            Some(msaa) => (msaa, Some(surface_view)),
            None => (surface_view, None),
        }
    }

    /// The depth attachment view.
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth
    }

    /// The sample count these attachments were created with.
    #[must_use]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }
}

fn attachment(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
    format: wgpu::TextureFormat,
    label: &str,
) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: config.width.max(1),
                height: config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}
