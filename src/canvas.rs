use crate::{Arrive, Blame};
use std::sync::Arc;

/// Colour of the board background.
pub const WOOD: wgpu::Color = wgpu::Color {
    r: 0.86,
    g: 0.69,
    b: 0.42,
    a: 1.0,
};

/// Background while scoring, a bit darker so the territory stands out.
pub const DUSK: wgpu::Color = wgpu::Color {
    r: 0.62,
    g: 0.50,
    b: 0.31,
    a: 1.0,
};

/// The `Canvas` struct holds the GPU side of a window: the surface we paint on, and the device
/// and queue that do the painting.
///
/// Getting hold of a device is async, so we build the canvas on a [`tokio`] task and send it back
/// to the event loop when it is ready.  Until then the window simply has no canvas, and draw
/// passes are no-ops.
#[derive(Debug, derive_getters::Getters)]
pub struct Canvas {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
}

impl Canvas {
    /// Creates a canvas for `window`.
    ///
    /// Will [`Blame::CreateSurface`] if the window refuses a surface, [`Blame::NoAdapter`] if no
    /// adapter is compatible with it, and [`Blame::RequestDevice`] if the adapter will not give
    /// us a device.
    #[tracing::instrument(skip_all)]
    pub async fn new(window: Arc<winit::window::Window>) -> Arrive<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(Blame::NoAdapter)?;
        tracing::trace!("Adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Hoshi Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(Blame::NoAdapter)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        tracing::trace!("Surface configured at {}x{}.", config.width, config.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigures the surface for a new window size.  Zero-sized windows (minimized) keep the
    /// old configuration.
    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.size = size;
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Paints the background pass in `colour`.
    ///
    /// Will [`Blame::Surface`] if the next texture is unavailable.  A lost or outdated surface can
    /// be recovered with [`Canvas::resize`].
    pub fn render(&self, colour: wgpu::Color) -> Arrive<()> {
        let texture = self.surface.get_current_texture()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Board Encoder"),
            });

        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Board Background"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colour),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        texture.present();
        Ok(())
    }
}
