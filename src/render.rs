use crate::core::trail::TrailBuffer;
use web_sys as web;

mod helpers;
mod hero;
pub mod text;

use hero::{create_hero_bind_group, create_hero_resources, HeroResources, HeroUniforms};
use text::TextImage;

// ===================== WebGPU state for the hero surface =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    hero: HeroResources,
    linear_sampler: wgpu::Sampler,
    // Kept alive for the bind group
    _text_tex: wgpu::Texture,
    text_bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, text: &TextImage) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // The hero overlays page content, so prefer a premultiplied canvas.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hero = create_hero_resources(&device, format);
        let linear_sampler = helpers::create_linear_sampler(&device);
        let (text_tex, text_view) = upload_text(&device, &queue, text);
        let text_bind_group = create_hero_bind_group(&device, &hero, &text_view, &linear_sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            hero,
            linear_sampler,
            _text_tex: text_tex,
            text_bind_group,
            width,
            height,
        })
    }

    /// Replace the wordmark texture, e.g. after the aspect ratio changed.
    pub fn set_text(&mut self, text: &TextImage) {
        let (tex, view) = upload_text(&self.device, &self.queue, text);
        self.text_bind_group =
            create_hero_bind_group(&self.device, &self.hero, &view, &self.linear_sampler);
        self._text_tex = tex;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, time_sec: f32, trail: &TrailBuffer) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = HeroUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: time_sec,
            _pad: 0.0,
            trail: trail.packed(),
        };
        self.queue
            .write_buffer(&self.hero.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.hero.pipeline);
            rpass.set_bind_group(0, &self.text_bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn upload_text(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    text: &TextImage,
) -> (wgpu::Texture, wgpu::TextureView) {
    let (tex, view) = helpers::create_color_texture_device(
        device,
        "hero_text",
        text.width,
        text.height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    helpers::upload_rgba(queue, &tex, text.width, text.height, &text.rgba);
    (tex, view)
}
