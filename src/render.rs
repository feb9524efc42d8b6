use crate::core::camera::Camera;
use crate::core::scene::{BallKind, Scene};
use web_sys as web;

mod balls;
mod helpers;
mod post;
mod targets;

use balls::{create_ball_resources, BallResources};
use targets::{RenderTargets, HDR_FORMAT};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    balls: Vec<BallResources>,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bg_scene: wgpu::BindGroup,
    bg_glitch: wgpu::BindGroup,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Acquire a WebGPU device for `canvas` and build every pipeline.
    ///
    /// Any failure here means the page cannot render at all.
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let (format, alpha_mode) = pick_surface_format(&surface.get_capabilities(&adapter))?;
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

        let targets = RenderTargets::new(&device, width, height);
        let balls = BallKind::ALL
            .iter()
            .map(|&kind| create_ball_resources(&device, kind, HDR_FORMAT))
            .collect();

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let bg_scene = post::source_bind_group(
            &device,
            &post,
            "bg_scene",
            &targets.scene_view,
            &linear_sampler,
        );
        let bg_glitch = post::source_bind_group(
            &device,
            &post,
            "bg_glitch",
            &targets.glitch_view,
            &linear_sampler,
        );
        log::info!("[gpu] surface {}x{} format {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            balls,
            targets,
            linear_sampler,
            post,
            bg_scene,
            bg_glitch,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.01,
                g: 0.01,
                b: 0.02,
                a: 1.0,
            },
        })
    }

    /// Reconfigure the surface and offscreen targets for a new backing size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.rebuild_post_bind_groups();
        }
    }

    /// Reconfigure after the surface reported `Lost` or `Outdated`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Base render, then glitch, then output to the swapchain.
    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        time_sec: f32,
        glitch_factor: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = camera.view_proj();
        for ball in &self.balls {
            if let Some(mesh) = scene.mesh(ball.kind) {
                ball.write_uniforms(&self.queue, mesh, view_proj);
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: visible ball(s) into the scene target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for ball in &self.balls {
                let visible = scene.mesh(ball.kind).map(|m| m.visible).unwrap_or(false);
                if visible {
                    ball.draw(&mut rpass);
                }
            }
        }

        // Pass 2: glitch scene -> glitch target
        post::write_glitch_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            [self.width as f32, self.height as f32],
            time_sec,
            glitch_factor,
            rand::random::<f32>(),
        );
        post::blit(
            &mut encoder,
            "glitch_pass",
            &self.targets.glitch_view,
            &self.post.glitch_pipeline,
            &self.bg_scene,
        );

        // Pass 3: output to swapchain
        post::blit(
            &mut encoder,
            "output_pass",
            &view,
            &self.post.output_pipeline,
            &self.bg_glitch,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    fn rebuild_post_bind_groups(&mut self) {
        self.bg_scene = post::source_bind_group(
            &self.device,
            &self.post,
            "bg_scene",
            &self.targets.scene_view,
            &self.linear_sampler,
        );
        self.bg_glitch = post::source_bind_group(
            &self.device,
            &self.post,
            "bg_glitch",
            &self.targets.glitch_view,
            &self.linear_sampler,
        );
    }
}

/// Prefer an sRGB swapchain so the output pass writes display-referred color.
fn pick_surface_format(
    caps: &wgpu::SurfaceCapabilities,
) -> anyhow::Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode)> {
    let format = caps
        .formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);
    Ok((format, alpha_mode))
}
