use super::helpers;

pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen targets for the pass chain.
///
/// - `scene_view` receives the base render (meshes + wireframe), with `depth_view`.
/// - `glitch_view` receives the glitch pass and feeds the output pass.
pub(crate) struct RenderTargets {
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) glitch_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let size = (width, height);
        let scene_view = helpers::render_texture(device, "scene_tex", size, HDR_FORMAT, usage);
        let glitch_view = helpers::render_texture(device, "glitch_tex", size, HDR_FORMAT, usage);
        let depth_view = helpers::render_texture(
            device,
            "depth_tex",
            size,
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self {
            scene_view,
            glitch_view,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
