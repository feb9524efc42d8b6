use crate::core::geometry::{uv_sphere, Vertex};
use crate::core::scene::{BallKind, Mesh};
use crate::core::uniforms::pack_vec4s;
use crate::core::*;
use super::helpers::{make_pipeline, PipelineSpec};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) time: f32,
    pub(crate) audio_average_frequency: f32,
    pub(crate) spike_amp: f32,
    pub(crate) spike_width: f32,
    pub(crate) spike_height: f32,
    pub(crate) freq_num: f32,
    pub(crate) _pad0: [f32; 2],
    pub(crate) spike_size: [[f32; 4]; SPIKE_BUCKETS / 4],
    pub(crate) colors: [[f32; 4]; COLOR_CHANNELS / 4],
}

impl MeshUniforms {
    /// Pack a mesh's uniform table into the shader's block layout.
    pub(crate) fn pack(mesh: &Mesh, view_proj: Mat4, model: Mat4) -> Self {
        let u = &mesh.uniforms;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            time: u.float(U_TIME),
            audio_average_frequency: u.float(U_AUDIO_AVERAGE_FREQUENCY),
            spike_amp: u.float(U_SPIKE_AMP),
            spike_width: u.float(U_SPIKE_WIDTH),
            spike_height: u.float(U_SPIKE_HEIGHT),
            freq_num: u.float(U_FREQ_NUM),
            _pad0: [0.0; 2],
            spike_size: pack_vec4s(u.floats(U_SPIKE_SIZE)),
            colors: pack_vec4s(u.floats(U_COLORS)),
        }
    }
}

/// Uniform buffer and its bind group for one draw.
pub(crate) struct DrawUniforms {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

/// GPU side of one ball: geometry, surface pipeline and optional wireframe.
pub(crate) struct BallResources {
    pub(crate) kind: BallKind,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) surface_pipeline: wgpu::RenderPipeline,
    pub(crate) surface: DrawUniforms,
    pub(crate) wireframe: Option<(wgpu::RenderPipeline, DrawUniforms, f32)>,
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

fn make_mesh_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    make_pipeline(
        device,
        &PipelineSpec {
            label,
            layout,
            shader,
            vs_entry: "vs_main",
            fs_entry: "fs_main",
            buffers: &[vertex_layout()],
            topology,
            depth_test: true,
            color_format,
            blend: Some(wgpu::BlendState::REPLACE),
        },
    )
}

fn make_draw_uniforms(
    device: &wgpu::Device,
    label: &str,
    bgl: &wgpu::BindGroupLayout,
) -> DrawUniforms {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<MeshUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    DrawUniforms { buffer, bind_group }
}

pub(crate) fn create_ball_resources(
    device: &wgpu::Device,
    kind: BallKind,
    color_format: wgpu::TextureFormat,
) -> BallResources {
    let source = match kind {
        BallKind::Noisy => NOISY_WGSL,
        BallKind::Spiky => SPIKY_WGSL,
    };
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(kind.name()),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ball_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ball_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let segments = kind.segments();
    let geometry = uv_sphere(BALL_RADIUS, segments, segments);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("ball_vb"),
        contents: bytemuck::cast_slice(&geometry.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("ball_ib"),
        contents: bytemuck::cast_slice(&geometry.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    let surface_pipeline = make_mesh_pipeline(
        device,
        "ball_surface",
        &pl,
        &shader,
        color_format,
        wgpu::PrimitiveTopology::TriangleList,
    );
    let surface = make_draw_uniforms(device, "ball_uniforms", &bgl);

    // Same material and index buffer, read as line pairs
    let wireframe = kind.wireframe_scale().map(|scale| {
        let pipeline = make_mesh_pipeline(
            device,
            "ball_wireframe",
            &pl,
            &shader,
            color_format,
            wgpu::PrimitiveTopology::LineList,
        );
        let uniforms = make_draw_uniforms(device, "wireframe_uniforms", &bgl);
        (pipeline, uniforms, scale)
    });

    log::info!(
        "[gpu] {} ready: {} vertices, {} indices",
        kind.name(),
        geometry.vertices.len(),
        geometry.indices.len()
    );

    BallResources {
        kind,
        vertex_buffer,
        index_buffer,
        index_count: geometry.indices.len() as u32,
        surface_pipeline,
        surface,
        wireframe,
    }
}

impl BallResources {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, mesh: &Mesh, view_proj: Mat4) {
        let u = MeshUniforms::pack(mesh, view_proj, Mat4::IDENTITY);
        queue.write_buffer(&self.surface.buffer, 0, bytemuck::bytes_of(&u));
        if let Some((_, wire, scale)) = &self.wireframe {
            let u = MeshUniforms::pack(mesh, view_proj, Mat4::from_scale(glam::Vec3::splat(*scale)));
            queue.write_buffer(&wire.buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.set_pipeline(&self.surface_pipeline);
        rpass.set_bind_group(0, &self.surface.bind_group, &[]);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
        if let Some((pipeline, wire, _)) = &self.wireframe {
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &wire.bind_group, &[]);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}
