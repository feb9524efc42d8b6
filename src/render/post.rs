#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlitchUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) factor: f32,
    pub(crate) seed: f32,
    pub(crate) _pad0: f32,
    pub(crate) _pad1: [f32; 2],
}

pub(crate) struct PostResources {
    pub(crate) bgl: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) glitch_pipeline: wgpu::RenderPipeline,
    pub(crate) output_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    hdr_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("glitch_uniforms"),
        size: std::mem::size_of::<GlitchUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let glitch_pipeline = super::helpers::make_post_pipeline(
        device,
        &layout,
        post_shader,
        "fs_glitch",
        hdr_format,
        None,
    );
    let output_pipeline = super::helpers::make_post_pipeline(
        device,
        &layout,
        post_shader,
        "fs_output",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl,
        uniform_buffer,
        glitch_pipeline,
        output_pipeline,
    }
}

/// Bind a source view with the shared sampler and glitch uniforms.
pub(crate) fn source_bind_group(
    device: &wgpu::Device,
    post: &PostResources,
    label: &str,
    source: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: &post.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(source),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: post.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

pub(crate) fn write_glitch_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    resolution: [f32; 2],
    time: f32,
    factor: f32,
    seed: f32,
) {
    let u = GlitchUniforms {
        resolution,
        time,
        factor,
        seed,
        _pad0: 0.0,
        _pad1: [0.0; 2],
    };
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bind_group: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bind_group, &[]);
    r.draw(0..3, 0..1);
}
