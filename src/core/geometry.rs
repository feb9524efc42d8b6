use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// UV sphere with `width_segments` around and `height_segments` pole to pole.
///
/// Rows at the poles emit a single triangle per quad, so the index count is
/// `6 * w * (h - 1)`. Read pairwise, the same indices form a line list, which
/// is how the wireframe overlay is drawn.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * w * (h - 1)) as usize);

    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        // center the texture seam at the poles
        let u_offset = if iy == 0 {
            0.5 / w as f32
        } else if iy == h {
            -0.5 / w as f32
        } else {
            0.0
        };
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_t, cos_t) = (v * PI).sin_cos();
            let (sin_p, cos_p) = (u * 2.0 * PI).sin_cos();
            let n = [-cos_p * sin_t, cos_t, sin_p * sin_t];
            vertices.push(Vertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }

    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Geometry { vertices, indices }
}
