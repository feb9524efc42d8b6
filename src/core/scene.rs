use super::constants::*;
use super::uniforms::UniformTable;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BallKind {
    Noisy,
    Spiky,
}

impl BallKind {
    pub const ALL: [BallKind; 2] = [BallKind::Noisy, BallKind::Spiky];

    pub fn name(self) -> &'static str {
        match self {
            BallKind::Noisy => "noisy-ball",
            BallKind::Spiky => "spiky-ball",
        }
    }

    /// Accepts the mesh name ("noisy-ball") or the short panel label ("noisy").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "noisy-ball" | "noisy" => Some(BallKind::Noisy),
            "spiky-ball" | "spiky" => Some(BallKind::Spiky),
            _ => None,
        }
    }

    pub fn segments(self) -> u32 {
        match self {
            BallKind::Noisy => NOISY_SEGMENTS,
            BallKind::Spiky => SPIKY_SEGMENTS,
        }
    }

    /// Scale of the wireframe overlay, if this ball carries one.
    pub fn wireframe_scale(self) -> Option<f32> {
        match self {
            BallKind::Noisy => Some(1.0 + WIREFRAME_DELTA),
            BallKind::Spiky => None,
        }
    }
}

/// A renderable ball: its material uniforms and whether it is drawn.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub kind: BallKind,
    pub visible: bool,
    pub uniforms: UniformTable,
}

impl Mesh {
    pub fn new(kind: BallKind, visible: bool) -> Self {
        let mut uniforms = UniformTable::new();
        uniforms.set_float(U_TIME, 0.0);
        if kind == BallKind::Spiky {
            uniforms.set_float(U_FREQ_NUM, FREQUENCY_BIN_COUNT as f32);
            uniforms.set_float(U_SPIKE_AMP, DEFAULT_SPIKE_AMP);
            uniforms.set_float(U_SPIKE_WIDTH, DEFAULT_SPIKE_WIDTH);
            uniforms.set_float(U_SPIKE_HEIGHT, DEFAULT_SPIKE_HEIGHT);
        }
        Self {
            kind,
            visible,
            uniforms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// The two balls. Exactly one of them is visible at any time.
#[derive(Clone, Debug)]
pub struct Scene {
    meshes: SmallVec<[Mesh; 2]>,
}

impl Scene {
    pub fn new(active: BallKind) -> Self {
        let meshes = BallKind::ALL
            .iter()
            .map(|&kind| Mesh::new(kind, kind == active))
            .collect();
        Self { meshes }
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    pub fn mesh(&self, kind: BallKind) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.kind == kind)
    }

    pub fn mesh_mut(&mut self, kind: BallKind) -> Option<&mut Mesh> {
        self.meshes.iter_mut().find(|m| m.kind == kind)
    }

    /// Show `kind` and hide every other mesh in a single pass.
    pub fn select(&mut self, kind: BallKind) {
        for mesh in self.meshes.iter_mut() {
            mesh.visible = mesh.kind == kind;
        }
    }

    pub fn active(&self) -> Option<BallKind> {
        self.meshes.iter().find(|m| m.visible).map(|m| m.kind)
    }

    pub fn visible_count(&self) -> usize {
        self.meshes.iter().filter(|m| m.visible).count()
    }

    pub fn set_time(&mut self, seconds: f32) {
        for mesh in self.meshes.iter_mut() {
            mesh.uniforms.set_float(U_TIME, seconds);
        }
    }
}
