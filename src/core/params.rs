use super::constants::*;
use super::scene::{BallKind, Scene};

/// Live-tunable values exposed by the dev panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelParams {
    pub ball: BallKind,
    pub amp: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            ball: BallKind::Spiky,
            amp: DEFAULT_SPIKE_AMP,
            width: DEFAULT_SPIKE_WIDTH,
            height: DEFAULT_SPIKE_HEIGHT,
        }
    }
}

/// One edit coming from a panel widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamChange {
    Ball(BallKind),
    Amp(f32),
    Width(f32),
    Height(f32),
}

impl ParamChange {
    /// Build a change from a widget key and its raw string value.
    pub fn parse(key: &str, raw: &str) -> Option<Self> {
        match key {
            "ball" => BallKind::from_name(raw).map(ParamChange::Ball),
            "amp" => raw.trim().parse().ok().map(ParamChange::Amp),
            "width" => raw.trim().parse().ok().map(ParamChange::Width),
            "height" => raw.trim().parse().ok().map(ParamChange::Height),
            _ => None,
        }
    }

    /// Same change with its value held inside the widget range.
    pub fn clamped(self) -> Self {
        match self {
            ParamChange::Ball(b) => ParamChange::Ball(b),
            ParamChange::Amp(v) => ParamChange::Amp(clamp_range(v, SPIKE_AMP_RANGE)),
            ParamChange::Width(v) => ParamChange::Width(clamp_range(v, SPIKE_WIDTH_RANGE)),
            ParamChange::Height(v) => ParamChange::Height(clamp_range(v, SPIKE_HEIGHT_RANGE)),
        }
    }
}

impl PanelParams {
    /// Record `change` and push it straight into the scene.
    pub fn apply(&mut self, scene: &mut Scene, change: ParamChange) {
        let change = change.clamped();
        match change {
            ParamChange::Ball(kind) => {
                self.ball = kind;
                scene.select(kind);
            }
            ParamChange::Amp(v) => {
                self.amp = v;
                set_spiky(scene, U_SPIKE_AMP, v);
            }
            ParamChange::Width(v) => {
                self.width = v;
                set_spiky(scene, U_SPIKE_WIDTH, v);
            }
            ParamChange::Height(v) => {
                self.height = v;
                set_spiky(scene, U_SPIKE_HEIGHT, v);
            }
        }
    }
}

fn set_spiky(scene: &mut Scene, name: &'static str, value: f32) {
    if let Some(mesh) = scene.mesh_mut(BallKind::Spiky) {
        mesh.uniforms.set_float(name, value);
    }
}

#[inline]
fn clamp_range(v: f32, (lo, hi): (f32, f32)) -> f32 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}
