use super::constants::*;
use super::scene::Scene;
use super::smoothing::{approach, approach_all, blend_alpha, Smoothing};
use super::spectrum::{
    color_profile, normalize_into, spike_profile, spike_scalar, ColorProfile, FrequencyFrame,
    NormalizedFrame, SpikeProfile,
};

/// Anything that can be polled once per tick for spectrum data.
///
/// Implementations must not fail: before audio is available they report
/// silence (zero average and an all-zero frame).
pub trait FrequencySource {
    fn average_frequency(&self) -> f32;
    fn frequency_data(&self, out: &mut FrequencyFrame);
}

/// Values published by one call to [`Visualizer::update_spike`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpikeFrame {
    pub scalar: f32,
    pub profile: SpikeProfile,
}

/// Turns analyser output into mesh uniforms.
///
/// Every registered mesh receives identical values, hidden ones included, so a
/// mesh that becomes visible mid-sequence is already up to date.
pub struct Visualizer<S> {
    source: S,
    raw: Box<FrequencyFrame>,
    normalized: Box<NormalizedFrame>,
    smoothing: Option<Smoothing>,
    published_scalar: f32,
    published_spikes: SpikeProfile,
    published_colors: ColorProfile,
}

impl<S: FrequencySource> Visualizer<S> {
    /// Wrap `source` and seed the audio uniforms on every mesh of `scene`.
    pub fn new(source: S, scene: &mut Scene) -> Self {
        for mesh in scene.meshes_mut() {
            mesh.uniforms.set_float(U_AUDIO_AVERAGE_FREQUENCY, 0.0);
            mesh.uniforms.set_floats(U_SPIKE_SIZE, &[]);
            mesh.uniforms.set_floats(U_COLORS, &[]);
        }
        Self {
            source,
            raw: Box::new([0; FREQUENCY_BIN_COUNT]),
            normalized: Box::new([0.0; FREQUENCY_BIN_COUNT]),
            smoothing: None,
            published_scalar: 0.0,
            published_spikes: [0.0; SPIKE_BUCKETS],
            published_colors: [0.0; COLOR_CHANNELS],
        }
    }

    pub fn with_smoothing(mut self, smoothing: Option<Smoothing>) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Derive the spike scalar and profile and publish them to all meshes.
    pub fn update_spike(&mut self, scene: &mut Scene, dt_sec: f32) -> SpikeFrame {
        let scalar = spike_scalar(self.source.average_frequency());
        self.sample();
        let profile = spike_profile(&self.normalized);

        match self.smoothing {
            Some(s) => {
                approach(
                    &mut self.published_scalar,
                    scalar,
                    blend_alpha(dt_sec, s.scalar_tau_sec),
                );
                approach_all(
                    &mut self.published_spikes,
                    &profile,
                    blend_alpha(dt_sec, s.profile_tau_sec),
                );
            }
            None => {
                self.published_scalar = scalar;
                self.published_spikes = profile;
            }
        }

        for mesh in scene.meshes_mut() {
            mesh.uniforms
                .set_float(U_AUDIO_AVERAGE_FREQUENCY, self.published_scalar);
            mesh.uniforms.set_floats(U_SPIKE_SIZE, &self.published_spikes);
        }
        SpikeFrame {
            scalar: self.published_scalar,
            profile: self.published_spikes,
        }
    }

    /// Derive the color profile and publish it to all meshes.
    pub fn update_color(&mut self, scene: &mut Scene, dt_sec: f32) -> ColorProfile {
        self.sample();
        let colors = color_profile(&self.normalized);

        match self.smoothing {
            Some(s) => approach_all(
                &mut self.published_colors,
                &colors,
                blend_alpha(dt_sec, s.profile_tau_sec),
            ),
            None => self.published_colors = colors,
        }

        for mesh in scene.meshes_mut() {
            mesh.uniforms.set_floats(U_COLORS, &self.published_colors);
        }
        self.published_colors
    }

    fn sample(&mut self) {
        self.source.frequency_data(&mut self.raw);
        normalize_into(&self.raw, &mut self.normalized);
    }
}
