// Host-side tests for the spectrum-to-uniform mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod glitch {
        include!("../src/core/glitch.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod spectrum {
        include!("../src/core/spectrum.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
    pub mod visualizer {
        include!("../src/core/visualizer.rs");
    }
}

use crate::core::constants::*;
use crate::core::glitch::{glitch_factor, scene_glitch_factor};
use crate::core::scene::{BallKind, Scene};
use crate::core::smoothing::Smoothing;
use crate::core::spectrum::*;
use crate::core::visualizer::{FrequencySource, Visualizer};

/// Analyser stand-in that always reports the same frame.
struct FixedSource {
    frame: Box<FrequencyFrame>,
}

impl FixedSource {
    fn filled(value: u8) -> Self {
        Self {
            frame: Box::new([value; FREQUENCY_BIN_COUNT]),
        }
    }

    fn from_fn(f: impl Fn(usize) -> u8) -> Self {
        let mut frame = Box::new([0u8; FREQUENCY_BIN_COUNT]);
        for (i, v) in frame.iter_mut().enumerate() {
            *v = f(i);
        }
        Self { frame }
    }
}

impl FrequencySource for FixedSource {
    fn average_frequency(&self) -> f32 {
        average_frequency(&self.frame[..])
    }

    fn frequency_data(&self, out: &mut FrequencyFrame) {
        out.copy_from_slice(&self.frame[..]);
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn spike_scalar_is_zero_at_or_below_baseline() {
    assert_eq!(spike_scalar(0.0), 0.0);
    assert_eq!(spike_scalar(100.0), 0.0);
    assert!(approx(spike_scalar(150.0), 1.0));
    // not clamped to 1
    assert!(approx(spike_scalar(255.0), 3.1));
}

#[test]
fn spike_profile_takes_contiguous_slice_means() {
    assert_eq!(SPIKE_BUCKETS, 64);
    assert_eq!(SPIKE_SLICE_SIZE, 32);

    let source = FixedSource::from_fn(|i| (i / SPIKE_SLICE_SIZE) as u8);
    let mut normalized = [0.0f32; FREQUENCY_BIN_COUNT];
    normalize_into(&source.frame, &mut normalized);
    let profile = spike_profile(&normalized);
    for (k, v) in profile.iter().enumerate() {
        assert!(approx(*v, k as f32 / 255.0), "bucket {} = {}", k, v);
    }
}

#[test]
fn color_profile_averages_calibration_groups() {
    let source = FixedSource::from_fn(|i| if i == 24 || i == 26 { 255 } else { 0 });
    let mut normalized = [0.0f32; FREQUENCY_BIN_COUNT];
    normalize_into(&source.frame, &mut normalized);
    let colors = color_profile(&normalized);
    assert!(approx(colors[0], 1.0));
    assert!(approx(colors[1], 0.0));
    // bins 26 and 27 share a channel
    assert!(approx(colors[2], 0.5));
    assert!(colors[3..].iter().all(|&c| c == 0.0));
}

#[test]
fn uneven_frame_yields_exact_group_and_slice_means() {
    let source = FixedSource::from_fn(|i| ((i * 37 + 11) % 256) as u8);
    let mut n = [0.0f32; FREQUENCY_BIN_COUNT];
    normalize_into(&source.frame, &mut n);

    let groups: [&[usize]; 12] = [
        &[24],
        &[25],
        &[26, 27],
        &[28],
        &[29, 30],
        &[31, 32],
        &[33, 34],
        &[35, 36],
        &[37, 38],
        &[39, 40],
        &[41, 42, 43],
        &[44, 45],
    ];
    let colors = color_profile(&n);
    for (k, group) in groups.iter().enumerate() {
        let expected = group.iter().map(|&i| n[i]).sum::<f32>() / group.len() as f32;
        assert!(approx(colors[k], expected), "channel {}: {} vs {}", k, colors[k], expected);
    }

    let profile = spike_profile(&n);
    assert_eq!(profile.len(), 64);
    for (k, v) in profile.iter().enumerate() {
        let slice = &n[32 * k..32 * k + 32];
        let expected = slice.iter().sum::<f32>() / 32.0;
        assert!(approx(*v, expected), "bucket {}: {} vs {}", k, v, expected);
    }
}

#[test]
fn full_scale_frame_saturates_profiles() {
    let mut scene = Scene::new(BallKind::Spiky);
    let mut vis = Visualizer::new(FixedSource::filled(255), &mut scene);

    let spike = vis.update_spike(&mut scene, 1.0 / 60.0);
    assert!(approx(spike.scalar, 3.1));
    assert!(spike.profile.iter().all(|&v| approx(v, 1.0)));

    let colors = vis.update_color(&mut scene, 1.0 / 60.0);
    assert!(colors.iter().all(|&v| approx(v, 1.0)));
}

#[test]
fn silence_publishes_zeros() {
    let mut scene = Scene::new(BallKind::Noisy);
    let mut vis = Visualizer::new(FixedSource::filled(0), &mut scene);
    let spike = vis.update_spike(&mut scene, 0.016);
    let colors = vis.update_color(&mut scene, 0.016);
    assert_eq!(spike.scalar, 0.0);
    assert!(spike.profile.iter().all(|&v| v == 0.0));
    assert!(colors.iter().all(|&v| v == 0.0));
}

#[test]
fn new_visualizer_seeds_audio_uniforms() {
    let mut scene = Scene::new(BallKind::Spiky);
    let _vis = Visualizer::new(FixedSource::filled(200), &mut scene);
    for mesh in scene.meshes() {
        assert!(mesh.uniforms.contains(U_AUDIO_AVERAGE_FREQUENCY));
        assert_eq!(mesh.uniforms.float(U_AUDIO_AVERAGE_FREQUENCY), 0.0);
        assert!(mesh.uniforms.floats(U_SPIKE_SIZE).is_empty());
        assert!(mesh.uniforms.floats(U_COLORS).is_empty());
    }
}

#[test]
fn updates_reach_hidden_meshes_too() {
    let mut scene = Scene::new(BallKind::Spiky);
    let mut vis = Visualizer::new(FixedSource::filled(150), &mut scene);
    vis.update_spike(&mut scene, 0.016);
    vis.update_color(&mut scene, 0.016);

    let noisy = scene.mesh(BallKind::Noisy).unwrap();
    let spiky = scene.mesh(BallKind::Spiky).unwrap();
    assert!(!noisy.visible);
    assert_eq!(
        noisy.uniforms.float(U_AUDIO_AVERAGE_FREQUENCY),
        spiky.uniforms.float(U_AUDIO_AVERAGE_FREQUENCY)
    );
    assert!(approx(noisy.uniforms.float(U_AUDIO_AVERAGE_FREQUENCY), 1.0));
    assert_eq!(noisy.uniforms.floats(U_SPIKE_SIZE).len(), SPIKE_BUCKETS);
    assert_eq!(
        noisy.uniforms.floats(U_SPIKE_SIZE),
        spiky.uniforms.floats(U_SPIKE_SIZE)
    );
    assert_eq!(noisy.uniforms.floats(U_COLORS).len(), COLOR_CHANNELS);
    assert_eq!(noisy.uniforms.floats(U_COLORS), spiky.uniforms.floats(U_COLORS));
}

#[test]
fn smoothing_eases_toward_target() {
    let mut scene = Scene::new(BallKind::Spiky);
    let mut vis = Visualizer::new(FixedSource::filled(255), &mut scene)
        .with_smoothing(Some(Smoothing::default()));

    let first = vis.update_spike(&mut scene, SMOOTH_SCALAR_TAU_SEC);
    let expected = 3.1 * (1.0 - (-1.0f32).exp());
    assert!(approx(first.scalar, expected), "{}", first.scalar);
    assert!(first.profile.iter().all(|&v| v > 0.0 && v < 1.0));

    let mut last = first.scalar;
    for _ in 0..200 {
        last = vis.update_spike(&mut scene, 0.1).scalar;
    }
    assert!((last - 3.1).abs() < 1e-3);
}

#[test]
fn zero_dt_with_smoothing_holds_values() {
    let mut scene = Scene::new(BallKind::Spiky);
    let mut vis = Visualizer::new(FixedSource::filled(255), &mut scene)
        .with_smoothing(Some(Smoothing::default()));
    let spike = vis.update_spike(&mut scene, 0.0);
    assert_eq!(spike.scalar, 0.0);
}

#[test]
fn glitch_factor_has_two_levels() {
    assert_eq!(glitch_factor(0.0), GLITCH_WEAK);
    assert_eq!(glitch_factor(0.6), GLITCH_WEAK);
    assert_eq!(glitch_factor(0.61), GLITCH_STRONG);
    assert_eq!(glitch_factor(3.1), GLITCH_STRONG);
}

#[test]
fn scene_glitch_follows_noisy_ball_level() {
    let mut scene = Scene::new(BallKind::Spiky);
    assert_eq!(scene_glitch_factor(&scene), GLITCH_WEAK);

    let mut loud = Visualizer::new(FixedSource::filled(200), &mut scene);
    loud.update_spike(&mut scene, 0.016);
    assert_eq!(scene_glitch_factor(&scene), GLITCH_STRONG);

    let mut quiet = Visualizer::new(FixedSource::filled(100), &mut scene);
    quiet.update_spike(&mut scene, 0.016);
    assert_eq!(scene_glitch_factor(&scene), GLITCH_WEAK);
}
