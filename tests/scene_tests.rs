// Host-side tests for scene selection, panel parameters and page config.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
}

use crate::core::config::AppConfig;
use crate::core::constants::*;
use crate::core::params::{PanelParams, ParamChange};
use crate::core::scene::{BallKind, Scene};
use crate::core::smoothing::Smoothing;

#[test]
fn exactly_one_ball_is_visible() {
    let mut scene = Scene::new(BallKind::Spiky);
    assert_eq!(scene.visible_count(), 1);
    assert_eq!(scene.active(), Some(BallKind::Spiky));

    scene.select(BallKind::Noisy);
    assert_eq!(scene.visible_count(), 1);
    assert_eq!(scene.active(), Some(BallKind::Noisy));

    scene.select(BallKind::Noisy);
    assert_eq!(scene.visible_count(), 1);
}

#[test]
fn ball_names_round_trip() {
    for kind in BallKind::ALL {
        assert_eq!(BallKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(BallKind::from_name("noisy"), Some(BallKind::Noisy));
    assert_eq!(BallKind::from_name("cube"), None);
}

#[test]
fn only_spiky_ball_carries_spike_params() {
    let scene = Scene::new(BallKind::Noisy);
    let spiky = scene.mesh(BallKind::Spiky).unwrap();
    assert_eq!(spiky.uniforms.float(U_SPIKE_AMP), DEFAULT_SPIKE_AMP);
    assert_eq!(spiky.uniforms.float(U_SPIKE_WIDTH), DEFAULT_SPIKE_WIDTH);
    assert_eq!(spiky.uniforms.float(U_SPIKE_HEIGHT), DEFAULT_SPIKE_HEIGHT);
    assert_eq!(spiky.uniforms.float(U_FREQ_NUM), 2048.0);

    let noisy = scene.mesh(BallKind::Noisy).unwrap();
    assert!(!noisy.uniforms.contains(U_SPIKE_AMP));
    assert!(!noisy.uniforms.contains(U_FREQ_NUM));
    assert_eq!(BallKind::Noisy.wireframe_scale(), Some(1.015));
    assert_eq!(BallKind::Spiky.wireframe_scale(), None);
}

#[test]
fn set_time_reaches_every_mesh() {
    let mut scene = Scene::new(BallKind::Spiky);
    scene.set_time(12.5);
    assert!(scene.meshes().iter().all(|m| m.uniforms.float(U_TIME) == 12.5));
}

#[test]
fn panel_changes_are_clamped_and_applied() {
    let mut scene = Scene::new(BallKind::Spiky);
    let mut params = PanelParams::default();

    params.apply(&mut scene, ParamChange::Amp(2.0));
    params.apply(&mut scene, ParamChange::Width(-1.0));
    params.apply(&mut scene, ParamChange::Height(0.05));
    assert_eq!(params.amp, 1.0);
    assert_eq!(params.width, 0.0);
    assert_eq!(params.height, 0.05);

    let spiky = scene.mesh(BallKind::Spiky).unwrap();
    assert_eq!(spiky.uniforms.float(U_SPIKE_AMP), 1.0);
    assert_eq!(spiky.uniforms.float(U_SPIKE_WIDTH), 0.0);
    assert_eq!(spiky.uniforms.float(U_SPIKE_HEIGHT), 0.05);
}

#[test]
fn panel_ball_change_selects_mesh() {
    let mut scene = Scene::new(BallKind::Spiky);
    let mut params = PanelParams::default();
    let change = ParamChange::parse("ball", "noisy-ball").unwrap();
    params.apply(&mut scene, change);
    assert_eq!(params.ball, BallKind::Noisy);
    assert_eq!(scene.active(), Some(BallKind::Noisy));
    assert_eq!(scene.visible_count(), 1);
}

#[test]
fn parse_rejects_unknown_input() {
    assert_eq!(ParamChange::parse("amp", " 0.25 "), Some(ParamChange::Amp(0.25)));
    assert_eq!(ParamChange::parse("amp", "loud"), None);
    assert_eq!(ParamChange::parse("depth", "0.1"), None);
    assert_eq!(ParamChange::parse("ball", "cube"), None);
    assert_eq!(ParamChange::Amp(f32::NAN).clamped(), ParamChange::Amp(0.0));
}

#[test]
fn config_defaults() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.track_url, DEFAULT_TRACK_URL);
    assert_eq!(cfg.volume, VOLUME);
    assert_eq!(cfg.initial_ball, BallKind::Spiky);
    assert_eq!(cfg.smoothing, None);
    assert_eq!(AppConfig::from_query(""), cfg);
}

#[test]
fn config_reads_query_overrides() {
    let cfg = AppConfig::from_query("?ball=noisy&volume=3&smooth&track=song.ogg");
    assert_eq!(cfg.initial_ball, BallKind::Noisy);
    assert_eq!(cfg.volume, 1.0);
    assert_eq!(cfg.smoothing, Some(Smoothing::default()));
    assert_eq!(cfg.track_url, "song.ogg");

    let cfg = AppConfig::from_query("smooth=off&volume=nan&ball=cube&x=1");
    assert_eq!(cfg.smoothing, None);
    assert_eq!(cfg.volume, VOLUME);
    assert_eq!(cfg.initial_ball, BallKind::Spiky);
}
