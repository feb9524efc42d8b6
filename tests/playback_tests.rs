// Host-side tests for the track load slot, sphere geometry and uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
}

use crate::core::geometry::uv_sphere;
use crate::core::playback::{PlaybackSlot, PlaybackState};
use crate::core::uniforms::{pack_vec4s, UniformTable, UniformValue};

#[test]
fn load_publishes_buffer() {
    let mut slot: PlaybackSlot<&str> = PlaybackSlot::new();
    assert_eq!(slot.state(), &PlaybackState::Idle);

    let ticket = slot.begin_load("a.mp3");
    assert!(slot.is_loading());
    assert_eq!(
        slot.state(),
        &PlaybackState::Loading {
            url: "a.mp3".to_string()
        }
    );
    assert!(slot.publish(ticket, "decoded"));
    assert_eq!(slot.buffer(), Some(&"decoded"));
    assert!(!slot.is_loading());
}

#[test]
fn superseded_load_cannot_publish() {
    let mut slot: PlaybackSlot<u32> = PlaybackSlot::new();
    let first = slot.begin_load("a.mp3");
    let second = slot.begin_load("b.mp3");
    assert!(!slot.is_current(first));
    assert!(!slot.publish(first, 1));
    assert!(!slot.fail(first, "late"));
    assert!(slot.publish(second, 2));
    assert_eq!(slot.buffer(), Some(&2));
}

#[test]
fn cancelled_load_is_dropped() {
    let mut slot: PlaybackSlot<u32> = PlaybackSlot::new();
    assert!(!slot.cancel());
    let ticket = slot.begin_load("a.mp3");
    assert!(slot.cancel());
    assert_eq!(slot.state(), &PlaybackState::Cancelled);
    assert!(!slot.publish(ticket, 1));
    assert_eq!(slot.buffer(), None);
}

#[test]
fn failure_keeps_url_and_reason() {
    let mut slot: PlaybackSlot<u32> = PlaybackSlot::new();
    let ticket = slot.begin_load("missing.mp3");
    assert!(slot.fail(ticket, "HTTP 404"));
    assert_eq!(
        slot.state(),
        &PlaybackState::Failed {
            url: "missing.mp3".to_string(),
            reason: "HTTP 404".to_string()
        }
    );
    assert!(!slot.publish(ticket, 1));
}

#[test]
fn sphere_counts_match_segments() {
    let g = uv_sphere(1.0, 8, 6);
    assert_eq!(g.vertices.len(), 9 * 7);
    assert_eq!(g.indices.len(), 6 * 8 * 5);
    // usable as a line list for the wireframe
    assert_eq!(g.indices.len() % 2, 0);
    assert!(g.indices.iter().all(|&i| (i as usize) < g.vertices.len()));

    let big = uv_sphere(1.0, 100, 100);
    assert_eq!(big.vertices.len(), 101 * 101);
}

#[test]
fn sphere_vertices_sit_on_radius() {
    let g = uv_sphere(2.0, 16, 12);
    for v in &g.vertices {
        let [x, y, z] = v.position;
        let r = (x * x + y * y + z * z).sqrt();
        assert!((r - 2.0).abs() < 1e-4);
        let [nx, ny, nz] = v.normal;
        assert!(((nx * nx + ny * ny + nz * nz).sqrt() - 1.0).abs() < 1e-4);
    }
    assert!((g.vertices[0].position[1] - 2.0).abs() < 1e-5);
    assert!((g.vertices.last().unwrap().position[1] + 2.0).abs() < 1e-5);
}

#[test]
fn uniform_table_defaults_for_missing_names() {
    let mut table = UniformTable::new();
    assert!(table.is_empty());
    assert_eq!(table.float("uTime"), 0.0);
    assert!(table.floats("uColors").is_empty());

    table.set_float("uTime", 1.5);
    table.set_floats("uColors", &[0.1, 0.2]);
    table.set_floats("uColors", &[0.3]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.float("uTime"), 1.5);
    assert_eq!(table.floats("uColors"), &[0.3]);
    // kinds do not cross
    assert_eq!(table.float("uColors"), 0.0);
    assert_eq!(table.get("uTime"), Some(&UniformValue::Float(1.5)));
}

#[test]
fn pack_vec4s_fills_rows_in_order() {
    let values: Vec<f32> = (0..12).map(|i| i as f32).collect();
    let packed: [[f32; 4]; 3] = pack_vec4s(&values);
    assert_eq!(packed[0], [0.0, 1.0, 2.0, 3.0]);
    assert_eq!(packed[2], [8.0, 9.0, 10.0, 11.0]);

    let short: [[f32; 4]; 2] = pack_vec4s(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(short[1], [5.0, 0.0, 0.0, 0.0]);

    let long: [[f32; 4]; 1] = pack_vec4s(&values);
    assert_eq!(long[0], [0.0, 1.0, 2.0, 3.0]);
}
