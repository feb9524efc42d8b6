pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod glitch;
pub mod params;
pub mod playback;
pub mod scene;
pub mod smoothing;
pub mod spectrum;
pub mod stats;
pub mod uniforms;
pub mod viewport;
pub mod visualizer;

pub use constants::*;

// Shaders bundled as string constants
pub static NOISY_WGSL: &str = include_str!("../../shaders/noisy.wgsl");
pub static SPIKY_WGSL: &str = include_str!("../../shaders/spiky.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
