// Shared tuning constants for the analyser, the visualizer mapping and the scene.

// Analyser
pub const FFT_SIZE: usize = 4096;
pub const FREQUENCY_BIN_COUNT: usize = FFT_SIZE / 2;

// Spike profile: 64 contiguous buckets over the frequency frame
pub const SPIKE_BUCKETS: usize = FFT_SIZE / 64;
pub const SPIKE_SLICE_SIZE: usize = FREQUENCY_BIN_COUNT / SPIKE_BUCKETS;

// Spike scalar mapping: anything at or below the baseline is silence
pub const SPIKE_BASELINE: f32 = 100.0;
pub const SPIKE_DIVISOR: f32 = 50.0;

// Color profile calibration. Hand-tuned low-mid bands; keep literal.
pub const COLOR_CHANNELS: usize = 12;
pub const COLOR_INDEX_GROUPS: [&[usize]; COLOR_CHANNELS] = [
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

// Uniform names shared by both ball shaders
pub const U_TIME: &str = "uTime";
pub const U_AUDIO_AVERAGE_FREQUENCY: &str = "uAudioAverageFrequency";
pub const U_SPIKE_SIZE: &str = "uSpikeSize";
pub const U_COLORS: &str = "uColors";

// Spiky-ball-only uniforms
pub const U_SPIKE_AMP: &str = "spikeAmp";
pub const U_SPIKE_WIDTH: &str = "spikeWidth";
pub const U_SPIKE_HEIGHT: &str = "spikeHeight";
pub const U_FREQ_NUM: &str = "freqNum";

// Playback
pub const VOLUME: f32 = 0.5;
pub const DEFAULT_TRACK_URL: &str = "assets/track.mp3";

// Glitch pass
pub const SOFT_GLITCH_INITIAL: f32 = 0.8;
pub const GLITCH_THRESHOLD: f32 = 0.6;
pub const GLITCH_STRONG: f32 = 0.7;
pub const GLITCH_WEAK: f32 = 0.1;

// Eased transitions (only used when smoothing is enabled)
pub const SMOOTH_SCALAR_TAU_SEC: f32 = 1.5;
pub const SMOOTH_PROFILE_TAU_SEC: f32 = 0.5;

// Meshes
pub const NOISY_SEGMENTS: u32 = 100;
pub const SPIKY_SEGMENTS: u32 = 500;
pub const BALL_RADIUS: f32 = 1.0;
pub const WIREFRAME_DELTA: f32 = 0.015; // wireframe sits just outside the noisy surface

// Parameter panel defaults and widget ranges
pub const DEFAULT_SPIKE_AMP: f32 = 0.4;
pub const DEFAULT_SPIKE_WIDTH: f32 = 0.01;
pub const DEFAULT_SPIKE_HEIGHT: f32 = 0.01;
pub const SPIKE_AMP_RANGE: (f32, f32) = (0.0, 1.0);
pub const SPIKE_WIDTH_RANGE: (f32, f32) = (0.0, 0.1);
pub const SPIKE_HEIGHT_RANGE: (f32, f32) = (0.0, 0.1);

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 3000.0;
pub const CAMERA_Z: f32 = 5.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel notch
pub const ORBIT_POLE_EPSILON: f32 = 1e-6;

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Performance counter window
pub const STATS_WINDOW_MS: f64 = 1000.0;
