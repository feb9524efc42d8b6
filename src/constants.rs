// DOM hooks expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const CONTAINER_ID: &str = "container";
pub const STATS_ID: &str = "stats";
pub const PANEL_ID: &str = "dev-panel";

// Shown in place of the canvas when WebGPU is missing
pub const UNSUPPORTED_MESSAGE: &str =
    "Your browser or graphics card does not seem to support WebGPU. \
     Try a recent Chrome, Edge or Firefox Nightly with WebGPU enabled.";

// Wheel deltas arrive in pixels; this many make one dolly notch
pub const WHEEL_PIXELS_PER_NOTCH: f32 = 100.0;
