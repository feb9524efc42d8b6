use super::constants::STATS_WINDOW_MS;

/// Snapshot published once per measurement window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatsSample {
    pub fps: f32,
    pub frame_ms: f32,
    pub min_fps: f32,
    pub max_fps: f32,
}

/// Frames-per-second counter over fixed windows.
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    window_start_ms: Option<f64>,
    frames: u32,
    min_fps: Option<f32>,
    max_fps: f32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame at `now_ms`; yields a sample when a window closes.
    pub fn update(&mut self, now_ms: f64) -> Option<StatsSample> {
        let start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed < STATS_WINDOW_MS {
            return None;
        }
        let fps = (self.frames as f64 * 1000.0 / elapsed) as f32;
        let frame_ms = (elapsed / self.frames as f64) as f32;
        let min_fps = self.min_fps.map_or(fps, |m| m.min(fps));
        self.min_fps = Some(min_fps);
        self.max_fps = self.max_fps.max(fps);
        self.window_start_ms = Some(now_ms);
        self.frames = 0;
        Some(StatsSample {
            fps,
            frame_ms,
            min_fps,
            max_fps: self.max_fps,
        })
    }
}
