use super::constants::*;
use super::scene::BallKind;
use super::smoothing::Smoothing;

/// Runtime choices for one page load.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub track_url: String,
    pub volume: f32,
    pub initial_ball: BallKind,
    pub smoothing: Option<Smoothing>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            track_url: DEFAULT_TRACK_URL.to_string(),
            volume: VOLUME,
            initial_ball: BallKind::Spiky,
            smoothing: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `?ball=noisy&volume=0.3&smooth=1&track=...`.
    ///
    /// Unknown keys and malformed values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            cfg.apply_override(key, value);
        }
        cfg
    }

    fn apply_override(&mut self, key: &str, value: &str) {
        match key {
            "ball" => {
                if let Some(kind) = BallKind::from_name(value) {
                    self.initial_ball = kind;
                }
            }
            "volume" => {
                if let Ok(v) = value.parse::<f32>() {
                    if v.is_finite() {
                        self.volume = v.clamp(0.0, 1.0);
                    }
                }
            }
            "smooth" => match value {
                "" | "1" | "true" | "on" => self.smoothing = Some(Smoothing::default()),
                "0" | "false" | "off" => self.smoothing = None,
                _ => {}
            },
            "track" => {
                if !value.is_empty() {
                    self.track_url = value.to_string();
                }
            }
            _ => {}
        }
    }
}
