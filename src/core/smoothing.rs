use super::constants::{SMOOTH_PROFILE_TAU_SEC, SMOOTH_SCALAR_TAU_SEC};

/// Time constants for eased uniform transitions.
///
/// Off by default: published values snap to the latest analysis. When enabled,
/// each value approaches its target exponentially with its own time constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    pub scalar_tau_sec: f32,
    pub profile_tau_sec: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            scalar_tau_sec: SMOOTH_SCALAR_TAU_SEC,
            profile_tau_sec: SMOOTH_PROFILE_TAU_SEC,
        }
    }
}

/// Fraction of the remaining distance to cover after `dt_sec`.
#[inline]
pub fn blend_alpha(dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
}

#[inline]
pub fn approach(current: &mut f32, target: f32, alpha: f32) {
    *current += (target - *current) * alpha;
}

pub fn approach_all(current: &mut [f32], target: &[f32], alpha: f32) {
    for (c, &t) in current.iter_mut().zip(target.iter()) {
        approach(c, t, alpha);
    }
}
