use super::constants::*;
use super::scene::{BallKind, Scene};

/// Two-level glitch intensity; each tick's input alone decides the output.
#[inline]
pub fn glitch_factor(noisy_average_frequency: f32) -> f32 {
    if noisy_average_frequency > GLITCH_THRESHOLD {
        GLITCH_STRONG
    } else {
        GLITCH_WEAK
    }
}

/// Glitch intensity keyed off the noisy ball's published average frequency.
pub fn scene_glitch_factor(scene: &Scene) -> f32 {
    let level = scene
        .mesh(BallKind::Noisy)
        .map(|m| m.uniforms.float(U_AUDIO_AVERAGE_FREQUENCY))
        .unwrap_or(0.0);
    glitch_factor(level)
}
