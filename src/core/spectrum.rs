use super::constants::*;

pub type FrequencyFrame = [u8; FREQUENCY_BIN_COUNT];
pub type NormalizedFrame = [f32; FREQUENCY_BIN_COUNT];
pub type SpikeProfile = [f32; SPIKE_BUCKETS];
pub type ColorProfile = [f32; COLOR_CHANNELS];

/// Mean byte magnitude of a frame, 0..=255.
pub fn average_frequency(frame: &[u8]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }
    let sum: u32 = frame.iter().map(|&v| v as u32).sum();
    sum as f32 / frame.len() as f32
}

/// Map every byte magnitude to [0, 1].
pub fn normalize_into(frame: &FrequencyFrame, out: &mut NormalizedFrame) {
    for (dst, &src) in out.iter_mut().zip(frame.iter()) {
        *dst = src as f32 / 255.0;
    }
}

/// Zero at or below the baseline, linear above it. Deliberately unclamped.
#[inline]
pub fn spike_scalar(average_frequency: f32) -> f32 {
    (average_frequency - SPIKE_BASELINE).max(0.0) / SPIKE_DIVISOR
}

/// Downsample the frame to `SPIKE_BUCKETS` means of contiguous slices.
pub fn spike_profile(normalized: &NormalizedFrame) -> SpikeProfile {
    let mut out = [0.0f32; SPIKE_BUCKETS];
    for (dst, slice) in out
        .iter_mut()
        .zip(normalized.chunks_exact(SPIKE_SLICE_SIZE))
    {
        *dst = mean(slice);
    }
    out
}

/// Average the fixed calibration groups into the color channels.
pub fn color_profile(normalized: &NormalizedFrame) -> ColorProfile {
    let mut out = [0.0f32; COLOR_CHANNELS];
    for (dst, group) in out.iter_mut().zip(COLOR_INDEX_GROUPS.iter()) {
        let sum: f32 = group.iter().map(|&i| normalized[i]).sum();
        *dst = sum / group.len() as f32;
    }
    out
}

#[inline]
fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}
