//! Multi-tap delay reverb.
//!
//! Five integer-multiple delayed copies of the dry signal, each scaled by
//! `decay^i`, are summed into a wet buffer which is mixed back at
//! [`WET_MIX`]. Taps whose delay reaches past the end of the buffer are
//! skipped rather than wrapped, so short clips simply get fewer taps.
//!
//! # Signal Flow
//!
//! ```text
//! dry ──────────────────────────────┬──▶ out = dry + wet * 0.3
//!   ├─ delay 1·d, gain decay^1 ──┐  │
//!   ├─ delay 2·d, gain decay^2 ──┼─ wet
//!   ├─ ...                       │
//!   └─ delay 5·d, gain decay^5 ──┘
//! ```

/// Per-tap amplitude decay.
pub const DECAY: f32 = 0.5;

/// Base tap delay in seconds; tap `i` is delayed `i * DELAY_SECS`.
pub const DELAY_SECS: f32 = 0.1;

/// Number of delayed copies summed into the wet signal.
pub const TAP_COUNT: u32 = 5;

/// Wet signal level in the final mix.
pub const WET_MIX: f32 = 0.3;

/// Add reverb with the default decay and tap delay.
pub fn add_reverb(samples: &[f32], sample_rate: u32) -> Vec<f32> {
    add_reverb_with(samples, sample_rate, DECAY, DELAY_SECS)
}

/// Add reverb with an explicit decay and base delay.
///
/// With `decay == 0.0` every tap is silent and the output equals the input.
pub fn add_reverb_with(samples: &[f32], sample_rate: u32, decay: f32, delay_secs: f32) -> Vec<f32> {
    let len = samples.len();
    let delay_samples = (delay_secs * sample_rate as f32) as usize;
    let mut wet = vec![0.0_f32; len];

    for tap in 1..=TAP_COUNT {
        let offset = delay_samples * tap as usize;
        if offset == 0 || offset >= len {
            continue;
        }
        let gain = decay.powi(tap as i32);
        for i in offset..len {
            wet[i] += samples[i - offset] * gain;
        }
    }

    samples
        .iter()
        .zip(wet.iter())
        .map(|(dry, wet)| dry + wet * WET_MIX)
        .collect()
}
