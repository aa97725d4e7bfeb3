//! Hard-knee downward compression.
//!
//! Memoryless waveshaping rather than an envelope follower: each sample above
//! the threshold is individually pulled toward it by the ratio. This keeps
//! the stage a pure function of its input, at the cost of the attack/release
//! behavior a studio compressor would have - an accepted trade-off for short
//! clips.
//!
//! ```text
//! |x| <= threshold : x
//! |x| >  threshold : sign(x) * (threshold + (|x| - threshold) / ratio)
//! ```
//!
//! The threshold and ratio are fixed constants; the configuration only
//! toggles the stage.

/// Level above which gain reduction begins.
pub const THRESHOLD: f32 = 0.7;

/// Compression ratio applied to the overshoot.
pub const RATIO: f32 = 4.0;

/// Compress a mono signal with the default threshold and ratio.
pub fn compress(samples: &[f32]) -> Vec<f32> {
    compress_with(samples, THRESHOLD, RATIO)
}

/// Compress with an explicit threshold and ratio.
///
/// Samples at or below the threshold pass through bit-for-bit; the mapping
/// above the threshold is strictly monotonic, so louder input always yields
/// louder (but more slowly growing) output.
pub fn compress_with(samples: &[f32], threshold: f32, ratio: f32) -> Vec<f32> {
    samples
        .iter()
        .map(|&x| {
            let level = x.abs();
            if level > threshold {
                x.signum() * (threshold + (level - threshold) / ratio)
            } else {
                x
            }
        })
        .collect()
}
