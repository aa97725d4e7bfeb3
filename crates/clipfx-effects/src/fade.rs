//! Linear fade-in and fade-out ramps.
//!
//! The fade-in multiplies the first `fade_in_secs * sample_rate` samples by a
//! ramp that starts at exactly 0.0; the fade-out multiplies the tail by a
//! ramp that ends at exactly 0.0. A side whose length is zero, negative, or
//! at least the whole buffer is skipped - fades never wrap or overlap the
//! full clip from one side alone.

/// Apply linear fades to a mono signal.
///
/// # Example
/// ```rust
/// use clipfx_effects::fade;
///
/// let input = vec![1.0_f32; 44100];
/// let output = fade(&input, 44100, 0.5, 0.0);
/// assert_eq!(output[0], 0.0);
/// assert_eq!(output[44099], 1.0);
/// ```
pub fn fade(samples: &[f32], sample_rate: u32, fade_in_secs: f32, fade_out_secs: f32) -> Vec<f32> {
    let len = samples.len();
    let mut output = samples.to_vec();

    let fade_in = (fade_in_secs * sample_rate as f32) as usize;
    if fade_in > 0 && fade_in < len {
        for i in 0..fade_in {
            output[i] *= i as f32 / fade_in as f32;
        }
    }

    let fade_out = (fade_out_secs * sample_rate as f32) as usize;
    if fade_out > 0 && fade_out < len {
        for i in 0..fade_out {
            // Ramp ends at exactly zero on the final sample.
            output[len - 1 - i] *= i as f32 / fade_out as f32;
        }
    }

    output
}
