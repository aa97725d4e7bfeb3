//! Single-tap echo.
//!
//! One delayed, decayed copy of the dry signal added back onto itself. If the
//! delay reaches past the end of the buffer the stage is skipped entirely -
//! a degenerate parameter, not an error.

/// Echo delay in seconds.
pub const DELAY_SECS: f32 = 0.3;

/// Echo amplitude relative to the dry signal.
pub const DECAY: f32 = 0.5;

/// Add an echo with the default delay and decay.
pub fn add_echo(samples: &[f32], sample_rate: u32) -> Vec<f32> {
    add_echo_with(samples, sample_rate, DELAY_SECS, DECAY)
}

/// Add an echo with an explicit delay and decay.
///
/// With `decay == 0.0` the output equals the input.
pub fn add_echo_with(samples: &[f32], sample_rate: u32, delay_secs: f32, decay: f32) -> Vec<f32> {
    let len = samples.len();
    let delay_samples = (delay_secs * sample_rate as f32) as usize;
    if delay_samples == 0 || delay_samples >= len {
        return samples.to_vec();
    }

    let mut output = samples.to_vec();
    for i in delay_samples..len {
        output[i] += samples[i - delay_samples] * decay;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_decay_is_identity() {
        let input: Vec<f32> = (0..44100).map(|i| (i as f32 * 0.01).sin()).collect();
        assert_eq!(add_echo_with(&input, 44100, 0.3, 0.0), input);
    }

    #[test]
    fn delay_longer_than_buffer_is_skipped() {
        let input = vec![0.5_f32; 1000];
        // 0.3 s at 44100 Hz = 13230 samples > 1000.
        assert_eq!(add_echo(&input, 44100), input);
    }

    #[test]
    fn impulse_echoes_once() {
        let sr = 1000;
        let mut input = vec![0.0_f32; 1000];
        input[0] = 1.0;
        let output = add_echo(&input, sr);
        assert_eq!(output[0], 1.0);
        assert!((output[300] - 0.5).abs() < 1e-6, "echo at 0.3 s, gain 0.5");
        // Single tap: nothing at 600 samples.
        assert!(output[600].abs() < 1e-6);
    }

    #[test]
    fn pre_delay_region_is_dry() {
        let input: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.02).cos()).collect();
        let output = add_echo(&input, 1000);
        assert_eq!(&output[..300], &input[..300]);
    }
}
