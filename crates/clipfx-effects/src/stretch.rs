//! Time stretching and pitch shifting via a phase vocoder.
//!
//! # Theory
//!
//! The signal is analyzed in overlapping Hann-windowed STFT frames taken at
//! an analysis hop of `hop_out * factor`, and resynthesized at a fixed
//! synthesis hop of `window / 4`. Per-bin phase is propagated between frames
//! from the measured instantaneous frequency, which preserves pitch while
//! the frame timing changes duration.
//!
//! Pitch shifting composes the two primitives: stretch the clip by the pitch
//! ratio, then resample it back to the original length. The resampling speeds
//! playback up (or down) by the same ratio, moving pitch without moving
//! duration.
//!
//! Reference: J. L. Flanagan and R. M. Golden, "Phase Vocoder",
//! Bell System Technical Journal, 1966; and M. Dolson, "The Phase Vocoder:
//! A Tutorial", Computer Music Journal, 1986.

use rustfft::{FftPlanner, num_complex::Complex};
use std::f32::consts::PI;

/// STFT frame length in samples.
const WINDOW_SIZE: usize = 2048;

/// Synthesis overlap factor (hop = window / OVERLAP).
const OVERLAP: usize = 4;

/// Time-stretch a mono signal by a speed factor, preserving pitch.
///
/// `factor > 1.0` speeds the clip up (shorter output), `factor < 1.0` slows
/// it down. The output length is exactly `round(len / factor)` samples.
///
/// Buffers too short for even one STFT frame fall back to plain linear
/// resampling; at those lengths (a few milliseconds) there is no meaningful
/// pitch to preserve.
///
/// # Panics
/// Debug-asserts that `factor` is finite and positive; the pipeline rejects
/// degenerate factors before calling.
pub fn time_stretch(samples: &[f32], factor: f32) -> Vec<f32> {
    debug_assert!(factor.is_finite() && factor > 0.0, "bad stretch factor");
    if samples.is_empty() || (factor - 1.0).abs() < 1e-6 {
        return samples.to_vec();
    }

    let target_len = (samples.len() as f64 / factor as f64).round() as usize;
    if target_len == 0 {
        return Vec::new();
    }

    let mut window = WINDOW_SIZE;
    while window > samples.len() {
        window /= 2;
    }
    if window < 64 {
        return resample_linear(samples, target_len, samples.len() as f64 / target_len as f64);
    }

    let hop_out = window / OVERLAP;
    let hop_in = ((hop_out as f32 * factor).round() as usize).max(1);
    // Enough frames to consume the input, and enough that the overlap-add
    // output reaches target_len without trailing zero padding. The extra
    // frames read past the input end as zero-padded, so the clip tail is
    // tapered content rather than hard silence.
    let frames_from_input = (samples.len() - window) / hop_in + 1;
    let frames_for_output = if target_len > window {
        (target_len - window).div_ceil(hop_out) + 1
    } else {
        1
    };
    let frame_count = frames_from_input.max(frames_for_output);

    // Periodic Hann, used for both analysis and synthesis.
    let hann: Vec<f32> = (0..window)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f32 / window as f32).cos()))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(window);
    let ifft = planner.plan_fft_inverse(window);

    // Expected per-bin phase advance over one analysis hop.
    let expected: Vec<f32> = (0..window)
        .map(|k| 2.0 * PI * k as f32 / window as f32 * hop_in as f32)
        .collect();

    let out_len = (frame_count - 1) * hop_out + window;
    let mut output = vec![0.0_f32; out_len];
    let mut window_sum = vec![0.0_f32; out_len];
    let mut prev_phase = vec![0.0_f32; window];
    let mut phase_acc = vec![0.0_f32; window];
    let mut frame = vec![Complex::new(0.0, 0.0); window];

    for t in 0..frame_count {
        let start = t * hop_in;
        for i in 0..window {
            let x = samples.get(start + i).copied().unwrap_or(0.0);
            frame[i] = Complex::new(x * hann[i], 0.0);
        }
        fft.process(&mut frame);

        for k in 0..window {
            let magnitude = frame[k].norm();
            let phase = frame[k].arg();
            if t == 0 {
                phase_acc[k] = phase;
            } else {
                // Deviation from the bin center frequency, wrapped to ±π,
                // then rescaled from the analysis hop to the synthesis hop.
                let deviation = wrap_phase(phase - prev_phase[k] - expected[k]);
                let advance = (expected[k] + deviation) * hop_out as f32 / hop_in as f32;
                phase_acc[k] += advance;
            }
            prev_phase[k] = phase;
            frame[k] = Complex::from_polar(magnitude, phase_acc[k]);
        }

        ifft.process(&mut frame);
        let scale = 1.0 / window as f32;
        let out_start = t * hop_out;
        for i in 0..window {
            output[out_start + i] += frame[i].re * scale * hann[i];
            window_sum[out_start + i] += hann[i] * hann[i];
        }
    }

    for (sample, wsum) in output.iter_mut().zip(window_sum.iter()) {
        *sample /= wsum.max(1e-8);
    }

    output.resize(target_len, 0.0);
    output
}

/// Shift pitch by `semitones` without changing duration.
///
/// The output has exactly the input's length. `semitones == 0.0` is an exact
/// no-op.
pub fn pitch_shift(samples: &[f32], semitones: f32) -> Vec<f32> {
    if samples.is_empty() || semitones == 0.0 {
        return samples.to_vec();
    }
    let ratio = 2.0_f32.powf(semitones / 12.0);

    // Stretch duration by the pitch ratio, then resample back: the playback
    // speedup moves pitch, the stretch cancels the duration change.
    let stretched = time_stretch(samples, 1.0 / ratio);
    resample_linear(&stretched, samples.len(), ratio as f64)
}

/// Linear-interpolation resampler reading `input` at a fixed fractional step.
fn resample_linear(input: &[f32], target_len: usize, step: f64) -> Vec<f32> {
    if input.is_empty() {
        return vec![0.0; target_len];
    }
    let mut output = Vec::with_capacity(target_len);
    for i in 0..target_len {
        let pos = i as f64 * step;
        let i0 = pos as usize;
        if i0 >= input.len() {
            output.push(0.0);
            continue;
        }
        let i1 = (i0 + 1).min(input.len() - 1);
        let frac = (pos - i0 as f64) as f32;
        output.push(input[i0] * (1.0 - frac) + input[i1] * frac);
    }
    output
}

/// Wrap a phase difference to (-π, π].
fn wrap_phase(x: f32) -> f32 {
    x - 2.0 * PI * (x / (2.0 * PI)).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    /// Single-bin DFT magnitude, normalized by length.
    fn spectral_peak_at(signal: &[f32], freq_hz: f32, sample_rate: f32) -> f32 {
        let mut re = 0.0_f32;
        let mut im = 0.0_f32;
        for (i, &s) in signal.iter().enumerate() {
            let phase = 2.0 * PI * freq_hz * i as f32 / sample_rate;
            re += s * phase.cos();
            im += s * phase.sin();
        }
        (re * re + im * im).sqrt() / signal.len() as f32
    }

    #[test]
    fn unity_factor_is_identity() {
        let input = sine(440.0, 44100.0, 8192);
        assert_eq!(time_stretch(&input, 1.0), input);
    }

    #[test]
    fn stretch_output_length_exact() {
        let input = vec![0.0_f32; 24000];
        assert_eq!(time_stretch(&input, 1.5).len(), 16000);
        assert_eq!(time_stretch(&input, 0.5).len(), 48000);
    }

    #[test]
    fn stretch_preserves_pitch() {
        // 3 s of 440 Hz sped up to 2 s must still peak at 440 Hz, not 660.
        let sr = 8000.0;
        let input = sine(440.0, sr, 24000);
        let output = time_stretch(&input, 1.5);

        let at_pitch = spectral_peak_at(&output[2048..14000], 440.0, sr);
        let shifted = spectral_peak_at(&output[2048..14000], 660.0, sr);
        assert!(
            at_pitch > shifted * 4.0,
            "pitch must be preserved: 440 Hz={at_pitch}, 660 Hz={shifted}"
        );
    }

    #[test]
    fn pitch_shift_preserves_length() {
        let input = sine(440.0, 44100.0, 13231);
        assert_eq!(pitch_shift(&input, 2.0).len(), 13231);
        assert_eq!(pitch_shift(&input, -5.0).len(), 13231);
    }

    #[test]
    fn zero_semitones_is_identity() {
        let input = sine(440.0, 44100.0, 4096);
        assert_eq!(pitch_shift(&input, 0.0), input);
    }

    #[test]
    fn octave_up_doubles_frequency() {
        let sr = 8000.0;
        let input = sine(220.0, sr, 32000);
        let output = pitch_shift(&input, 12.0);

        let shifted = spectral_peak_at(&output[2048..30000], 440.0, sr);
        let original = spectral_peak_at(&output[2048..30000], 220.0, sr);
        assert!(
            shifted > original * 2.0,
            "octave up: 440 Hz={shifted} should dominate 220 Hz={original}"
        );
    }

    #[test]
    fn short_buffer_does_not_panic() {
        let input = vec![0.5_f32; 10];
        assert_eq!(time_stretch(&input, 2.0).len(), 5);
        assert_eq!(pitch_shift(&input, 3.0).len(), 10);
    }

    #[test]
    fn slowdown_tail_is_content_not_padding() {
        // Slowing down must keep synthesizing to the full output length; the
        // final stretch of the clip carries signal, not appended zeros.
        let sr = 8000.0;
        let input = sine(440.0, sr, 16000);
        let output = time_stretch(&input, 0.5);
        assert_eq!(output.len(), 32000);

        let tail = &output[32000 - 1024..];
        let tail_rms =
            (tail.iter().map(|s| s * s).sum::<f32>() / tail.len() as f32).sqrt();
        assert!(
            tail_rms > 0.05,
            "tail should carry signal, rms={tail_rms}"
        );
    }

    #[test]
    fn silence_stays_silent() {
        let output = time_stretch(&vec![0.0_f32; 10000], 1.25);
        assert!(output.iter().all(|s| s.abs() < 1e-6));
    }

    #[test]
    fn output_is_finite() {
        let input = sine(1000.0, 44100.0, 20000);
        for factor in [0.5, 0.75, 1.3, 2.0] {
            assert!(time_stretch(&input, factor).iter().all(|s| s.is_finite()));
        }
    }
}
