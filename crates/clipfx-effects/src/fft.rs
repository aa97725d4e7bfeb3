//! Whole-buffer FFT helpers for the frequency-domain stages.
//!
//! The equalizer and noise reducer transform the *entire* clip at once rather
//! than framing it: clips here are short, and a single transform keeps the
//! stages stateless. `rustfft` handles arbitrary (non-power-of-two) lengths,
//! so no padding is required and the inverse transform returns exactly as
//! many samples as went in.

use rustfft::{FftPlanner, num_complex::Complex};

/// Forward FFT of a real signal.
///
/// Returns the full complex spectrum (all `input.len()` bins, positive and
/// negative frequencies). An empty input yields an empty spectrum.
pub fn forward(input: &[f32]) -> Vec<Complex<f32>> {
    let mut buffer: Vec<Complex<f32>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }
    FftPlanner::new()
        .plan_fft_forward(buffer.len())
        .process(&mut buffer);
    buffer
}

/// Inverse FFT, returning the real part of the time-domain signal.
///
/// Applies the `1/N` normalization that `rustfft` leaves to the caller.
pub fn inverse_real(spectrum: &[Complex<f32>]) -> Vec<f32> {
    if spectrum.is_empty() {
        return Vec::new();
    }
    let mut buffer = spectrum.to_vec();
    FftPlanner::new()
        .plan_fft_inverse(buffer.len())
        .process(&mut buffer);
    let scale = 1.0 / buffer.len() as f32;
    buffer.iter().map(|c| c.re * scale).collect()
}

/// Signed center frequency of FFT bin `bin` in Hz.
///
/// Bins up to `len / 2` map to positive frequencies `bin * sr / len`; bins
/// above map to the mirrored negative frequencies, matching the layout of
/// the full complex spectrum returned by [`forward`].
pub fn bin_frequency(bin: usize, len: usize, sample_rate: u32) -> f32 {
    debug_assert!(bin < len);
    let sr = sample_rate as f32;
    if bin <= len / 2 {
        bin as f32 * sr / len as f32
    } else {
        (bin as f32 - len as f32) * sr / len as f32
    }
}
