//! Spectral-subtraction noise reduction.
//!
//! The noise floor is estimated as the 10th percentile of the magnitude
//! spectrum: the quietest bins of a clip are assumed to be noise. Half the
//! floor is subtracted from every bin's magnitude, clamped so no bin loses
//! more than 90% of its level (a hard zero would smear musical noise across
//! the clip on reconstruction). Phase is left untouched.
//!
//! The subtraction factor and magnitude floor are fixed constants, not
//! user-tunable parameters; the configuration only toggles the stage.

use crate::fft;
use rustfft::num_complex::Complex;

/// Fraction of the noise floor subtracted from each bin's magnitude.
pub const SUBTRACTION_FACTOR: f32 = 0.5;

/// Minimum fraction of the original magnitude a bin may keep.
pub const MAGNITUDE_FLOOR: f32 = 0.1;

/// Percentile (0..1) of the magnitude distribution used as the noise floor.
const NOISE_PERCENTILE: f32 = 0.1;

/// Reduce stationary background noise in a mono signal.
pub fn reduce_noise(samples: &[f32]) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let spectrum = fft::forward(samples);
    let magnitudes: Vec<f32> = spectrum.iter().map(|bin| bin.norm()).collect();
    let floor = percentile(&magnitudes, NOISE_PERCENTILE);

    let cleaned: Vec<Complex<f32>> = spectrum
        .iter()
        .zip(magnitudes.iter())
        .map(|(bin, &mag)| {
            let reduced = (mag - SUBTRACTION_FACTOR * floor).max(MAGNITUDE_FLOOR * mag);
            Complex::from_polar(reduced, bin.arg())
        })
        .collect();

    fft::inverse_real(&cleaned)
}

/// Nearest-rank percentile of an unsorted slice. `q` is in 0..1.
fn percentile(values: &[f32], q: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let rank = ((sorted.len() - 1) as f32 * q).round() as usize;
    sorted[rank]
}
