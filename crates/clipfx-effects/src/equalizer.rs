//! Two-band shelving equalizer via whole-buffer FFT.
//!
//! Bass and treble boosts are applied directly in the frequency domain:
//! every bin whose absolute center frequency is below [`BASS_CUTOFF_HZ`] is
//! scaled by the bass gain, every bin above [`TREBLE_CUTOFF_HZ`] by the
//! treble gain, and the signal is reconstructed from the real part of the
//! inverse transform. Both boosts are specified in dB; 0 dB on both bands is
//! an exact no-op (the pipeline skips the stage).
//!
//! Scaling positive and negative frequency bins together keeps the spectrum
//! conjugate-symmetric, so the inverse transform stays (numerically) real.

use crate::fft;
use clipfx_core::db_to_linear;

/// Bins below this absolute frequency get the bass gain.
pub const BASS_CUTOFF_HZ: f32 = 300.0;

/// Bins above this absolute frequency get the treble gain.
pub const TREBLE_CUTOFF_HZ: f32 = 3000.0;

/// Apply bass and treble shelving boosts (in dB) to a mono signal.
///
/// # Example
/// ```rust
/// use clipfx_effects::equalize;
///
/// let input = vec![0.1_f32; 256];
/// let output = equalize(&input, 44100, 6.0, -3.0);
/// assert_eq!(output.len(), input.len());
/// ```
pub fn equalize(
    samples: &[f32],
    sample_rate: u32,
    bass_boost_db: f32,
    treble_boost_db: f32,
) -> Vec<f32> {
    if samples.is_empty() || (bass_boost_db == 0.0 && treble_boost_db == 0.0) {
        return samples.to_vec();
    }

    let bass_gain = db_to_linear(bass_boost_db);
    let treble_gain = db_to_linear(treble_boost_db);

    let mut spectrum = fft::forward(samples);
    let len = spectrum.len();
    for (bin, value) in spectrum.iter_mut().enumerate() {
        let freq = fft::bin_frequency(bin, len, sample_rate).abs();
        if freq < BASS_CUTOFF_HZ {
            *value *= bass_gain;
        } else if freq > TREBLE_CUTOFF_HZ {
            *value *= treble_gain;
        }
    }

    fft::inverse_real(&spectrum)
}
