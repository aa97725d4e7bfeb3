//! Uniform volume scaling.

/// Multiply every sample by `volume`.
///
/// Cheap enough that the pipeline applies it unconditionally, even at 1.0.
/// The result is not clipped; peak control happens in the finalizer.
pub fn apply_volume(samples: &[f32], volume: f32) -> Vec<f32> {
    samples.iter().map(|&x| x * volume).collect()
}
