//! Property-based pipeline invariants.

use clipfx_core::SampleBuffer;
use clipfx_pipeline::{EffectConfig, NoTracks, process};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = EffectConfig> {
    (
        0.1f32..=2.0,   // volume
        0.5f32..=2.0,   // tempo
        -12.0f32..=12.0, // pitch_shift
        -20.0f32..=20.0, // bass_boost
        -20.0f32..=20.0, // treble_boost
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(volume, tempo, pitch, bass, treble, reverb, echo, nr, comp, wide)| EffectConfig {
                volume,
                tempo,
                pitch_shift: pitch,
                bass_boost: bass,
                treble_boost: treble,
                reverb,
                echo,
                noise_reduction: nr,
                compression: comp,
                stereo_wide: wide,
                ..EffectConfig::default()
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any valid configuration over any finite input yields finite samples
    /// whose peak never exceeds full scale.
    #[test]
    fn output_is_finite_and_normalized(
        samples in prop::collection::vec(-1.0f32..=1.0, 256..4096),
        config in arb_config(),
    ) {
        let input = SampleBuffer::from_mono(samples, 8000);
        let output = process(input, &config, &NoTracks).unwrap();
        prop_assert!(output.samples().iter().all(|s| s.is_finite()));
        prop_assert!(output.peak() <= 1.0 + 1e-5);
    }

    /// Tempo is the only stage that changes duration, and it does so by
    /// exactly the configured factor.
    #[test]
    fn duration_follows_tempo(
        samples in prop::collection::vec(-1.0f32..=1.0, 1024..4096),
        tempo in 0.5f32..=2.0,
    ) {
        let len = samples.len();
        let input = SampleBuffer::from_mono(samples, 8000);
        let config = EffectConfig { tempo, ..EffectConfig::default() };
        let output = process(input, &config, &NoTracks).unwrap();
        let expected = (len as f64 / tempo as f64).round() as usize;
        prop_assert_eq!(output.frames(), expected);
    }
}
