//! Property-based tests for the buffer model.

use clipfx_core::SampleBuffer;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalization always yields a peak of exactly 1.0 for non-silent input,
    /// and leaves silence untouched.
    #[test]
    fn normalize_peak_is_unity_or_noop(samples in prop::collection::vec(-4.0f32..=4.0, 1..512)) {
        let silent = samples.iter().all(|s| *s == 0.0);
        let buf = SampleBuffer::from_mono(samples, 48000).normalize_peak();
        if silent {
            prop_assert_eq!(buf.peak(), 0.0);
        } else {
            prop_assert!((buf.peak() - 1.0).abs() < 1e-5);
        }
    }

    /// Downmix preserves frame count and produces the per-frame mean.
    #[test]
    fn downmix_is_per_frame_mean(frames in prop::collection::vec((-1.0f32..=1.0, -1.0f32..=1.0), 1..256)) {
        let interleaved: Vec<f32> = frames.iter().flat_map(|(l, r)| [*l, *r]).collect();
        let stereo = SampleBuffer::from_interleaved(interleaved, 44100, 2);
        let mono = stereo.downmix_to_mono();
        prop_assert_eq!(mono.frames(), frames.len());
        for (out, (l, r)) in mono.samples().iter().zip(frames.iter()) {
            prop_assert!((out - (l + r) / 2.0).abs() < 1e-6);
        }
    }

    /// Normalization never flips sample signs.
    #[test]
    fn normalize_preserves_sign(samples in prop::collection::vec(-2.0f32..=2.0, 1..256)) {
        let buf = SampleBuffer::from_mono(samples.clone(), 48000).normalize_peak();
        for (before, after) in samples.iter().zip(buf.samples().iter()) {
            prop_assert!(before.signum() == after.signum() || *before == 0.0);
        }
    }
}
