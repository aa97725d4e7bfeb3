//! Owned sample buffers and channel conversions.

use crate::math::peak;

/// A finite, owned sequence of audio samples plus its time base.
///
/// Stereo data is interleaved (`L R L R ...`). The invariant
/// `samples.len() == frames * channels` holds for every constructor and
/// every method that returns a new buffer.
///
/// # Example
/// ```rust
/// use clipfx_core::SampleBuffer;
///
/// let buf = SampleBuffer::from_mono(vec![0.0, 0.5, -0.5], 44100);
/// assert_eq!(buf.frames(), 3);
/// assert_eq!(buf.channels(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl SampleBuffer {
    /// Create a mono buffer.
    pub fn from_mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            channels: 1,
        }
    }

    /// Create a buffer from interleaved samples.
    ///
    /// # Panics
    /// Panics if `channels` is zero or `samples.len()` is not a multiple of
    /// `channels`.
    pub fn from_interleaved(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        assert!(channels >= 1, "channel count must be >= 1");
        assert_eq!(
            samples.len() % channels as usize,
            0,
            "interleaved sample count must be a multiple of the channel count"
        );
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count (1 = mono, 2 = stereo).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Interleaved sample data.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer, returning its interleaved sample data.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Maximum absolute amplitude across all channels.
    pub fn peak(&self) -> f32 {
        peak(&self.samples)
    }

    /// Downmix to mono by averaging channels per frame.
    ///
    /// Mono buffers pass through unchanged.
    pub fn downmix_to_mono(self) -> Self {
        if self.channels == 1 {
            return self;
        }
        let channels = self.channels as usize;
        let mono: Vec<f32> = self
            .samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect();
        Self::from_mono(mono, self.sample_rate)
    }

    /// Scale the buffer so its peak absolute amplitude is exactly 1.0.
    ///
    /// A silent buffer (peak == 0) is returned unchanged; this is the
    /// documented divide-by-zero guard, not an error.
    pub fn normalize_peak(mut self) -> Self {
        let p = self.peak();
        if p > 0.0 {
            let scale = 1.0 / p;
            for s in &mut self.samples {
                *s *= scale;
            }
        }
        self
    }
}
