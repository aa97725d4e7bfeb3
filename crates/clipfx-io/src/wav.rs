//! WAV file reading and writing.

use crate::Result;
use clipfx_core::SampleBuffer;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Output bit depth. Everything upstream is floating point; encoding to
/// 16-bit PCM here is the pipeline's single quantization point.
const OUTPUT_BITS: u16 = 16;

/// WAV file metadata extracted without loading sample data.
///
/// This is the clip report handed back for an upload before any processing
/// happens, and it is much cheaper than [`read_wav`] when only the header
/// matters.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / spec.channels as u64;

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs: num_frames as f64 / spec.sample_rate as f64,
    })
}

/// Read a WAV file into a [`SampleBuffer`], channels preserved.
///
/// Integer PCM is scaled to [-1, 1] by its bit depth; float files pass
/// through as-is. Downmixing is the pipeline's job, not the decoder's.
///
/// # Example
/// ```ignore
/// let clip = read_wav("input.wav")?;
/// println!("{} frames at {} Hz", clip.frames(), clip.sample_rate());
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    tracing::debug!(
        frames = samples.len() / spec.channels as usize,
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        "decoded wav"
    );
    Ok(SampleBuffer::from_interleaved(
        samples,
        spec.sample_rate,
        spec.channels,
    ))
}

/// Write a buffer to a 16-bit PCM WAV file.
///
/// Samples are clamped to the representable range during quantization, so a
/// buffer that was never normalized still encodes without wrapping.
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: OUTPUT_BITS,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;

    let max_val = (1i32 << (OUTPUT_BITS - 1)) as f32;
    for &sample in buffer.samples() {
        let quantized = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
        writer.write_sample(quantized)?;
    }
    writer.finalize()?;

    tracing::debug!(frames = buffer.frames(), "encoded wav");
    Ok(())
}
