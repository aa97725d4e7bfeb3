//! Audio I/O boundary for clipfx.
//!
//! The pipeline works on raw [`SampleBuffer`]s; this crate is where files
//! enter and leave. It provides:
//!
//! - **WAV decode/encode**: [`read_wav`], [`read_wav_info`], and
//!   [`write_wav`] over `hound`. The writer is the single quantization
//!   point: buffers stay floating point until they are encoded as 16-bit
//!   PCM on the way out.
//! - **Track catalog**: [`TrackCatalog`] loads a directory of background
//!   WAV assets once at startup and serves them read-only through the
//!   pipeline's `TrackSource` trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clipfx_io::{read_wav, write_wav};
//! use clipfx_pipeline::{EffectConfig, NoTracks, process};
//!
//! let clip = read_wav("input.wav")?;
//! let out = process(clip, &EffectConfig::default(), &NoTracks)?;
//! write_wav("output.wav", &out)?;
//! ```
//!
//! [`SampleBuffer`]: clipfx_core::SampleBuffer

mod catalog;
mod wav;

pub use catalog::{TrackCatalog, TrackInfo};
pub use wav::{WavInfo, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
