//! Effect pipeline orchestration for clipfx.
//!
//! Turns a decoded clip and a typed [`EffectConfig`] into a processed clip in
//! one deterministic, synchronous pass:
//!
//! ```text
//! input -> downmix to mono -> normalize -> stage chain -> background mix
//!       -> normalize -> output
//! ```
//!
//! The stage chain runs in a fixed order encoded as an explicit descriptor
//! table (see [`chain::STAGES`]). Stages are pure buffer transforms from
//! `clipfx-effects`; the mixer pulls background tracks from an injected
//! [`TrackSource`]. Nothing in this crate performs I/O, and an invocation
//! either returns a fully processed buffer or an error, never a partial
//! result.
//!
//! # Example
//! ```rust
//! use clipfx_core::SampleBuffer;
//! use clipfx_pipeline::{EffectConfig, NoTracks, process};
//!
//! let clip = SampleBuffer::from_mono(vec![0.1, -0.4, 0.3], 44100);
//! let config = EffectConfig {
//!     volume: 1.2,
//!     reverb: true,
//!     ..EffectConfig::default()
//! };
//! let out = process(clip, &config, &NoTracks).unwrap();
//! assert!((out.peak() - 1.0).abs() < 1e-6);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod mixer;
pub mod presets;

pub use config::EffectConfig;
pub use error::{ConfigError, PipelineError};
pub use mixer::{NoTracks, TrackSource};
pub use presets::{Preset, factory_preset, factory_preset_names, factory_presets};

use clipfx_core::SampleBuffer;

/// Run one full pipeline invocation.
///
/// Validates the configuration, downmixes the input to mono, normalizes it
/// to unit peak, applies every active stage in fixed order, mixes in the
/// configured background track, and normalizes once more so the result
/// peaks at full scale. Silent input passes through the normalization steps
/// unchanged.
///
/// # Errors
/// Returns [`PipelineError::InvalidParameter`] when the configuration holds
/// a value the transforms cannot compute with; no stage runs in that case.
pub fn process(
    input: SampleBuffer,
    config: &EffectConfig,
    tracks: &dyn TrackSource,
) -> Result<SampleBuffer, PipelineError> {
    config.validate()?;
    tracing::debug!(
        frames = input.frames(),
        channels = input.channels(),
        sample_rate = input.sample_rate(),
        "pipeline start"
    );

    let buffer = input.downmix_to_mono().normalize_peak();
    let buffer = chain::run_stages(buffer, config);
    let buffer = mixer::mix_background(buffer, config, tracks);
    let output = buffer.normalize_peak();

    tracing::debug!(
        frames = output.frames(),
        channels = output.channels(),
        "pipeline done"
    );
    Ok(output)
}
