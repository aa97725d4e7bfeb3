//! Background-track mixing.
//!
//! The mixer runs after the stage chain and before final normalization. The
//! background track is looked up by id from an injected, read-only
//! [`TrackSource`]; the mixer never mutates the source's buffer, only copies,
//! loops, and trims it.
//!
//! Level mapping: the configured `background_volume` fraction in [0, 1]
//! becomes an attenuation of `20 - round(bv * 20)` dB, so 1.0 leaves the
//! track at full level and the 0.3 default cuts it by 14 dB. Mixing is plain
//! sample-wise addition; headroom is the finalizer's problem.

use crate::config::EffectConfig;
use clipfx_core::{SampleBuffer, db_to_linear};

/// Read-only lookup of decoded background tracks by id.
///
/// Implementations own their buffers; `get` returns a copy the mixer is free
/// to consume. An unknown id returns `None`, which the mixer treats as "skip
/// mixing", not an error.
pub trait TrackSource {
    /// Fetch the decoded track for `id`, if one exists.
    fn get(&self, id: &str) -> Option<SampleBuffer>;
}

/// A source with no tracks. Every lookup misses.
pub struct NoTracks;

impl TrackSource for NoTracks {
    fn get(&self, _id: &str) -> Option<SampleBuffer> {
        None
    }
}

/// Mix the configured background track into `primary`, if there is one.
///
/// The background is downmixed to mono, attenuated, looped in whole copies
/// until it covers the primary, trimmed to exactly the primary's frame
/// count, and added into every channel of the primary. Skipped entirely when
/// no track is configured, the id is unknown, or either buffer is empty.
pub fn mix_background(
    primary: SampleBuffer,
    config: &EffectConfig,
    tracks: &dyn TrackSource,
) -> SampleBuffer {
    let Some(id) = config.background_track() else {
        return primary;
    };
    let Some(track) = tracks.get(id) else {
        tracing::warn!(track = id, "background track not found, skipping mix");
        return primary;
    };
    if primary.frames() == 0 || track.frames() == 0 {
        return primary;
    }
    if track.sample_rate() != primary.sample_rate() {
        tracing::warn!(
            track = id,
            track_rate = track.sample_rate(),
            primary_rate = primary.sample_rate(),
            "background sample rate differs, mixing without resampling"
        );
    }

    let cut_db = 20.0 - (config.background_volume.clamp(0.0, 1.0) * 20.0).round();
    let gain = db_to_linear(-cut_db);
    let bed = track.downmix_to_mono();
    let bed = bed.samples();

    let frames = primary.frames();
    let sample_rate = primary.sample_rate();
    let channels = primary.channels();
    let mut samples = primary.into_samples();
    for (frame, chunk) in samples.chunks_mut(channels as usize).enumerate() {
        // Whole-copy looping: index wraps over the background.
        let b = bed[frame % bed.len()] * gain;
        for s in chunk {
            *s += b;
        }
    }

    tracing::debug!(track = id, frames, cut_db, "background mixed");
    SampleBuffer::from_interleaved(samples, sample_rate, channels)
}
