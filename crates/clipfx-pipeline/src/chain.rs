//! Fixed-order stage chain.
//!
//! The one hard invariant of the orchestrator is stage order. It is encoded
//! as a single explicit table of descriptors rather than a ladder of `if`
//! blocks: each entry names the stage, says when the configuration activates
//! it, and applies it. Adding a stage means adding one row in the right
//! position; the iteration below never changes.
//!
//! ```text
//! tempo -> equalizer -> noise reduction -> compression -> reverb -> echo
//!       -> pitch shift -> fade -> volume -> stereo widening
//! ```
//!
//! Every stage consumes its input buffer and returns a new one. Stages up to
//! and including volume operate on mono data; stereo widening, last in the
//! table, is the only stage that changes the channel count.

use crate::config::EffectConfig;
use clipfx_core::SampleBuffer;
use clipfx_effects::{
    add_echo, add_reverb, apply_volume, compress, equalize, fade, pitch_shift, reduce_noise,
    time_stretch, widen_stereo,
};

/// One row of the stage table.
pub struct StageDescriptor {
    /// Stage name, for logging.
    pub name: &'static str,
    /// Whether the configuration turns this stage on.
    pub active: fn(&EffectConfig) -> bool,
    /// The transform itself.
    pub apply: fn(SampleBuffer, &EffectConfig) -> SampleBuffer,
}

/// Rebuild a buffer from transformed mono samples, keeping its time base.
fn remap(buffer: SampleBuffer, f: impl FnOnce(&[f32], u32) -> Vec<f32>) -> SampleBuffer {
    let sample_rate = buffer.sample_rate();
    SampleBuffer::from_mono(f(buffer.samples(), sample_rate), sample_rate)
}

/// The stage table, in processing order.
pub static STAGES: &[StageDescriptor] = &[
    StageDescriptor {
        name: "tempo",
        active: |c| (c.tempo - 1.0).abs() > f32::EPSILON,
        apply: |b, c| remap(b, |s, _| time_stretch(s, c.tempo)),
    },
    StageDescriptor {
        name: "equalizer",
        active: |c| c.bass_boost != 0.0 || c.treble_boost != 0.0,
        apply: |b, c| remap(b, |s, sr| equalize(s, sr, c.bass_boost, c.treble_boost)),
    },
    StageDescriptor {
        name: "noise_reduction",
        active: |c| c.noise_reduction,
        apply: |b, _| remap(b, |s, _| reduce_noise(s)),
    },
    StageDescriptor {
        name: "compression",
        active: |c| c.compression,
        apply: |b, _| remap(b, |s, _| compress(s)),
    },
    StageDescriptor {
        name: "reverb",
        active: |c| c.reverb,
        apply: |b, _| remap(b, |s, sr| add_reverb(s, sr)),
    },
    StageDescriptor {
        name: "echo",
        active: |c| c.echo,
        apply: |b, _| remap(b, |s, sr| add_echo(s, sr)),
    },
    StageDescriptor {
        name: "pitch_shift",
        active: |c| c.pitch_shift != 0.0,
        apply: |b, c| remap(b, |s, _| pitch_shift(s, c.pitch_shift)),
    },
    StageDescriptor {
        name: "fade",
        active: |c| c.fade_in > 0.0 || c.fade_out > 0.0,
        apply: |b, c| remap(b, |s, sr| fade(s, sr, c.fade_in, c.fade_out)),
    },
    StageDescriptor {
        name: "volume",
        // Always applied, even at unity.
        active: |_| true,
        apply: |b, c| remap(b, |s, _| apply_volume(s, c.volume)),
    },
    StageDescriptor {
        name: "stereo_wide",
        active: |c| c.stereo_wide,
        apply: |b, _| {
            // Only widen a buffer that is still mono.
            if b.channels() != 1 {
                return b;
            }
            let sample_rate = b.sample_rate();
            SampleBuffer::from_interleaved(widen_stereo(b.samples()), sample_rate, 2)
        },
    },
];

/// Run every active stage over the buffer, in table order.
pub fn run_stages(mut buffer: SampleBuffer, config: &EffectConfig) -> SampleBuffer {
    for stage in STAGES {
        if !(stage.active)(config) {
            continue;
        }
        let frames_in = buffer.frames();
        buffer = (stage.apply)(buffer, config);
        tracing::debug!(
            stage = stage.name,
            frames_in,
            frames_out = buffer.frames(),
            channels = buffer.channels(),
            "stage applied"
        );
    }
    buffer
}
