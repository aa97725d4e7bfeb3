//! Typed effect configuration.
//!
//! The request boundary hands the pipeline a flat JSON mapping of effect
//! parameters. It is parsed exactly once into this typed structure: every
//! recognized field is explicit, every missing field takes its documented
//! no-op default, and unknown keys are ignored. Stages never read raw
//! key/value data themselves.
//!
//! | Field | Default | No-op meaning |
//! |---|---|---|
//! | `volume` | 1.0 | unity gain (still applied) |
//! | `tempo` | 1.0 | stage skipped |
//! | `pitch_shift` | 0.0 semitones | stage skipped |
//! | `bass_boost` / `treble_boost` | 0.0 dB | stage skipped when both zero |
//! | `fade_in` / `fade_out` | 0.0 s | side skipped |
//! | `reverb`, `echo`, `noise_reduction`, `compression`, `stereo_wide` | false | stage skipped |
//! | `background_music` | absent | mixer skipped |
//! | `background_volume` | 0.3 | background level fraction |

use crate::error::{ConfigError, PipelineError};
use serde::{Deserialize, Serialize};

/// Effect parameters for one pipeline invocation.
///
/// Immutable input: the pipeline never writes back into the configuration.
/// Parameter *clamping* is the caller's responsibility; the pipeline only
/// rejects values that make a transform meaningless (see [`validate`]).
///
/// [`validate`]: EffectConfig::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Uniform output gain. Always applied, even at 1.0.
    pub volume: f32,
    /// Playback speed factor; >1 speeds up, <1 slows down, pitch preserved.
    pub tempo: f32,
    /// Pitch shift in semitones, duration preserved.
    pub pitch_shift: f32,
    /// Shelving boost below 300 Hz, in dB.
    pub bass_boost: f32,
    /// Shelving boost above 3 kHz, in dB.
    pub treble_boost: f32,
    /// Linear fade-in length in seconds.
    pub fade_in: f32,
    /// Linear fade-out length in seconds.
    pub fade_out: f32,
    /// Multi-tap delay reverb toggle.
    pub reverb: bool,
    /// Single-tap echo toggle.
    pub echo: bool,
    /// Spectral-subtraction noise reduction toggle.
    pub noise_reduction: bool,
    /// Hard-knee compression toggle.
    pub compression: bool,
    /// Mono to pseudo-stereo widening toggle.
    pub stereo_wide: bool,
    /// Background track id; `None` or `"none"` means no mixing.
    pub background_music: Option<String>,
    /// Background level fraction in [0, 1]; 1.0 is loudest.
    pub background_volume: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            tempo: 1.0,
            pitch_shift: 0.0,
            bass_boost: 0.0,
            treble_boost: 0.0,
            fade_in: 0.0,
            fade_out: 0.0,
            reverb: false,
            echo: false,
            noise_reduction: false,
            compression: false,
            stereo_wide: false,
            background_music: None,
            background_volume: 0.3,
        }
    }
}

impl EffectConfig {
    /// Parse a configuration from the request boundary's JSON mapping.
    ///
    /// Unknown keys are ignored; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The background track id to mix, if any.
    ///
    /// Returns `None` for an absent id, an empty string, or the literal
    /// `"none"` - all three mean "skip mixing".
    pub fn background_track(&self) -> Option<&str> {
        match self.background_music.as_deref() {
            None | Some("") | Some("none") => None,
            Some(id) => Some(id),
        }
    }

    /// Reject parameter values the transforms cannot compute with.
    ///
    /// This is not range clamping: callers may pass any loudness or boost
    /// they like. Only values that break the math (non-finite numbers, a
    /// non-positive tempo) fail, and they fail the whole invocation before
    /// any stage runs.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            return Err(PipelineError::InvalidParameter {
                stage: "tempo",
                param: "factor",
                value: self.tempo,
            });
        }
        if !self.pitch_shift.is_finite() {
            return Err(PipelineError::InvalidParameter {
                stage: "pitch_shift",
                param: "semitones",
                value: self.pitch_shift,
            });
        }
        if !self.volume.is_finite() {
            return Err(PipelineError::InvalidParameter {
                stage: "volume",
                param: "gain",
                value: self.volume,
            });
        }
        if !self.background_volume.is_finite() {
            return Err(PipelineError::InvalidParameter {
                stage: "background_mix",
                param: "background_volume",
                value: self.background_volume,
            });
        }
        for (param, value) in [
            ("bass_boost", self.bass_boost),
            ("treble_boost", self.treble_boost),
        ] {
            if !value.is_finite() {
                return Err(PipelineError::InvalidParameter {
                    stage: "equalizer",
                    param,
                    value,
                });
            }
        }
        Ok(())
    }
}
