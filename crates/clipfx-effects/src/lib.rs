//! Clipfx Effects - the stage library.
//!
//! Every stage is a pure function over a mono sample slice: it reads its
//! input, allocates a new output, and touches no global or request-scoped
//! state. This makes the whole chain deterministic and trivially retryable.
//!
//! Stages fall into three families:
//!
//! - **Frequency-domain**: [`equalize`], [`reduce_noise`] - whole-buffer FFT
//!   via `rustfft`, filter in the spectrum, inverse transform, real part.
//! - **Time-domain**: [`compress`], [`add_reverb`], [`add_echo`], [`fade`],
//!   [`apply_volume`], [`widen_stereo`] - direct sample arithmetic.
//! - **Length-changing**: [`time_stretch`], [`pitch_shift`] - phase-vocoder
//!   resynthesis; these change the sample *count*, never the declared rate.
//!
//! The fixed application order of stages is owned by `clipfx-pipeline`; this
//! crate only defines the transforms themselves.

pub mod compressor;
pub mod echo;
pub mod equalizer;
pub mod fade;
pub mod fft;
pub mod gain;
pub mod noise;
pub mod reverb;
pub mod stereo;
pub mod stretch;

pub use compressor::{compress, compress_with};
pub use echo::{add_echo, add_echo_with};
pub use equalizer::equalize;
pub use fade::fade;
pub use gain::apply_volume;
pub use noise::reduce_noise;
pub use reverb::{add_reverb, add_reverb_with};
pub use stereo::widen_stereo;
pub use stretch::{pitch_shift, time_stretch};
