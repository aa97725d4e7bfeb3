//! Clipfx Core - the sample buffer model shared by every pipeline stage.
//!
//! A [`SampleBuffer`] is a finite sequence of `f32` amplitudes plus a sample
//! rate and a channel count. Buffers move through the pipeline by value: each
//! stage consumes one buffer and returns a new one, so no two stages ever
//! alias the same sample data.
//!
//! # Conventions
//!
//! - Samples are nominally in [-1.0, 1.0] but are **not** clamped between
//!   stages; only the finalizer re-normalizes before encoding.
//! - Stereo data is interleaved (`L R L R ...`).
//! - The sample rate never changes for the lifetime of a buffer. Stages that
//!   change duration (tempo, pitch) change the sample *count*, not the
//!   declared rate.
//!
//! # Level math
//!
//! - [`db_to_linear`] / [`linear_to_db`] - dB and linear gain conversions
//! - [`peak`] / [`rms`] - level measurement over a slice

pub mod buffer;
pub mod math;

pub use buffer::SampleBuffer;
pub use math::{db_to_linear, linear_to_db, peak, rms};
