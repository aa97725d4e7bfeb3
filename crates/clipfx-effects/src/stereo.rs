//! Mono to pseudo-stereo widening.
//!
//! The left channel carries the original signal; the right channel the same
//! signal at [`RIGHT_GAIN`]. The slight level difference gives a wider image
//! without introducing any phase tricks that could break mono-compatibility.
//!
//! Widening is the last content-bearing stage in the chain: everything
//! upstream runs in mono, and the decision to fan out to two channels is
//! made exactly once.

/// Gain applied to the synthesized right channel.
pub const RIGHT_GAIN: f32 = 0.9;

/// Expand a mono signal into interleaved pseudo-stereo (`L R L R ...`).
pub fn widen_stereo(mono: &[f32]) -> Vec<f32> {
    let mut interleaved = Vec::with_capacity(mono.len() * 2);
    for &sample in mono {
        interleaved.push(sample);
        interleaved.push(sample * RIGHT_GAIN);
    }
    interleaved
}
