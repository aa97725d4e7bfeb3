//! End-to-end pipeline scenarios.

use clipfx_core::SampleBuffer;
use clipfx_pipeline::{EffectConfig, NoTracks, PipelineError, TrackSource, factory_preset, process};
use std::f32::consts::PI;

fn tone(freq: f32, seconds: f32, sample_rate: u32) -> SampleBuffer {
    let len = (seconds * sample_rate as f32) as usize;
    let samples = (0..len)
        .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin() * 0.5)
        .collect();
    SampleBuffer::from_mono(samples, sample_rate)
}

struct Beats;

impl TrackSource for Beats {
    fn get(&self, id: &str) -> Option<SampleBuffer> {
        (id == "beat1").then(|| tone(110.0, 1.0, 8000))
    }
}

#[test]
fn identity_config_normalizes_only() {
    let input = tone(440.0, 1.0, 8000);
    let output = process(input.clone(), &EffectConfig::default(), &NoTracks).unwrap();
    assert_eq!(output.frames(), input.frames());
    assert_eq!(output.channels(), 1);
    assert!((output.peak() - 1.0).abs() < 1e-6);
    // Same waveform up to the normalization scale.
    let scale = output.samples()[100] / input.samples()[100];
    for (o, i) in output.samples().iter().zip(input.samples()) {
        assert!((o - i * scale).abs() < 1e-4);
    }
}

#[test]
fn layered_effects_keep_duration() {
    // 3 s of 440 Hz through volume, pitch shift, reverb, and echo stays 3 s.
    let input = tone(440.0, 3.0, 8000);
    let config = EffectConfig {
        volume: 1.2,
        pitch_shift: 2.0,
        reverb: true,
        echo: true,
        ..EffectConfig::default()
    };
    let output = process(input, &config, &NoTracks).unwrap();
    assert!((output.duration_secs() - 3.0).abs() < 0.01);
    assert!(output.samples().iter().all(|s| s.is_finite()));
    assert!((output.peak() - 1.0).abs() < 1e-6);
}

#[test]
fn tempo_shortens_clip() {
    let input = tone(440.0, 3.0, 8000);
    let config = EffectConfig {
        tempo: 1.5,
        ..EffectConfig::default()
    };
    let output = process(input, &config, &NoTracks).unwrap();
    assert!((output.duration_secs() - 2.0).abs() < 0.01);
}

#[test]
fn silent_input_stays_silent() {
    let input = SampleBuffer::from_mono(vec![0.0; 8000], 8000);
    let config = EffectConfig {
        reverb: true,
        echo: true,
        compression: true,
        noise_reduction: true,
        ..EffectConfig::default()
    };
    let output = process(input, &config, &NoTracks).unwrap();
    assert_eq!(output.frames(), 8000);
    assert!(output.samples().iter().all(|s| s.abs() < 1e-6));
}

#[test]
fn stereo_input_downmixed_before_stages() {
    let frames = 4000;
    let mut interleaved = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        let s = (2.0 * PI * 440.0 * i as f32 / 8000.0).sin() * 0.5;
        interleaved.push(s);
        interleaved.push(-s); // cancels under the per-frame mean
    }
    let input = SampleBuffer::from_interleaved(interleaved, 8000, 2);
    let output = process(input, &EffectConfig::default(), &NoTracks).unwrap();
    assert_eq!(output.channels(), 1);
    assert!(output.samples().iter().all(|s| s.abs() < 1e-6));
}

#[test]
fn widening_produces_stereo_output() {
    let input = tone(440.0, 0.5, 8000);
    let frames = input.frames();
    let config = EffectConfig {
        stereo_wide: true,
        ..EffectConfig::default()
    };
    let output = process(input, &config, &NoTracks).unwrap();
    assert_eq!(output.channels(), 2);
    assert_eq!(output.frames(), frames);
}

#[test]
fn background_loops_to_cover_primary() {
    // 3 s primary over a 1 s background: the bed tiles without gaps.
    let input = tone(440.0, 3.0, 8000);
    let config = EffectConfig {
        background_music: Some("beat1".to_string()),
        background_volume: 1.0,
        ..EffectConfig::default()
    };
    let output = process(input, &config, &Beats).unwrap();
    assert_eq!(output.frames(), 24000);
    assert!(output.samples().iter().all(|s| s.is_finite()));
}

#[test]
fn unknown_background_is_skipped() {
    let input = tone(440.0, 1.0, 8000);
    let config = EffectConfig {
        background_music: Some("missing".to_string()),
        ..EffectConfig::default()
    };
    let with_bg = process(input.clone(), &config, &Beats).unwrap();
    let without = process(input, &EffectConfig::default(), &Beats).unwrap();
    assert_eq!(with_bg, without);
}

#[test]
fn processing_is_deterministic() {
    let input = tone(440.0, 1.0, 8000);
    let config = factory_preset("jazz").unwrap().config;
    let a = process(input.clone(), &config, &NoTracks).unwrap();
    let b = process(input, &config, &NoTracks).unwrap();
    assert_eq!(a, b);
}

#[test]
fn default_pipeline_is_idempotent() {
    // A second pass with the all-no-op config over already-normalized audio
    // must reproduce the first pass's output.
    let input = tone(440.0, 1.0, 8000);
    let once = process(input, &EffectConfig::default(), &NoTracks).unwrap();
    let twice = process(once.clone(), &EffectConfig::default(), &NoTracks).unwrap();
    assert_eq!(twice.frames(), once.frames());
    for (a, b) in once.samples().iter().zip(twice.samples()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn nan_background_volume_is_rejected_not_mixed() {
    // A non-finite level must fail the invocation up front instead of
    // propagating NaN through the mixer into an Ok result.
    let input = tone(440.0, 1.0, 8000);
    let config = EffectConfig {
        background_music: Some("beat1".to_string()),
        background_volume: f32::NAN,
        ..EffectConfig::default()
    };
    let err = process(input, &config, &Beats).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::InvalidParameter {
            stage: "background_mix",
            ..
        }
    ));
}

#[test]
fn invalid_tempo_fails_before_any_stage() {
    let input = tone(440.0, 1.0, 8000);
    let config = EffectConfig {
        tempo: -2.0,
        ..EffectConfig::default()
    };
    let err = process(input, &config, &NoTracks).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::InvalidParameter { stage: "tempo", .. }
    ));
}

#[test]
fn preset_pipeline_runs_end_to_end() {
    let input = tone(440.0, 1.0, 8000);
    for name in clipfx_pipeline::factory_preset_names() {
        let preset = factory_preset(name).unwrap();
        let output = process(input.clone(), &preset.config, &Beats).unwrap();
        assert!(output.frames() > 0, "preset {name} produced no audio");
        assert!((output.peak() - 1.0).abs() < 1e-6);
    }
}
