//! Clip processing command.

use anyhow::Context;
use clap::Args;
use clipfx_io::{TrackCatalog, read_wav, write_wav};
use clipfx_pipeline::{EffectConfig, NoTracks, TrackSource, factory_preset, process};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Effect configuration as inline JSON (e.g. '{"volume": 1.2, "reverb": true}')
    #[arg(short, long)]
    config: Option<String>,

    /// Effect configuration from a JSON file
    #[arg(long, conflicts_with = "config")]
    config_file: Option<PathBuf>,

    /// Factory preset to start from (config overrides apply on top)
    #[arg(short, long)]
    preset: Option<String>,

    /// Directory of background-track WAV files
    #[arg(long)]
    tracks_dir: Option<PathBuf>,
}

/// Resolve the effective configuration from preset and JSON sources.
///
/// A preset supplies the base; inline or file JSON, when given, replaces it
/// field by field (unlisted fields keep the preset's values by serializing
/// the base and re-parsing the merged map).
fn resolve_config(args: &ProcessArgs) -> anyhow::Result<EffectConfig> {
    let base = match &args.preset {
        Some(name) => factory_preset(name)?.config,
        None => EffectConfig::default(),
    };

    let overrides = match (&args.config, &args.config_file) {
        (Some(json), _) => Some(json.clone()),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let Some(json) = overrides else {
        return Ok(base);
    };

    let mut merged = serde_json::to_value(&base)?;
    let patch: serde_json::Value = serde_json::from_str(&json).context("parsing effect config")?;
    let (Some(merged_map), Some(patch_map)) = (merged.as_object_mut(), patch.as_object()) else {
        anyhow::bail!("effect config must be a JSON object");
    };
    for (key, value) in patch_map {
        merged_map.insert(key.clone(), value.clone());
    }
    Ok(serde_json::from_value(merged)?)
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;

    println!("Reading {}...", args.input.display());
    let clip = read_wav(&args.input)?;
    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        clip.frames(),
        clip.channels(),
        clip.sample_rate(),
        clip.duration_secs()
    );

    let catalog = match &args.tracks_dir {
        Some(dir) => Some(
            TrackCatalog::load(dir)
                .with_context(|| format!("loading tracks from {}", dir.display()))?,
        ),
        None => None,
    };
    if let (Some(id), None) = (config.background_track(), &catalog) {
        anyhow::bail!("config requests background track '{id}' but no --tracks-dir was given");
    }
    let tracks: &dyn TrackSource = match &catalog {
        Some(c) => c,
        None => &NoTracks,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Processing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = process(clip, &config, tracks)?;
    spinner.finish_and_clear();

    write_wav(&args.output, &output)?;
    println!(
        "Wrote {} ({:.2}s, {} channel(s))",
        args.output.display(),
        output.duration_secs(),
        output.channels()
    );
    Ok(())
}
