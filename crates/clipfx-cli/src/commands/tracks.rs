//! Background-track listing command.

use clap::Args;
use clipfx_io::TrackCatalog;
use std::path::PathBuf;

#[derive(Args)]
pub struct TracksArgs {
    /// Directory of background-track WAV files
    #[arg(value_name = "DIR")]
    dir: PathBuf,
}

pub fn run(args: TracksArgs) -> anyhow::Result<()> {
    let catalog = TrackCatalog::load(&args.dir)?;
    if catalog.is_empty() {
        println!("No tracks found in {}", args.dir.display());
        return Ok(());
    }

    println!("Available background tracks:");
    for track in catalog.list() {
        println!("  {:<16} {}", track.id, track.name);
    }
    Ok(())
}
