//! Factory preset listing and inspection commands.

use clap::{Args, Subcommand};
use clipfx_pipeline::{factory_preset, factory_presets};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory presets
    List,

    /// Show the full configuration of a preset
    Show {
        /// Preset name
        name: String,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => {
            println!("Factory presets:");
            for preset in factory_presets() {
                println!("  {:<10} {}", preset.name, preset.description);
            }
            Ok(())
        }
        PresetsCommand::Show { name } => {
            let preset = factory_preset(&name)?;
            println!("{}: {}", preset.name, preset.description);
            println!("{}", serde_json::to_string_pretty(&preset.config)?);
            Ok(())
        }
    }
}
