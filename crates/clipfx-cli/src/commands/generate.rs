//! Test signal generation command.

use clap::{Args, Subcommand};
use clipfx_core::SampleBuffer;
use clipfx_io::write_wav;
use std::f32::consts::PI;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "3.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate silence
    Silence {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let buffer = sine(freq, duration, sample_rate, amplitude);
            write_wav(&output, &buffer)?;
            println!(
                "Wrote {} ({freq} Hz tone, {duration}s at {sample_rate} Hz)",
                output.display()
            );
        }
        GenerateCommand::Silence {
            output,
            duration,
            sample_rate,
        } => {
            let len = (duration * sample_rate as f32) as usize;
            let buffer = SampleBuffer::from_mono(vec![0.0; len], sample_rate);
            write_wav(&output, &buffer)?;
            println!("Wrote {} ({duration}s of silence)", output.display());
        }
    }
    Ok(())
}

fn sine(freq: f32, duration: f32, sample_rate: u32, amplitude: f32) -> SampleBuffer {
    let len = (duration * sample_rate as f32) as usize;
    let samples = (0..len)
        .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin() * amplitude)
        .collect();
    SampleBuffer::from_mono(samples, sample_rate)
}
