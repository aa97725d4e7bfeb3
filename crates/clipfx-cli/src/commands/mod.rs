//! CLI command implementations.

pub mod generate;
pub mod info;
pub mod presets;
pub mod process;
pub mod tracks;
