//! Error types for configuration parsing and pipeline invocation.

use thiserror::Error;

/// Errors raised while parsing an effect configuration or preset, before the
/// pipeline runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The effect configuration JSON could not be parsed.
    #[error("invalid effect configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A preset file could not be parsed.
    #[error("invalid preset: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// No factory preset with the given name exists.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Errors raised by one pipeline invocation.
///
/// The pipeline fails as a single unit: a partially processed buffer is
/// never returned. Since every stage is deterministic and side-effect-free,
/// retrying the whole request with the same inputs is always safe.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage parameter makes the requested transform meaningless
    /// (e.g. a non-positive tempo factor).
    #[error("invalid {param} for {stage} stage: {value}")]
    InvalidParameter {
        /// Stage that rejected the parameter.
        stage: &'static str,
        /// Parameter name.
        param: &'static str,
        /// Offending value.
        value: f32,
    },

    /// Configuration failed to parse at the request boundary.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
