//! Factory presets bundled with the pipeline.
//!
//! Named effect bundles that are always available without external files:
//! genre starting points a caller can apply as-is or tweak field by field.
//! Each preset is a TOML document embedded at compile time and parsed on
//! demand; the parse cannot fail for shipped presets (a test asserts it).

use crate::config::EffectConfig;
use crate::error::ConfigError;
use serde::Deserialize;

/// A named, described effect configuration bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// One-line description for listings.
    pub description: String,
    /// The effect configuration the preset applies.
    pub config: EffectConfig,
}

impl Preset {
    /// Parse a preset from its TOML representation.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }
}

/// TOML content for factory presets, in listing order.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("rock", ROCK_PRESET),
    ("hip_hop", HIP_HOP_PRESET),
    ("jazz", JAZZ_PRESET),
    ("ambient", AMBIENT_PRESET),
];

const ROCK_PRESET: &str = r#"
name = "Rock"
description = "Punchy and loud - boosted lows, compressed peaks"

[config]
volume = 1.2
bass_boost = 8.0
treble_boost = 3.0
compression = true
background_music = "beat1"
"#;

const HIP_HOP_PRESET: &str = r#"
name = "Hip Hop"
description = "Heavy bass with tight compression"

[config]
volume = 1.1
bass_boost = 12.0
treble_boost = -2.0
compression = true
background_music = "beat2"
"#;

const JAZZ_PRESET: &str = r#"
name = "Jazz"
description = "Bright and roomy - lifted highs with light reverb"

[config]
volume = 1.0
treble_boost = 5.0
reverb = true
background_music = "jazz"
"#;

const AMBIENT_PRESET: &str = r#"
name = "Ambient"
description = "Soft and spacious - pulled-back lows, long tail"

[config]
volume = 0.9
bass_boost = -3.0
treble_boost = 2.0
reverb = true
background_music = "ambient"
"#;

/// All factory presets, in listing order.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Look up a factory preset by id (case-insensitive).
pub fn factory_preset(name: &str) -> Result<Preset, ConfigError> {
    let wanted = name.to_lowercase();
    FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| *id == wanted)
        .map(|(_, toml)| Preset::from_toml(toml))
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?
}

/// The ids of all factory presets, in listing order.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_factory_presets_parse() {
        for (name, toml) in FACTORY_PRESETS_TOML {
            let preset = Preset::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory preset '{name}' must parse: {e}"));
            assert!(!preset.name.is_empty());
            assert!(!preset.description.is_empty());
            assert!(preset.config.validate().is_ok());
        }
    }

    #[test]
    fn preset_names_in_order() {
        assert_eq!(factory_preset_names(), ["rock", "hip_hop", "jazz", "ambient"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(factory_preset("Rock").unwrap().name, "Rock");
        assert_eq!(factory_preset("HIP_HOP").unwrap().name, "Hip Hop");
    }

    #[test]
    fn unknown_preset_errors() {
        assert!(matches!(
            factory_preset("metal"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn rock_preset_values() {
        let rock = factory_preset("rock").unwrap();
        assert_eq!(rock.config.volume, 1.2);
        assert_eq!(rock.config.bass_boost, 8.0);
        assert!(rock.config.compression);
        assert_eq!(rock.config.background_track(), Some("beat1"));
        // Unlisted fields take their defaults.
        assert_eq!(rock.config.tempo, 1.0);
        assert!(!rock.config.reverb);
    }

    #[test]
    fn ambient_preset_pulls_volume_back() {
        let ambient = factory_preset("ambient").unwrap();
        assert_eq!(ambient.config.volume, 0.9);
        assert!(ambient.config.reverb);
        assert!(!ambient.config.compression);
    }
}
