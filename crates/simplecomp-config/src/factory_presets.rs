//! Factory presets bundled with SimpleComp.
//!
//! These are embedded at compile time and always available without
//! external files.

use std::path::Path;

use crate::{ConfigError, Preset};

/// TOML content for factory presets, keyed by internal name.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("vocal_leveler", VOCAL_LEVELER_PRESET),
    ("drum_smash", DRUM_SMASH_PRESET),
    ("bus_glue", BUS_GLUE_PRESET),
    ("bass_tamer", BASS_TAMER_PRESET),
];

/// Plug-in defaults.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Default settings, no compression below full scale"

[params]
"input gain" = 0.0
"output gain" = 0.0
threshold = 0.0
ratio = 3.0
attack = 3.0
release = 3.0
"#;

const VOCAL_LEVELER_PRESET: &str = r#"
name = "Vocal Leveler"
description = "Moderate ratio with a medium release to even out a dynamic vocal"

[params]
"input gain" = 3.0
"output gain" = 2.0
threshold = -18.0
ratio = 4.0
attack = 2.0
release = 4.0
"#;

const DRUM_SMASH_PRESET: &str = r#"
name = "Drum Smash"
description = "Instant attack, high ratio and fast release for parallel drum crush"

[params]
"input gain" = 6.0
"output gain" = 6.0
threshold = -30.0
ratio = 10.0
attack = 0.0
release = 0.0
"#;

const BUS_GLUE_PRESET: &str = r#"
name = "Bus Glue"
description = "Gentle ratio, slow attack that lets transients through"

[params]
"input gain" = 0.0
"output gain" = 1.0
threshold = -12.0
ratio = 2.0
attack = 10.0
release = 8.0
"#;

const BASS_TAMER_PRESET: &str = r#"
name = "Bass Tamer"
description = "Holds a bass line steady with a long release"

[params]
threshold = -20.0
ratio = 5.0
attack = 4.0
release = 10.0
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use simplecomp_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by internal name or display name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use simplecomp_config::get_factory_preset;
///
/// assert!(get_factory_preset("drum_smash").is_some());
/// assert!(get_factory_preset("Vocal Leveler").is_some());
/// assert!(get_factory_preset("nope").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let name_lower = name.to_lowercase();

    for (preset_name, toml) in FACTORY_PRESETS_TOML {
        if preset_name.to_lowercase() == name_lower {
            return Preset::from_toml(toml).ok();
        }
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Internal names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Resolve a factory preset name, falling back to a TOML file path.
///
/// Returns [`ConfigError::PresetNotFound`] if `name` is neither.
pub fn find_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    let path = Path::new(name);
    if path.is_file() {
        return Preset::load(path);
    }

    Err(ConfigError::PresetNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplecomp_core::CompressorParam;

    #[test]
    fn test_all_factory_presets_valid() {
        for (name, toml) in FACTORY_PRESETS_TOML {
            let preset = Preset::from_toml(toml);
            assert!(preset.is_ok(), "factory preset '{name}' failed: {:?}", preset.err());
        }
        assert_eq!(factory_presets().len(), FACTORY_PRESETS_TOML.len());
    }

    #[test]
    fn test_values_within_ranges() {
        for preset in factory_presets() {
            for param in CompressorParam::ALL {
                if let Some(value) = preset.get(param) {
                    let desc = param.descriptor();
                    assert!(
                        desc.min <= value && value <= desc.max,
                        "{}: {} = {value} out of range",
                        preset.name,
                        desc.string_id
                    );
                }
            }
        }
    }

    #[test]
    fn test_init_matches_defaults() {
        let init = get_factory_preset("init").unwrap();
        assert_eq!(init.len(), 6);
        for param in CompressorParam::ALL {
            assert_eq!(init.get(param), Some(param.descriptor().default));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get_factory_preset("BUS_GLUE").unwrap().name, "Bus Glue");
        assert_eq!(get_factory_preset("bass tamer").unwrap().name, "Bass Tamer");
    }

    #[test]
    fn test_find_preset_falls_through() {
        assert_eq!(find_preset("Drum Smash").unwrap().name, "Drum Smash");
        assert!(matches!(
            find_preset("no_such_preset"),
            Err(ConfigError::PresetNotFound(ref name)) if name == "no_such_preset"
        ));
    }

    #[test]
    fn test_factory_preset_names() {
        let names = factory_preset_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"vocal_leveler"));
    }
}
