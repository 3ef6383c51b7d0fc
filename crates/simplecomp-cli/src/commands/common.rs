//! Shared CLI helpers used across multiple commands.

use simplecomp_config::{ConfigError, Preset, find_preset};
use simplecomp_core::CompressorParam;
use simplecomp_plugin::ParameterStore;

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => Ok((key.trim().to_string(), value.trim().to_string())),
        None => Err(format!(
            "Invalid parameter format: '{s}' (expected key=value)"
        )),
    }
}

/// Resolve a parameter by textual ID ("threshold") or numeric ID ("102").
pub fn resolve_param(store: &ParameterStore, key: &str) -> anyhow::Result<CompressorParam> {
    if let Some(param) = CompressorParam::from_string_id(key) {
        return Ok(param);
    }
    key.parse::<u32>()
        .ok()
        .and_then(|id| store.index_by_id(id))
        .and_then(CompressorParam::from_index)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown parameter '{key}'. Use 'simplecomp params' to see available parameters."
            )
        })
}

/// Apply `key=value` overrides to `store`, returning the clamped values.
pub fn apply_overrides(
    store: &ParameterStore,
    overrides: &[(String, String)],
) -> anyhow::Result<Vec<(CompressorParam, f32)>> {
    overrides
        .iter()
        .map(|(key, value)| {
            let param = resolve_param(store, key)?;
            let raw: f32 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid value '{value}' for '{key}'"))?;
            Ok((param, store.set_param(param, raw)))
        })
        .collect()
}

/// Load a preset by factory name or file path.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    match find_preset(name) {
        Ok(preset) => Ok(preset),
        Err(ConfigError::PresetNotFound(_)) => anyhow::bail!(
            "Preset '{name}' not found. Use 'simplecomp presets list' to see available presets."
        ),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_parsing() {
        assert_eq!(
            parse_key_val("threshold=-12").unwrap(),
            ("threshold".to_string(), "-12".to_string())
        );
        assert_eq!(
            parse_key_val("input gain = 3").unwrap(),
            ("input gain".to_string(), "3".to_string())
        );
        assert!(parse_key_val("ratio").is_err());
    }

    #[test]
    fn resolves_string_and_numeric_ids() {
        let store = ParameterStore::new();
        assert_eq!(resolve_param(&store, "ratio").unwrap(), CompressorParam::Ratio);
        assert_eq!(resolve_param(&store, "102").unwrap(), CompressorParam::Threshold);
        assert!(resolve_param(&store, "knee").is_err());
        assert!(resolve_param(&store, "7").is_err());
    }

    #[test]
    fn overrides_are_clamped() {
        let store = ParameterStore::new();
        let applied = apply_overrides(
            &store,
            &[
                ("ratio".to_string(), "50".to_string()),
                ("104".to_string(), "2".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            applied,
            vec![(CompressorParam::Ratio, 10.0), (CompressorParam::Attack, 2.0)]
        );
        assert!(apply_overrides(&store, &[("ratio".to_string(), "lots".to_string())]).is_err());
    }

    #[test]
    fn factory_preset_found_by_name() {
        assert_eq!(load_preset("bus_glue").unwrap().name, "Bus Glue");
        assert!(load_preset("definitely-not-a-preset").is_err());
    }
}
