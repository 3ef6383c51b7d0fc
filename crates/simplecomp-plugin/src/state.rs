//! State save/restore for the six parameter values.
//!
//! State format: JSON object mapping the parameter's textual ID to its f64
//! value.
//!
//! ```json
//! {"input gain": 6.0, "output gain": 0.0, "threshold": -18.0, "ratio": 4.0, "attack": 3.0, "release": 3.0}
//! ```
//!
//! Restore is permissive: unknown keys and non-numeric values are skipped,
//! missing keys keep their current value, and every applied value goes
//! through the store's clamp. Bytes that are not a JSON object are rejected
//! before anything is applied.

use simplecomp_core::{CompressorParam, PARAM_COUNT};

use crate::error::PluginError;
use crate::params::ParameterStore;

/// Encode the current parameter values.
pub fn save_state(params: &ParameterStore) -> Result<Vec<u8>, PluginError> {
    let mut state = serde_json::Map::new();

    for param in CompressorParam::ALL {
        state.insert(
            param.string_id().to_string(),
            serde_json::Value::from(f64::from(params.get_param(param))),
        );
    }

    Ok(serde_json::to_vec(&serde_json::Value::Object(state))?)
}

/// Apply persisted values to `params`.
///
/// Returns how many parameters were present in the state. On error no value
/// is changed.
pub fn load_state(params: &ParameterStore, bytes: &[u8]) -> Result<usize, PluginError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| PluginError::state(format!("invalid state JSON: {e}")))?;

    let Some(obj) = value.as_object() else {
        return Err(PluginError::state("state is not a JSON object"));
    };

    let mut pending: [Option<f32>; PARAM_COUNT] = [None; PARAM_COUNT];
    for (key, val) in obj {
        let Some(param) = CompressorParam::from_string_id(key) else {
            continue;
        };
        let Some(v) = val.as_f64() else { continue };
        pending[param.index()] = Some(v as f32);
    }

    let mut applied = 0;
    for (param, value) in CompressorParam::ALL.into_iter().zip(pending) {
        if let Some(v) = value {
            params.set_param(param, v);
            applied += 1;
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_all_six_by_string_id() {
        let store = ParameterStore::new();
        store.set("threshold", -18.0);
        let bytes = save_state(&store).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), PARAM_COUNT);
        assert_eq!(obj["threshold"].as_f64(), Some(-18.0));
        assert_eq!(obj["ratio"].as_f64(), Some(3.0));
        assert!(obj.contains_key("input gain"));
    }

    #[test]
    fn round_trip() {
        let source = ParameterStore::new();
        source.set("input gain", 6.0);
        source.set("output gain", -2.5);
        source.set("threshold", -30.0);
        source.set("ratio", 7.5);
        source.set("attack", 0.0);
        source.set("release", 10.0);

        let target = ParameterStore::new();
        let applied = load_state(&target, &save_state(&source).unwrap()).unwrap();
        assert_eq!(applied, PARAM_COUNT);
        assert_eq!(target.snapshot(), source.snapshot());
    }

    #[test]
    fn partial_state_keeps_missing_values() {
        let store = ParameterStore::new();
        store.set("ratio", 8.0);
        let applied = load_state(&store, br#"{"threshold": -12.0}"#).unwrap();
        assert_eq!(applied, 1);
        assert_eq!(store.get("threshold"), -12.0);
        assert_eq!(store.get("ratio"), 8.0);
    }

    #[test]
    fn skips_unknown_keys_and_non_numbers() {
        let store = ParameterStore::new();
        let json = br#"{"makeup": 6.0, "ratio": "four", "attack": 5.0, "102": -6.0}"#;
        assert_eq!(load_state(&store, json).unwrap(), 1);
        assert_eq!(store.get("attack"), 5.0);
        assert_eq!(store.get("ratio"), 3.0);
        assert_eq!(store.get("threshold"), 0.0);
    }

    #[test]
    fn clamps_restored_values() {
        let store = ParameterStore::new();
        load_state(&store, br#"{"input gain": 100.0, "threshold": -1000}"#).unwrap();
        assert_eq!(store.get("input gain"), 24.0);
        assert_eq!(store.get("threshold"), -36.0);
    }

    #[test]
    fn rejects_garbage_without_changes() {
        let store = ParameterStore::new();
        store.set("ratio", 6.0);
        let before = store.snapshot();

        let bad_inputs: [&[u8]; 5] = [b"not json", b"[1, 2, 3]", b"42", b"", b"{\"ratio\": 2.0"];
        for bad in bad_inputs {
            let err = load_state(&store, bad).unwrap_err();
            assert!(matches!(err, PluginError::State(_)), "{err}");
        }
        assert_eq!(store.snapshot(), before);
    }
}
