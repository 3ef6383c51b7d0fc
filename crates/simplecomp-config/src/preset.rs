//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use simplecomp_core::CompressorParam;
use simplecomp_plugin::ParameterStore;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// A named set of compressor settings.
///
/// Only the parameters listed under `[params]` are touched when the preset
/// is applied; the rest keep their current values. Keys are the textual
/// parameter IDs.
///
/// # TOML Format
///
/// ```toml
/// name = "Vocal Leveler"
/// description = "Even out a dynamic vocal"
///
/// [params]
/// "input gain" = 3.0
/// threshold = -18.0
/// ratio = 4.0
/// attack = 2.0
/// release = 4.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameter values keyed by textual ID.
    #[serde(default)]
    pub params: BTreeMap<String, f32>,
}

impl Preset {
    /// Create a new empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: BTreeMap::new(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a parameter value.
    pub fn with_param(mut self, param: CompressorParam, value: f32) -> Self {
        self.params.insert(param.string_id().to_string(), value);
        self
    }

    /// Capture every current value of `store`.
    pub fn from_store(name: impl Into<String>, store: &ParameterStore) -> Self {
        CompressorParam::ALL
            .into_iter()
            .fold(Self::new(name), |preset, param| {
                preset.with_param(param, store.get_param(param))
            })
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(name = %preset.name, path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let preset: Preset = toml::from_str(toml_str)?;
        preset.validate()?;
        Ok(preset)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every key names a compressor parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .params
            .keys()
            .find(|id| CompressorParam::from_string_id(id).is_none())
        {
            Some(unknown) => Err(ConfigError::UnknownParameter(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Value stored for `param`, if the preset sets it.
    pub fn get(&self, param: CompressorParam) -> Option<f32> {
        self.params.get(param.string_id()).copied()
    }

    /// Write the preset's values into `store`.
    ///
    /// Values are clamped by the store. Nothing is written if any key is
    /// unknown. Returns the number of parameters set.
    pub fn apply(&self, store: &ParameterStore) -> Result<usize, ConfigError> {
        self.validate()?;
        let mut applied = 0;
        for param in CompressorParam::ALL {
            if let Some(value) = self.get(param) {
                store.set_param(param, value);
                applied += 1;
            }
        }
        tracing::debug!(name = %self.name, applied, "applied preset");
        Ok(applied)
    }

    /// Number of parameters the preset sets.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the preset sets no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
