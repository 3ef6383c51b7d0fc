//! Preset management for the SimpleComp compressor.
//!
//! # Features
//!
//! - **Preset System**: Load and save compressor settings as TOML files
//! - **Factory Presets**: Built-in starting points, always available
//!
//! # Example
//!
//! ```rust,no_run
//! use simplecomp_config::{Preset, get_factory_preset};
//! use simplecomp_core::CompressorParam;
//! use simplecomp_plugin::ParameterStore;
//!
//! let store = ParameterStore::new();
//!
//! // Start from a factory preset
//! let preset = get_factory_preset("vocal_leveler").unwrap();
//! preset.apply(&store).unwrap();
//!
//! // Tweak and save
//! store.set_param(CompressorParam::Ratio, 6.0);
//! Preset::from_store("My Vocal", &store).save("my_vocal.toml").unwrap();
//! ```

mod error;
mod preset;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    factory_preset_names, factory_presets, find_preset, get_factory_preset,
};
pub use preset::Preset;
