//! Plug-in core for the SimpleComp compressor.
//!
//! This crate sits between a host shell and the compressor engine. It owns
//! the parameter values, keeps the derived coefficients in step with them,
//! and runs the per-block signal chain.
//!
//! # Architecture
//!
//! | Type | Context | Role |
//! |------|---------|------|
//! | [`ParameterStore`] | control | Clamped values + change listeners |
//! | [`DerivedCoefficients`] | both | Per-field atomic cache in DSP units |
//! | [`SignalChain`] | audio | Input trim → engine → output trim |
//! | [`PluginController`] | both | Wiring, lifecycle, state save/restore |
//!
//! Parameter changes flow from `ParameterStore::set` through a listener
//! into a single cache field. The audio thread copies the cache once per
//! block and never locks.
//!
//! # Example
//!
//! ```rust
//! use simplecomp_core::AudioBlock;
//! use simplecomp_dynamics::Compressor;
//! use simplecomp_plugin::PluginController;
//!
//! let mut plugin = PluginController::new(Compressor::default());
//! let params = plugin.parameters().clone();
//!
//! params.set("input gain", 6.0);
//! params.set("threshold", -36.0);
//! params.set("ratio", 10.0);
//! params.set("attack", 0.0);
//! plugin.prepare(48000.0, 64, 1);
//!
//! let mut samples = vec![1.0f32; 64];
//! let mut channels: [&mut [f32]; 1] = [&mut samples];
//! plugin.process(&mut AudioBlock::new(&mut channels, 1));
//! assert!(samples.iter().all(|&s| s < 1.0));
//!
//! let saved = plugin.serialize().unwrap();
//! plugin.deserialize(&saved).unwrap();
//! ```

pub mod chain;
pub mod coefficients;
pub mod controller;
pub mod error;
pub mod params;
pub mod state;

pub use chain::SignalChain;
pub use coefficients::{AtomicF32, CoefficientSnapshot, DerivedCoefficients};
pub use controller::{ControllerState, PLUGIN_NAME, PluginController, is_layout_supported};
pub use error::PluginError;
pub use params::{ParamSnapshot, ParameterStore};
pub use state::{load_state, save_state};
