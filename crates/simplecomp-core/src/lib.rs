//! SimpleComp Core - building blocks for the SimpleComp compressor
//!
//! This crate holds everything the compressor needs that does not depend on
//! threads, hosts, or persistence. It is allocation-free on the audio path.
//!
//! # Core Abstractions
//!
//! ## Parameters
//!
//! - [`CompressorParam`] - The closed set of six host-visible controls
//! - [`ParamDescriptor`] - Range, default, unit and IDs for one control
//!
//! ## Mapping
//!
//! Pure conversions from control values to DSP units:
//!
//! - [`db_to_linear`] / [`linear_to_db`]
//! - [`attack_knob_to_ms`] / [`release_knob_to_ms`]
//!
//! ## Processing
//!
//! - [`AudioBlock`] - Planar view over one host block
//! - [`CompressorEngine`] - Trait for the dynamics processor driven per block
//! - [`EnvelopeFollower`] - Peak detector with attack/release smoothing
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build for embedded targets:
//!
//! ```toml
//! [dependencies]
//! simplecomp-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod engine;
pub mod envelope;
pub mod mapping;
pub mod param_info;
pub mod parameters;

pub use buffer::AudioBlock;
pub use engine::{CompressorEngine, ProcessSpec};
pub use envelope::EnvelopeFollower;
pub use mapping::{
    ATTACK_MS_PER_UNIT, RELEASE_BASE_MS, RELEASE_MS_PER_UNIT, SILENCE_DB, attack_knob_to_ms,
    db_to_linear, linear_to_db, release_knob_to_ms,
};
pub use param_info::{ParamDescriptor, ParamId, ParamUnit};
pub use parameters::{CompressorParam, PARAM_COUNT};
