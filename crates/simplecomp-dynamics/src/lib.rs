//! SimpleComp Dynamics - the shipped compressor engine
//!
//! - [`Compressor`] - Per-channel peak compressor implementing
//!   [`CompressorEngine`](simplecomp_core::CompressorEngine)
//!
//! ## Example
//!
//! ```rust
//! use simplecomp_core::{AudioBlock, CompressorEngine, ProcessSpec, db_to_linear};
//! use simplecomp_dynamics::Compressor;
//!
//! let mut comp = Compressor::default();
//! comp.prepare(&ProcessSpec { sample_rate: 48000.0, maximum_block_size: 64, num_channels: 1 });
//! comp.set_threshold(db_to_linear(-12.0));
//! comp.set_ratio(4.0);
//! comp.set_attack(0.0);
//!
//! let mut samples = [1.0f32; 64];
//! let mut channels: [&mut [f32]; 1] = [&mut samples];
//! comp.process(&mut AudioBlock::new(&mut channels, 1));
//! assert!(samples[63] < 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod compressor;

pub use compressor::Compressor;
