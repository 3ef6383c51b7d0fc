//! The compressor's fixed parameter layout.
//!
//! ## Parameter Indices
//!
//! | Index | String ID | Range | Default |
//! |-------|-----------|-------|---------|
//! | 0 | `input gain` | -24.0–24.0 dB | 0.0 |
//! | 1 | `output gain` | -24.0–24.0 dB | 0.0 |
//! | 2 | `threshold` | -36.0–0.0 dB | 0.0 |
//! | 3 | `ratio` | 1.0–10.0 | 3.0 |
//! | 4 | `attack` | 0.0–10.0 knob | 3.0 |
//! | 5 | `release` | 0.0–10.0 knob | 3.0 |
//!
//! The set is closed: dispatch on a parameter is a `match`, never a lookup
//! through a string-keyed table.

use crate::param_info::{ParamDescriptor, ParamId};

/// Number of parameters exposed by the plug-in.
pub const PARAM_COUNT: usize = 6;

/// One of the six host-visible compressor controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressorParam {
    /// Trim applied before the compressor, in dB.
    InputGain,
    /// Trim applied after the compressor, in dB.
    OutputGain,
    /// Level above which gain reduction engages, in dB.
    Threshold,
    /// Compression ratio (n:1).
    Ratio,
    /// Attack knob (0–10).
    Attack,
    /// Release knob (0–10).
    Release,
}

impl CompressorParam {
    /// All parameters in index order.
    pub const ALL: [CompressorParam; PARAM_COUNT] = [
        CompressorParam::InputGain,
        CompressorParam::OutputGain,
        CompressorParam::Threshold,
        CompressorParam::Ratio,
        CompressorParam::Attack,
        CompressorParam::Release,
    ];

    /// Zero-based position in [`CompressorParam::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CompressorParam::InputGain => 0,
            CompressorParam::OutputGain => 1,
            CompressorParam::Threshold => 2,
            CompressorParam::Ratio => 3,
            CompressorParam::Attack => 4,
            CompressorParam::Release => 5,
        }
    }

    /// Parameter at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable textual ID (also the persisted state key).
    pub const fn string_id(self) -> &'static str {
        match self {
            CompressorParam::InputGain => "input gain",
            CompressorParam::OutputGain => "output gain",
            CompressorParam::Threshold => "threshold",
            CompressorParam::Ratio => "ratio",
            CompressorParam::Attack => "attack",
            CompressorParam::Release => "release",
        }
    }

    /// Resolve a textual ID. Matching is exact.
    pub fn from_string_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.string_id() == id)
    }

    /// Resolve a stable numeric ID.
    pub fn from_id(id: ParamId) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.descriptor().id == id)
    }

    /// Full metadata for this parameter.
    pub fn descriptor(self) -> ParamDescriptor {
        match self {
            CompressorParam::InputGain => {
                ParamDescriptor::gain_db("Input Gain", "In Gain", -24.0, 24.0, 0.0)
                    .with_id(ParamId(100), self.string_id())
            }
            CompressorParam::OutputGain => {
                ParamDescriptor::gain_db("Output Gain", "Out Gain", -24.0, 24.0, 0.0)
                    .with_id(ParamId(101), self.string_id())
            }
            CompressorParam::Threshold => {
                ParamDescriptor::gain_db("Threshold", "Thresh", -36.0, 0.0, 0.0)
                    .with_id(ParamId(102), self.string_id())
            }
            CompressorParam::Ratio => {
                ParamDescriptor::ratio(1.0, 10.0, 3.0).with_id(ParamId(103), self.string_id())
            }
            CompressorParam::Attack => {
                ParamDescriptor::knob("Attack", "Attack", 3.0).with_id(ParamId(104), self.string_id())
            }
            CompressorParam::Release => ParamDescriptor::knob("Release", "Release", 3.0)
                .with_id(ParamId(105), self.string_id()),
        }
    }
}
