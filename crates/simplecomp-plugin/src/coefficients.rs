//! Derived coefficient cache shared between control and audio contexts.
//!
//! Every field is its own atomic f32. The control context writes single
//! fields from parameter listeners (or all six at stream setup and after a
//! state restore); the audio context takes one [`CoefficientSnapshot`] per
//! block. A snapshot may mix old and new fields while an update is in
//! flight; that tear lasts at most one block.

use std::sync::atomic::{AtomicU32, Ordering};

use simplecomp_core::{CompressorParam, attack_knob_to_ms, db_to_linear, release_knob_to_ms};

use crate::params::ParamSnapshot;

/// `f32` stored as its bit pattern in an `AtomicU32`.
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    /// New atomic holding `value`.
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    /// Read the value.
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    /// Replace the value.
    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

/// Map one parameter value to its coefficient in DSP units.
#[inline]
pub fn derive(param: CompressorParam, value: f32) -> f32 {
    match param {
        CompressorParam::InputGain | CompressorParam::OutputGain | CompressorParam::Threshold => {
            db_to_linear(value)
        }
        CompressorParam::Ratio => value,
        CompressorParam::Attack => attack_knob_to_ms(value),
        CompressorParam::Release => release_knob_to_ms(value),
    }
}

/// Plain copy of the cache, read once per block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSnapshot {
    /// Linear multiplier applied before the compressor.
    pub input_linear_gain: f32,
    /// Linear multiplier applied after the compressor.
    pub output_linear_gain: f32,
    /// Threshold as linear amplitude.
    pub threshold_linear: f32,
    /// Compression ratio, passed through.
    pub ratio: f32,
    /// Attack time in milliseconds.
    pub attack_ms: f32,
    /// Release time in milliseconds.
    pub release_ms: f32,
}

impl CoefficientSnapshot {
    /// Pure mapping of a parameter snapshot.
    pub fn from_params(params: &ParamSnapshot) -> Self {
        Self {
            input_linear_gain: derive(CompressorParam::InputGain, params.input_gain_db),
            output_linear_gain: derive(CompressorParam::OutputGain, params.output_gain_db),
            threshold_linear: derive(CompressorParam::Threshold, params.threshold_db),
            ratio: derive(CompressorParam::Ratio, params.ratio),
            attack_ms: derive(CompressorParam::Attack, params.attack),
            release_ms: derive(CompressorParam::Release, params.release),
        }
    }
}

/// The live coefficient cache.
#[derive(Debug)]
pub struct DerivedCoefficients {
    input_linear_gain: AtomicF32,
    output_linear_gain: AtomicF32,
    threshold_linear: AtomicF32,
    ratio: AtomicF32,
    attack_ms: AtomicF32,
    release_ms: AtomicF32,
}

impl DerivedCoefficients {
    /// Cache initialised from `params`.
    pub fn from_params(params: &ParamSnapshot) -> Self {
        let c = CoefficientSnapshot::from_params(params);
        Self {
            input_linear_gain: AtomicF32::new(c.input_linear_gain),
            output_linear_gain: AtomicF32::new(c.output_linear_gain),
            threshold_linear: AtomicF32::new(c.threshold_linear),
            ratio: AtomicF32::new(c.ratio),
            attack_ms: AtomicF32::new(c.attack_ms),
            release_ms: AtomicF32::new(c.release_ms),
        }
    }

    fn field(&self, param: CompressorParam) -> &AtomicF32 {
        match param {
            CompressorParam::InputGain => &self.input_linear_gain,
            CompressorParam::OutputGain => &self.output_linear_gain,
            CompressorParam::Threshold => &self.threshold_linear,
            CompressorParam::Ratio => &self.ratio,
            CompressorParam::Attack => &self.attack_ms,
            CompressorParam::Release => &self.release_ms,
        }
    }

    /// Recompute the single field fed by `param`.
    #[inline]
    pub fn update(&self, param: CompressorParam, value: f32) {
        self.field(param).store(derive(param, value));
    }

    /// Recompute every field from `params`.
    pub fn recompute_all(&self, params: &ParamSnapshot) {
        for param in CompressorParam::ALL {
            self.update(param, params.get(param));
        }
    }

    /// Current coefficient of one parameter.
    pub fn get(&self, param: CompressorParam) -> f32 {
        self.field(param).load()
    }

    /// Copy every field.
    #[inline]
    pub fn snapshot(&self) -> CoefficientSnapshot {
        CoefficientSnapshot {
            input_linear_gain: self.input_linear_gain.load(),
            output_linear_gain: self.output_linear_gain.load(),
            threshold_linear: self.threshold_linear.load(),
            ratio: self.ratio.load(),
            attack_ms: self.attack_ms.load(),
            release_ms: self.release_ms.load(),
        }
    }
}

impl Default for DerivedCoefficients {
    fn default() -> Self {
        Self::from_params(&ParamSnapshot::defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_f32_round_trip() {
        let a = AtomicF32::new(-0.25);
        assert_eq!(a.load(), -0.25);
        a.store(3.5);
        assert_eq!(a.load(), 3.5);
    }

    #[test]
    fn defaults_map_to_expected_units() {
        let c = DerivedCoefficients::default().snapshot();
        assert_eq!(c.input_linear_gain, 1.0);
        assert_eq!(c.output_linear_gain, 1.0);
        assert_eq!(c.threshold_linear, 1.0);
        assert_eq!(c.ratio, 3.0);
        assert_eq!(c.attack_ms, 9.0);
        assert_eq!(c.release_ms, 125.0);
    }

    #[test]
    fn update_touches_one_field() {
        let cache = DerivedCoefficients::default();
        let before = cache.snapshot();
        cache.update(CompressorParam::Release, 10.0);
        let after = cache.snapshot();
        assert_eq!(after.release_ms, 300.0);
        assert_eq!(
            CoefficientSnapshot {
                release_ms: before.release_ms,
                ..after
            },
            before
        );
    }

    #[test]
    fn recompute_all_matches_pure_mapping() {
        let params = ParamSnapshot {
            input_gain_db: 6.0,
            output_gain_db: -3.0,
            threshold_db: -36.0,
            ratio: 10.0,
            attack: 0.0,
            release: 0.0,
        };
        let cache = DerivedCoefficients::default();
        cache.recompute_all(&params);
        assert_eq!(cache.snapshot(), CoefficientSnapshot::from_params(&params));
        assert_eq!(cache.get(CompressorParam::Attack), 0.0);
        assert_eq!(cache.get(CompressorParam::Release), 50.0);
    }
}
