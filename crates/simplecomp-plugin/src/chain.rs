//! Per-block audio path: trim, compress, trim.

use simplecomp_core::{AudioBlock, CompressorEngine, ProcessSpec};

use crate::coefficients::CoefficientSnapshot;

/// Input trim, compressor engine, output trim, in that order.
///
/// The chain is stateless apart from the engine it owns. All settings come
/// from the [`CoefficientSnapshot`] passed with each block.
///
/// # Example
///
/// ```rust
/// use simplecomp_core::{AudioBlock, ProcessSpec};
/// use simplecomp_dynamics::Compressor;
/// use simplecomp_plugin::{CoefficientSnapshot, ParamSnapshot, SignalChain};
///
/// let coeffs = CoefficientSnapshot::from_params(&ParamSnapshot::defaults());
/// let mut chain = SignalChain::new(Compressor::default());
/// chain.prepare(&ProcessSpec::default(), &coeffs);
///
/// let mut left = [0.0f32; 64];
/// let mut right = [0.0f32; 64];
/// let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
/// chain.process(&mut AudioBlock::new(&mut channels, 2), &coeffs);
/// assert!(left.iter().all(|&s| s == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct SignalChain<E> {
    engine: E,
}

impl<E: CompressorEngine> SignalChain<E> {
    /// Wrap an engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Configure the engine for a new stream and clear its envelope memory.
    pub fn prepare(&mut self, spec: &ProcessSpec, coeffs: &CoefficientSnapshot) {
        self.engine.prepare(spec);
        self.apply_settings(coeffs);
        self.engine.reset();
    }

    /// Transform one block in place.
    #[inline]
    pub fn process(&mut self, block: &mut AudioBlock<'_, '_>, coeffs: &CoefficientSnapshot) {
        block.clear_unused_channels();
        block.apply_gain(coeffs.input_linear_gain);

        // Reasserted every block, not only on parameter change.
        self.apply_settings(coeffs);
        self.engine.process(block);

        block.apply_gain(coeffs.output_linear_gain);
    }

    fn apply_settings(&mut self, coeffs: &CoefficientSnapshot) {
        self.engine.set_ratio(coeffs.ratio);
        self.engine.set_threshold(coeffs.threshold_linear);
        self.engine.set_attack(coeffs.attack_ms);
        self.engine.set_release(coeffs.release_ms);
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the wrapped engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Unwrap the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}
