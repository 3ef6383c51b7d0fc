//! The compressor collaborator seam.
//!
//! The signal chain owns one [`CompressorEngine`] and drives it block by
//! block. The engine never sees dB values or knob positions: it receives
//! milliseconds, a ratio, and a linear threshold, already mapped.
//!
//! ## Design Decisions
//!
//! - **Setters are idempotent**: the chain reasserts every setting at the
//!   start of each block, so implementations must treat a repeated value as
//!   a no-op rather than restarting anything.
//!
//! - **In-place processing**: [`CompressorEngine::process`] transforms the
//!   block it is given and must preserve its shape.
//!
//! - **No allocations in `process`**: per-channel state is sized in
//!   [`CompressorEngine::prepare`].

use crate::buffer::AudioBlock;

/// Stream configuration handed to an engine before processing starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest block the host will deliver.
    pub maximum_block_size: usize,
    /// Number of channels the engine will process.
    pub num_channels: usize,
}

impl Default for ProcessSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            maximum_block_size: 512,
            num_channels: 2,
        }
    }
}

/// A dynamics processor that can be driven by the signal chain.
///
/// # Example
///
/// ```rust
/// use simplecomp_core::{AudioBlock, CompressorEngine, ProcessSpec};
///
/// /// Engine that leaves audio alone.
/// struct Bypass;
///
/// impl CompressorEngine for Bypass {
///     fn prepare(&mut self, _spec: &ProcessSpec) {}
///     fn reset(&mut self) {}
///     fn set_attack(&mut self, _ms: f32) {}
///     fn set_release(&mut self, _ms: f32) {}
///     fn set_ratio(&mut self, _ratio: f32) {}
///     fn set_threshold(&mut self, _linear: f32) {}
///     fn process(&mut self, _block: &mut AudioBlock<'_, '_>) {}
/// }
///
/// let mut engine = Bypass;
/// engine.prepare(&ProcessSpec::default());
/// ```
pub trait CompressorEngine {
    /// Configure for a new stream. Called while audio is stopped.
    fn prepare(&mut self, spec: &ProcessSpec);

    /// Clear envelope memory without touching settings.
    fn reset(&mut self);

    /// Attack time in milliseconds. Zero means instantaneous.
    fn set_attack(&mut self, attack_ms: f32);

    /// Release time in milliseconds. Zero means instantaneous.
    fn set_release(&mut self, release_ms: f32);

    /// Compression ratio (n:1), at least 1.
    fn set_ratio(&mut self, ratio: f32);

    /// Threshold as a linear amplitude in (0, 1].
    fn set_threshold(&mut self, threshold_linear: f32);

    /// Compress `block` in place.
    fn process(&mut self, block: &mut AudioBlock<'_, '_>);

    /// Current gain reduction in dB (non-positive). Engines without metering
    /// report 0.
    fn gain_reduction_db(&self) -> f32 {
        0.0
    }
}

impl<E: CompressorEngine + ?Sized> CompressorEngine for &mut E {
    fn prepare(&mut self, spec: &ProcessSpec) {
        (**self).prepare(spec);
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn set_attack(&mut self, attack_ms: f32) {
        (**self).set_attack(attack_ms);
    }

    fn set_release(&mut self, release_ms: f32) {
        (**self).set_release(release_ms);
    }

    fn set_ratio(&mut self, ratio: f32) {
        (**self).set_ratio(ratio);
    }

    fn set_threshold(&mut self, threshold_linear: f32) {
        (**self).set_threshold(threshold_linear);
    }

    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        (**self).process(block);
    }

    fn gain_reduction_db(&self) -> f32 {
        (**self).gain_reduction_db()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Halves everything; counts calls.
    #[derive(Default)]
    struct Halver {
        prepared: Option<ProcessSpec>,
        resets: usize,
    }

    impl CompressorEngine for Halver {
        fn prepare(&mut self, spec: &ProcessSpec) {
            self.prepared = Some(*spec);
        }
        fn reset(&mut self) {
            self.resets += 1;
        }
        fn set_attack(&mut self, _ms: f32) {}
        fn set_release(&mut self, _ms: f32) {}
        fn set_ratio(&mut self, _ratio: f32) {}
        fn set_threshold(&mut self, _linear: f32) {}
        fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
            block.apply_gain(0.5);
        }
    }

    #[test]
    fn default_gain_reduction_is_zero() {
        assert_eq!(Halver::default().gain_reduction_db(), 0.0);
    }

    /// Drives any engine by value, so `&mut E` must implement the trait.
    fn drive<E: CompressorEngine>(mut engine: E, block: &mut AudioBlock<'_, '_>) -> f32 {
        engine.prepare(&ProcessSpec {
            sample_rate: 44100.0,
            maximum_block_size: 64,
            num_channels: 1,
        });
        engine.reset();
        engine.process(block);
        engine.gain_reduction_db()
    }

    #[test]
    fn forwards_through_mutable_reference() {
        let mut inner = Halver::default();
        let mut samples = [1.0f32; 4];
        let mut channels: [&mut [f32]; 1] = [&mut samples];
        let mut block = AudioBlock::new(&mut channels, 1);

        assert_eq!(drive(&mut inner, &mut block), 0.0);
        assert_eq!(block.channel(0), &[0.5; 4]);
        assert_eq!(inner.prepared.map(|s| s.sample_rate), Some(44100.0));
        assert_eq!(inner.resets, 1);
    }
}
