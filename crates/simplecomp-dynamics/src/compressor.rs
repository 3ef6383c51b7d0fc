//! Peak compressor with hard-knee characteristics.
//!
//! A feed-forward compressor that attenuates signals above a linear
//! threshold. Each channel has its own envelope detector.
//!
//! # Signal Flow
//!
//! ```text
//! Input → Envelope Follower → Gain Computer → Gain Reduction → Output
//! ```
//!
//! # Gain Law
//!
//! With envelope `e`, threshold `t` and ratio `r`:
//!
//! | Envelope | Gain |
//! |----------|------|
//! | `e < t` | 1 |
//! | `e >= t` | `(e / t)^(1/r - 1)` |
//!
//! Above threshold the output level rises by one dB for every `r` dB of
//! input.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use libm::powf;
use simplecomp_core::{AudioBlock, CompressorEngine, EnvelopeFollower, ProcessSpec, linear_to_db};

/// Lowest accepted threshold, keeps the gain law away from a division by zero.
const MIN_THRESHOLD: f32 = 1.0e-6;

/// Gain computer for the hard-knee compression curve.
#[derive(Debug, Clone)]
struct GainComputer {
    threshold: f32,
    ratio: f32,
    /// `1/ratio - 1`, cached so the per-sample path is a single `powf`.
    exponent: f32,
}

impl GainComputer {
    fn new(threshold: f32, ratio: f32) -> Self {
        let mut computer = Self {
            threshold,
            ratio,
            exponent: 0.0,
        };
        computer.set_ratio(ratio);
        computer
    }

    fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio;
        self.exponent = 1.0 / ratio - 1.0;
    }

    #[inline]
    fn gain(&self, envelope: f32) -> f32 {
        if envelope < self.threshold || self.exponent == 0.0 {
            1.0
        } else {
            powf(envelope / self.threshold, self.exponent)
        }
    }
}

/// Per-channel peak compressor.
///
/// Settings are shared by every channel; detection is independent per
/// channel. Envelope state is sized in [`prepare`](CompressorEngine::prepare)
/// and never reallocated while processing.
///
/// Channels beyond the prepared count are passed through untouched.
///
/// # Example
///
/// ```rust
/// use simplecomp_core::{AudioBlock, CompressorEngine};
/// use simplecomp_dynamics::Compressor;
///
/// let mut comp = Compressor::new(44100.0);
/// comp.set_threshold(0.5);
/// comp.set_ratio(2.0);
/// comp.set_attack(0.0);
///
/// let mut left = [0.0f32; 32];
/// let mut right = [0.0f32; 32];
/// let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
/// comp.process(&mut AudioBlock::new(&mut channels, 2));
/// assert_eq!(comp.gain_reduction_db(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Compressor {
    envelopes: Vec<EnvelopeFollower>,
    gain_computer: GainComputer,
    sample_rate: f32,
    attack_ms: f32,
    release_ms: f32,
    /// Deepest gain reduction of the last processed block, in dB (non-positive).
    last_gain_reduction_db: f32,
}

impl Compressor {
    /// Create a stereo compressor at `sample_rate`.
    ///
    /// Defaults match the plug-in's default knob positions:
    /// threshold 1.0 (0 dB), ratio 3, attack 9 ms, release 125 ms.
    pub fn new(sample_rate: f32) -> Self {
        let mut comp = Self {
            envelopes: Vec::new(),
            gain_computer: GainComputer::new(1.0, 3.0),
            sample_rate,
            attack_ms: 9.0,
            release_ms: 125.0,
            last_gain_reduction_db: 0.0,
        };
        comp.resize_channels(2);
        comp
    }

    /// Number of channels with envelope state.
    pub fn num_channels(&self) -> usize {
        self.envelopes.len()
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Current linear threshold.
    pub fn threshold(&self) -> f32 {
        self.gain_computer.threshold
    }

    /// Current ratio.
    pub fn ratio(&self) -> f32 {
        self.gain_computer.ratio
    }

    /// Current attack time in milliseconds.
    pub fn attack_ms(&self) -> f32 {
        self.attack_ms
    }

    /// Current release time in milliseconds.
    pub fn release_ms(&self) -> f32 {
        self.release_ms
    }

    fn resize_channels(&mut self, num_channels: usize) {
        self.envelopes.clear();
        self.envelopes.resize_with(num_channels, || {
            EnvelopeFollower::with_times(self.sample_rate, self.attack_ms, self.release_ms)
        });
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl CompressorEngine for Compressor {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.sample_rate = spec.sample_rate as f32;
        self.resize_channels(spec.num_channels);
        self.last_gain_reduction_db = 0.0;
    }

    fn reset(&mut self) {
        for env in &mut self.envelopes {
            env.reset();
        }
        self.last_gain_reduction_db = 0.0;
    }

    fn set_attack(&mut self, attack_ms: f32) {
        self.attack_ms = attack_ms.max(0.0);
        for env in &mut self.envelopes {
            env.set_attack_ms(self.attack_ms);
        }
    }

    fn set_release(&mut self, release_ms: f32) {
        self.release_ms = release_ms.max(0.0);
        for env in &mut self.envelopes {
            env.set_release_ms(self.release_ms);
        }
    }

    fn set_ratio(&mut self, ratio: f32) {
        let ratio = ratio.max(1.0);
        if ratio != self.gain_computer.ratio {
            self.gain_computer.set_ratio(ratio);
        }
    }

    fn set_threshold(&mut self, threshold_linear: f32) {
        self.gain_computer.threshold = threshold_linear.max(MIN_THRESHOLD);
    }

    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        let channels = block.num_channels().min(self.envelopes.len());

        let mut min_gain = 1.0f32;
        for (ch, env) in self.envelopes.iter_mut().enumerate().take(channels) {
            for sample in block.channel_mut(ch).iter_mut() {
                let envelope = env.process(*sample);
                let gain = self.gain_computer.gain(envelope);
                min_gain = min_gain.min(gain);
                *sample *= gain;
            }
        }

        if !block.is_empty() {
            self.last_gain_reduction_db = linear_to_db(min_gain).min(0.0);
        }
    }

    fn gain_reduction_db(&self) -> f32 {
        self.last_gain_reduction_db
    }
}
