//! Envelope follower for tracking signal amplitude.
//!
//! Peak detector with separate attack and release smoothing, used by the
//! compressor's level detector.

use libm::expf;

/// Envelope follower for tracking signal amplitude.
///
/// Uses peak detection with separate attack and release times. A time of
/// zero gives an instantaneous response in that direction.
///
/// # Example
///
/// ```rust
/// use simplecomp_core::EnvelopeFollower;
///
/// let mut env = EnvelopeFollower::new(48000.0);
/// env.set_attack_ms(0.0);
/// env.set_release_ms(100.0);
///
/// // Zero attack: the envelope jumps straight to the input level.
/// assert_eq!(env.process(-0.5), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeFollower {
    /// Current envelope level (linear)
    envelope: f32,
    attack_coeff: f32,
    release_coeff: f32,
    sample_rate: f32,
    attack_ms: f32,
    release_ms: f32,
}

impl EnvelopeFollower {
    /// Create a new envelope follower.
    ///
    /// Defaults:
    /// - Attack: 9ms
    /// - Release: 125ms
    pub fn new(sample_rate: f32) -> Self {
        Self::with_times(sample_rate, 9.0, 125.0)
    }

    /// Create with specified attack and release times.
    pub fn with_times(sample_rate: f32, attack_ms: f32, release_ms: f32) -> Self {
        let mut follower = Self {
            envelope: 0.0,
            attack_coeff: 0.0,
            release_coeff: 0.0,
            sample_rate,
            attack_ms: attack_ms.max(0.0),
            release_ms: release_ms.max(0.0),
        };
        follower.recalculate_coefficients();
        follower
    }

    /// Set the attack time in milliseconds. Negative values are treated as 0.
    pub fn set_attack_ms(&mut self, attack_ms: f32) {
        let attack_ms = attack_ms.max(0.0);
        if attack_ms != self.attack_ms {
            self.attack_ms = attack_ms;
            self.attack_coeff = time_coefficient(attack_ms, self.sample_rate);
        }
    }

    /// Get current attack time in milliseconds.
    pub fn attack_ms(&self) -> f32 {
        self.attack_ms
    }

    /// Set the release time in milliseconds. Negative values are treated as 0.
    pub fn set_release_ms(&mut self, release_ms: f32) {
        let release_ms = release_ms.max(0.0);
        if release_ms != self.release_ms {
            self.release_ms = release_ms;
            self.release_coeff = time_coefficient(release_ms, self.sample_rate);
        }
    }

    /// Get current release time in milliseconds.
    pub fn release_ms(&self) -> f32 {
        self.release_ms
    }

    /// Update sample rate and recalculate coefficients.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_coefficients();
    }

    /// Process a sample and return the current envelope level.
    ///
    /// Returns the envelope amplitude (always non-negative).
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let input_abs = input.abs();

        let coeff = if input_abs > self.envelope {
            self.attack_coeff
        } else {
            self.release_coeff
        };

        // y[n] = coeff * y[n-1] + (1 - coeff) * x[n]
        self.envelope = coeff * self.envelope + (1.0 - coeff) * input_abs;
        self.envelope
    }

    /// Get current envelope level without processing new input.
    pub fn level(&self) -> f32 {
        self.envelope
    }

    /// Reset the envelope to zero.
    pub fn reset(&mut self) {
        self.envelope = 0.0;
    }

    fn recalculate_coefficients(&mut self) {
        self.attack_coeff = time_coefficient(self.attack_ms, self.sample_rate);
        self.release_coeff = time_coefficient(self.release_ms, self.sample_rate);
    }
}

impl Default for EnvelopeFollower {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

/// One-pole smoothing coefficient: `exp(-1 / (time_ms * sample_rate / 1000))`.
///
/// Zero time (or a degenerate sample rate) yields 0, i.e. no smoothing.
#[inline]
fn time_coefficient(time_ms: f32, sample_rate: f32) -> f32 {
    let samples = time_ms * sample_rate / 1000.0;
    if samples > 0.0 {
        expf(-1.0 / samples)
    } else {
        0.0
    }
}
