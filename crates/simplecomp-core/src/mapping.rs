//! Control-value to DSP-unit conversions.
//!
//! Every function here is pure and allocation-free. Inputs are expected to be
//! pre-clamped by the parameter store, so none of these conversions can fail.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Knob Conversions
//!
//! Attack and release are exposed to the user as a 0–10 knob. The compressor
//! wants milliseconds:
//!
//! | Knob | Attack | Release |
//! |------|--------|---------|
//! | 0 | 0 ms | 50 ms |
//! | 3 | 9 ms | 125 ms |
//! | 10 | 30 ms | 300 ms |

use libm::{log10f, powf};

/// Milliseconds of attack per knob unit.
pub const ATTACK_MS_PER_UNIT: f32 = 3.0;

/// Release time at knob position zero, in milliseconds.
pub const RELEASE_BASE_MS: f32 = 50.0;

/// Milliseconds of release per knob unit.
pub const RELEASE_MS_PER_UNIT: f32 = 25.0;

/// Level reported by [`linear_to_db`] for silence.
pub const SILENCE_DB: f32 = -120.0;

/// Convert decibels to linear gain.
///
/// `linear = 10^(dB / 20)`
///
/// # Example
/// ```rust
/// use simplecomp_core::db_to_linear;
///
/// assert_eq!(db_to_linear(0.0), 1.0);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// assert!((db_to_linear(20.0) - 10.0).abs() < 1e-5);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db / 20.0)
}

/// Convert linear gain to decibels.
///
/// Non-positive input maps to [`SILENCE_DB`] instead of `-inf`.
///
/// # Example
/// ```rust
/// use simplecomp_core::{linear_to_db, SILENCE_DB};
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// assert_eq!(linear_to_db(0.0), SILENCE_DB);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        SILENCE_DB
    } else {
        (20.0 * log10f(linear)).max(SILENCE_DB)
    }
}

/// Convert an attack knob position (0–10) to milliseconds (0–30).
#[inline]
pub fn attack_knob_to_ms(knob: f32) -> f32 {
    knob * ATTACK_MS_PER_UNIT
}

/// Convert a release knob position (0–10) to milliseconds (50–300).
#[inline]
pub fn release_knob_to_ms(knob: f32) -> f32 {
    RELEASE_BASE_MS + knob * RELEASE_MS_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_at_zero_db() {
        assert_eq!(db_to_linear(0.0), 1.0);
    }

    #[test]
    fn db_to_linear_matches_power_law() {
        for db in [-36.0f32, -24.0, -6.0, 6.0, 24.0] {
            let expected = 10.0f64.powf(f64::from(db) / 20.0);
            let got = f64::from(db_to_linear(db));
            assert!(
                ((got - expected) / expected).abs() < 1e-6,
                "db_to_linear({db}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn linear_to_db_floors_silence() {
        assert_eq!(linear_to_db(0.0), SILENCE_DB);
        assert_eq!(linear_to_db(-1.0), SILENCE_DB);
        assert_eq!(linear_to_db(1e-30), SILENCE_DB);
    }

    #[test]
    fn attack_knob_bounds() {
        assert_eq!(attack_knob_to_ms(0.0), 0.0);
        assert_eq!(attack_knob_to_ms(10.0), 30.0);
    }

    #[test]
    fn release_knob_bounds() {
        assert_eq!(release_knob_to_ms(0.0), 50.0);
        assert_eq!(release_knob_to_ms(10.0), 300.0);
    }

    #[test]
    fn default_knob_positions() {
        // Plug-in defaults sit at knob 3 for both controls.
        assert_eq!(attack_knob_to_ms(3.0), 9.0);
        assert_eq!(release_knob_to_ms(3.0), 125.0);
    }
}
