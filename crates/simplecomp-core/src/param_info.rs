//! Parameter metadata for host-facing controls.
//!
//! Each parameter is described by a [`ParamDescriptor`] containing metadata for
//! display, validation, and plugin host communication:
//!
//! - [`ParamId`]: stable numeric ID for automation recording
//! - `string_id`: stable textual ID, used as the persistence key
//! - [`ParamUnit`]: display unit and formatting
//!
//! # Example
//!
//! ```rust
//! use simplecomp_core::{ParamDescriptor, ParamId};
//!
//! let gain = ParamDescriptor::gain_db("Input Gain", "In", -24.0, 24.0, 0.0)
//!     .with_id(ParamId(100), "input gain");
//!
//! assert_eq!(gain.clamp(30.0), 24.0);
//! assert_eq!(gain.normalize(0.0), 0.5);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Stable parameter identifier that survives reordering.
///
/// Maps directly to CLAP `clap_id` and VST3 `ParamID`. Once assigned, a
/// `ParamId` must never change for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB) - for gain and threshold parameters.
    Decibels,

    /// Ratio (n:1) - for compressor ratios.
    Ratio,

    /// No unit - for knob positions and other dimensionless values.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplecomp_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Decibels.suffix(), " dB");
    /// assert_eq!(ParamUnit::Ratio.suffix(), ":1");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Ratio => ":1",
            ParamUnit::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// `short_name` should be 8 characters or less for compatibility with
/// hardware displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Input Gain").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the plug-in is constructed or reset.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Stable numeric ID for plugin host automation.
    ///
    /// Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Stable textual ID used for lookups and persisted state.
    ///
    /// Default: `""` (unassigned).
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Gain parameter with custom name and range (decibels).
    pub fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.1,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Ratio parameter (n:1).
    pub fn ratio(min: f32, max: f32, default: f32) -> Self {
        Self {
            name: "Ratio",
            short_name: "Ratio",
            unit: ParamUnit::Ratio,
            min,
            max,
            default,
            step: 0.1,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Dimensionless 0–10 knob.
    pub fn knob(name: &'static str, short_name: &'static str, default: f32) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: 10.0,
            default,
            step: 0.1,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// Builder; call after a factory method or struct literal.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// NaN clamps to the default so a bad automation value cannot poison
    /// the signal path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplecomp_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Threshold", "Thresh", -36.0, 0.0, 0.0);
    /// assert_eq!(desc.clamp(-12.0), -12.0);
    /// assert_eq!(desc.clamp(-100.0), -36.0);
    /// assert_eq!(desc.clamp(10.0), 0.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / range).clamp(0.0, 1.0)
    }

    /// Converts a normalized value (0.0 to 1.0) back to the plain range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Formats a value with this parameter's unit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplecomp_core::ParamDescriptor;
    ///
    /// let ratio = ParamDescriptor::ratio(1.0, 10.0, 3.0);
    /// assert_eq!(ratio.format_value(4.0), "4.0:1");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Decibels => format!("{value:.1}{}", self.unit.suffix()),
            ParamUnit::Ratio => format!("{value:.1}{}", self.unit.suffix()),
            ParamUnit::None => format!("{value:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> ParamDescriptor {
        ParamDescriptor::gain_db("Threshold", "Thresh", -36.0, 0.0, 0.0)
            .with_id(ParamId(102), "threshold")
    }

    #[test]
    fn with_id_builder() {
        let desc = threshold();
        assert_eq!(desc.id, ParamId(102));
        assert_eq!(desc.string_id, "threshold");
    }

    #[test]
    fn clamp_limits_and_nan() {
        let desc = threshold();
        assert_eq!(desc.clamp(10.0), 0.0);
        assert_eq!(desc.clamp(-50.0), -36.0);
        assert_eq!(desc.clamp(f32::NAN), desc.default);
    }

    #[test]
    fn normalize_denormalize_linear() {
        let desc = ParamDescriptor::knob("Attack", "Attack", 3.0);
        assert_eq!(desc.normalize(0.0), 0.0);
        assert_eq!(desc.normalize(5.0), 0.5);
        assert_eq!(desc.normalize(10.0), 1.0);
        assert_eq!(desc.denormalize(0.5), 5.0);
    }

    #[test]
    fn normalize_zero_range() {
        let mut desc = threshold();
        desc.min = 0.0;
        desc.max = 0.0;
        assert_eq!(desc.normalize(0.0), 0.0);
    }

    #[test]
    fn format_by_unit() {
        assert_eq!(threshold().format_value(-12.5), "-12.5 dB");
        assert_eq!(ParamDescriptor::knob("Attack", "Attack", 3.0).format_value(3.0), "3.00");
    }
}
