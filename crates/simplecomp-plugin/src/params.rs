//! Lock-free parameter store with change notification.
//!
//! `ParameterStore` owns the six compressor controls. Values are stored as
//! atomic `u32` (f32 bit-cast) so the audio context can read them while the
//! control context writes. Listeners are registered while the store is
//! still exclusively owned, then the store is shared behind an `Arc`.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use simplecomp_core::{CompressorParam, PARAM_COUNT, ParamDescriptor};

/// Change listener, called with the newly stored (clamped) value.
type Listener = Box<dyn Fn(f32) + Send + Sync>;

/// Plain copy of all six parameter values at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    /// Input trim in dB.
    pub input_gain_db: f32,
    /// Output trim in dB.
    pub output_gain_db: f32,
    /// Threshold in dB.
    pub threshold_db: f32,
    /// Ratio (n:1).
    pub ratio: f32,
    /// Attack knob (0–10).
    pub attack: f32,
    /// Release knob (0–10).
    pub release: f32,
}

impl ParamSnapshot {
    /// Snapshot holding every parameter's default.
    pub fn defaults() -> Self {
        let mut values = [0.0; PARAM_COUNT];
        for param in CompressorParam::ALL {
            values[param.index()] = param.descriptor().default;
        }
        Self::from_values(values)
    }

    /// Build from values in [`CompressorParam::ALL`] order.
    pub fn from_values(values: [f32; PARAM_COUNT]) -> Self {
        Self {
            input_gain_db: values[CompressorParam::InputGain.index()],
            output_gain_db: values[CompressorParam::OutputGain.index()],
            threshold_db: values[CompressorParam::Threshold.index()],
            ratio: values[CompressorParam::Ratio.index()],
            attack: values[CompressorParam::Attack.index()],
            release: values[CompressorParam::Release.index()],
        }
    }

    /// Value of one parameter.
    pub fn get(&self, param: CompressorParam) -> f32 {
        match param {
            CompressorParam::InputGain => self.input_gain_db,
            CompressorParam::OutputGain => self.output_gain_db,
            CompressorParam::Threshold => self.threshold_db,
            CompressorParam::Ratio => self.ratio,
            CompressorParam::Attack => self.attack,
            CompressorParam::Release => self.release,
        }
    }
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self::defaults()
    }
}

/// The plug-in's parameter values and their change listeners.
///
/// Writers are expected to be serialized by the host (one automation
/// thread); readers may run concurrently on the audio thread.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use simplecomp_core::CompressorParam;
/// use simplecomp_plugin::ParameterStore;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let mut store = ParameterStore::new();
/// let counter = Arc::clone(&calls);
/// store.subscribe(CompressorParam::Threshold, move |_| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// store.set("threshold", 10.0);
/// assert_eq!(store.get("threshold"), 0.0); // clamped to max, unchanged
/// assert_eq!(calls.load(Ordering::Relaxed), 0);
///
/// store.set("threshold", -12.0);
/// assert_eq!(calls.load(Ordering::Relaxed), 1);
/// ```
pub struct ParameterStore {
    descriptors: [ParamDescriptor; PARAM_COUNT],
    values: [AtomicU32; PARAM_COUNT],
    listeners: [Vec<Listener>; PARAM_COUNT],
}

impl ParameterStore {
    /// Create a store with every parameter at its default.
    pub fn new() -> Self {
        let descriptors = CompressorParam::ALL.map(CompressorParam::descriptor);
        let values = descriptors.map(|d| AtomicU32::new(d.default.to_bits()));
        Self {
            descriptors,
            values,
            listeners: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Register a listener for one parameter.
    ///
    /// Listeners run synchronously on whichever thread calls `set`, and only
    /// when the stored value actually changes.
    pub fn subscribe<F>(&mut self, param: CompressorParam, listener: F)
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.listeners[param.index()].push(Box::new(listener));
    }

    /// Set a parameter by its textual ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not one of the six parameter IDs. The parameter set
    /// is fixed, so an unknown ID is a programming error.
    pub fn set(&self, id: &str, raw: f32) {
        let Some(param) = CompressorParam::from_string_id(id) else {
            panic!("unknown parameter id: {id:?}");
        };
        self.set_param(param, raw);
    }

    /// Clamp `raw` to the parameter's range and store it.
    ///
    /// Listeners fire only if the stored value changed. Returns the value
    /// actually stored.
    pub fn set_param(&self, param: CompressorParam, raw: f32) -> f32 {
        let index = param.index();
        let clamped = self.descriptors[index].clamp(raw);
        let previous = f32::from_bits(self.values[index].swap(clamped.to_bits(), Ordering::AcqRel));
        if previous != clamped {
            for listener in &self.listeners[index] {
                listener(clamped);
            }
        }
        clamped
    }

    /// Read a parameter by its textual ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not one of the six parameter IDs.
    pub fn get(&self, id: &str) -> f32 {
        let Some(param) = CompressorParam::from_string_id(id) else {
            panic!("unknown parameter id: {id:?}");
        };
        self.get_param(param)
    }

    /// Read a parameter (lock-free).
    #[inline]
    pub fn get_param(&self, param: CompressorParam) -> f32 {
        f32::from_bits(self.values[param.index()].load(Ordering::Acquire))
    }

    /// Copy of all six values.
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot::from_values(CompressorParam::ALL.map(|p| self.get_param(p)))
    }

    /// Descriptor for one parameter.
    pub fn descriptor(&self, param: CompressorParam) -> &ParamDescriptor {
        &self.descriptors[param.index()]
    }

    /// All descriptors in index order.
    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.descriptors
    }

    /// Find parameter index by stable numeric ID.
    pub fn index_by_id(&self, id: u32) -> Option<usize> {
        self.descriptors.iter().position(|d| d.id.0 == id)
    }

    /// Return every parameter to its default, notifying as usual.
    pub fn reset_to_defaults(&self) {
        for param in CompressorParam::ALL {
            self.set_param(param, self.descriptors[param.index()].default);
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParameterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for param in CompressorParam::ALL {
            map.entry(&param.string_id(), &self.get_param(param));
        }
        map.finish()
    }
}
