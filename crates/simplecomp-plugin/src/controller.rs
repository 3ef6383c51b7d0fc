//! Plug-in lifecycle: parameter wiring, stream setup, block processing and
//! state persistence.

use std::sync::Arc;

use simplecomp_core::{AudioBlock, CompressorEngine, CompressorParam, ProcessSpec};

use crate::chain::SignalChain;
use crate::coefficients::{CoefficientSnapshot, DerivedCoefficients};
use crate::error::PluginError;
use crate::params::ParameterStore;
use crate::state;

/// Display name reported to hosts.
pub const PLUGIN_NAME: &str = "SimpleComp";

/// Bus layouts the plug-in accepts: mono or stereo, with as many inputs as
/// outputs.
pub fn is_layout_supported(input_channels: usize, output_channels: usize) -> bool {
    matches!(output_channels, 1 | 2) && input_channels == output_channels
}

/// Lifecycle state of a [`PluginController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No stream configured; `process` leaves audio untouched.
    Uninitialized,
    /// Prepared for a stream; `process` runs the signal chain.
    Ready,
}

/// Owns the parameters, the coefficient cache and the signal chain.
///
/// The parameter store and cache are shared through `Arc`s: a control
/// thread can hold [`PluginController::parameters`] and write to it while
/// the audio thread owns the controller and calls
/// [`process`](PluginController::process).
///
/// # Example
///
/// ```rust
/// use simplecomp_core::AudioBlock;
/// use simplecomp_dynamics::Compressor;
/// use simplecomp_plugin::PluginController;
///
/// let mut plugin = PluginController::new(Compressor::default());
/// plugin.parameters().set("threshold", -24.0);
/// plugin.prepare(48000.0, 256, 2);
///
/// let mut left = vec![0.5f32; 256];
/// let mut right = vec![0.5f32; 256];
/// let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
/// assert!(plugin.process(&mut AudioBlock::new(&mut channels, 2)));
/// ```
pub struct PluginController<E> {
    params: Arc<ParameterStore>,
    coefficients: Arc<DerivedCoefficients>,
    chain: SignalChain<E>,
    state: ControllerState,
    spec: Option<ProcessSpec>,
}

impl<E: CompressorEngine> PluginController<E> {
    /// Build the controller around `engine`.
    ///
    /// Every parameter gets a listener that refreshes its own coefficient
    /// field, so the cache follows the store from the first `set` on.
    pub fn new(engine: E) -> Self {
        let mut params = ParameterStore::new();
        let coefficients = Arc::new(DerivedCoefficients::from_params(&params.snapshot()));

        for param in CompressorParam::ALL {
            let cache = Arc::clone(&coefficients);
            params.subscribe(param, move |value| {
                cache.update(param, value);
                tracing::debug!(param = param.string_id(), value, "parameter changed");
            });
        }

        Self {
            params: Arc::new(params),
            coefficients,
            chain: SignalChain::new(engine),
            state: ControllerState::Uninitialized,
            spec: None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Shared handle to the parameter store.
    pub fn parameters(&self) -> &Arc<ParameterStore> {
        &self.params
    }

    /// Read access to the coefficient cache.
    pub fn coefficients(&self) -> &DerivedCoefficients {
        &self.coefficients
    }

    /// The compressor engine, e.g. for gain-reduction metering.
    pub fn engine(&self) -> &E {
        self.chain.engine()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Stream configuration from the last `prepare`, if still prepared.
    pub fn process_spec(&self) -> Option<ProcessSpec> {
        self.spec
    }

    /// Tail length in seconds. The compressor has no tail.
    pub fn tail_length_seconds(&self) -> f64 {
        0.0
    }

    /// Configure for a stream. Call while audio is stopped.
    ///
    /// Recomputes every coefficient from the current parameters, prepares
    /// the engine with them and clears its envelope memory.
    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize, num_channels: usize) {
        let spec = ProcessSpec {
            sample_rate,
            maximum_block_size: max_block_size,
            num_channels,
        };

        self.coefficients.recompute_all(&self.params.snapshot());
        self.chain.prepare(&spec, &self.coefficients.snapshot());
        self.spec = Some(spec);
        self.state = ControllerState::Ready;

        tracing::info!(sample_rate, max_block_size, num_channels, "prepared");
    }

    /// Process one block in place.
    ///
    /// Returns `false` and leaves the block untouched if the controller has
    /// not been prepared.
    #[inline]
    pub fn process(&mut self, block: &mut AudioBlock<'_, '_>) -> bool {
        if self.state != ControllerState::Ready {
            return false;
        }
        let coeffs = self.coefficients.snapshot();
        self.chain.process(block, &coeffs);
        true
    }

    /// Leave the stream. Call while audio is stopped.
    pub fn release(&mut self) {
        if self.state == ControllerState::Ready {
            tracing::info!("released");
        }
        self.state = ControllerState::Uninitialized;
        self.spec = None;
    }

    /// Encode the six parameter values.
    pub fn serialize(&self) -> Result<Vec<u8>, PluginError> {
        state::save_state(&self.params)
    }

    /// Restore parameter values and recompute every coefficient.
    ///
    /// On error the previous values are retained and the cache still
    /// matches them.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<(), PluginError> {
        match state::load_state(&self.params, bytes) {
            Ok(applied) => {
                self.refresh_coefficients();
                tracing::debug!(applied, "state restored");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected plug-in state");
                Err(err)
            }
        }
    }

    /// Recompute every coefficient from the current parameters.
    pub fn refresh_coefficients(&self) {
        self.coefficients.recompute_all(&self.params.snapshot());
    }

    /// Coefficients the next block will use.
    pub fn current_coefficients(&self) -> CoefficientSnapshot {
        self.coefficients.snapshot()
    }
}

impl<E: CompressorEngine + Default> Default for PluginController<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}
