//! End-to-end behaviour of the controller against a recording engine and
//! the shipped compressor.

use std::sync::{Arc, Mutex};

use simplecomp_core::{AudioBlock, CompressorEngine, ProcessSpec, db_to_linear};
use simplecomp_dynamics::Compressor;
use simplecomp_plugin::PluginController;

/// One call into the engine.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Prepare(ProcessSpec),
    Reset,
    Attack(f32),
    Release(f32),
    Ratio(f32),
    Threshold(f32),
    Process { channels: usize, samples: usize },
}

/// Records every call; audio passes through unchanged.
#[derive(Clone, Default)]
struct RecordingEngine {
    log: Arc<Mutex<Vec<Call>>>,
}

impl RecordingEngine {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }

    fn push(&self, call: Call) {
        self.log.lock().unwrap().push(call);
    }
}

impl CompressorEngine for RecordingEngine {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.push(Call::Prepare(*spec));
    }
    fn reset(&mut self) {
        self.push(Call::Reset);
    }
    fn set_attack(&mut self, attack_ms: f32) {
        self.push(Call::Attack(attack_ms));
    }
    fn set_release(&mut self, release_ms: f32) {
        self.push(Call::Release(release_ms));
    }
    fn set_ratio(&mut self, ratio: f32) {
        self.push(Call::Ratio(ratio));
    }
    fn set_threshold(&mut self, threshold_linear: f32) {
        self.push(Call::Threshold(threshold_linear));
    }
    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        self.push(Call::Process {
            channels: block.num_channels(),
            samples: block.num_samples(),
        });
    }
}

fn process_constant(
    plugin: &mut PluginController<impl CompressorEngine>,
    value: f32,
    channels: usize,
    len: usize,
) -> Vec<Vec<f32>> {
    let mut data = vec![vec![value; len]; channels];
    let mut slices: Vec<&mut [f32]> = data.iter_mut().map(|c| c.as_mut_slice()).collect();
    plugin.process(&mut AudioBlock::new(&mut slices, channels));
    data
}

#[test]
fn prepare_pushes_settings_then_resets() {
    let engine = RecordingEngine::default();
    let mut plugin = PluginController::new(engine.clone());
    plugin.parameters().set("attack", 2.0);
    plugin.parameters().set("threshold", -20.0);
    plugin.prepare(44100.0, 256, 2);

    let calls = engine.take();
    assert_eq!(
        calls.first(),
        Some(&Call::Prepare(ProcessSpec {
            sample_rate: 44100.0,
            maximum_block_size: 256,
            num_channels: 2,
        }))
    );
    assert_eq!(calls.last(), Some(&Call::Reset));
    assert!(calls.contains(&Call::Attack(6.0)));
    assert!(calls.contains(&Call::Release(125.0)));
    assert!(calls.contains(&Call::Ratio(3.0)));
    assert!(calls.contains(&Call::Threshold(db_to_linear(-20.0))));
}

#[test]
fn settings_reasserted_before_every_block() {
    let engine = RecordingEngine::default();
    let mut plugin = PluginController::new(engine.clone());
    plugin.prepare(48000.0, 16, 1);
    engine.take();

    for _ in 0..3 {
        process_constant(&mut plugin, 0.0, 1, 16);
    }

    let calls = engine.take();
    let blocks: Vec<&[Call]> = calls.split_inclusive(|c| matches!(c, Call::Process { .. })).collect();
    assert_eq!(blocks.len(), 3);
    for block in blocks {
        assert_eq!(
            block,
            [
                Call::Ratio(3.0),
                Call::Threshold(1.0),
                Call::Attack(9.0),
                Call::Release(125.0),
                Call::Process { channels: 1, samples: 16 },
            ]
        );
    }
}

#[test]
fn parameter_change_reaches_next_block() {
    let engine = RecordingEngine::default();
    let mut plugin = PluginController::new(engine.clone());
    plugin.prepare(48000.0, 8, 1);
    engine.take();

    plugin.parameters().set("ratio", 6.5);
    process_constant(&mut plugin, 0.0, 1, 8);
    assert!(engine.take().contains(&Call::Ratio(6.5)));
}

#[test]
fn no_engine_calls_while_unprepared() {
    let engine = RecordingEngine::default();
    let mut plugin = PluginController::new(engine.clone());
    let out = process_constant(&mut plugin, 0.3, 2, 8);
    assert!(engine.take().is_empty());
    assert!(out.iter().flatten().all(|&s| s == 0.3));
}

#[test]
fn silent_block_stays_silent() {
    let mut plugin = PluginController::new(Compressor::default());
    let params = plugin.parameters().clone();
    params.set("input gain", 24.0);
    params.set("output gain", 24.0);
    params.set("threshold", -36.0);
    params.set("ratio", 10.0);
    params.set("attack", 0.0);
    params.set("release", 0.0);
    plugin.prepare(48000.0, 128, 2);

    let out = process_constant(&mut plugin, 0.0, 2, 128);
    assert!(out.iter().flatten().all(|&s| s == 0.0));
}

#[test]
fn hot_input_is_compressed_below_boosted_level() {
    let mut plugin = PluginController::new(Compressor::default());
    let params = plugin.parameters().clone();
    params.set("input gain", 6.0);
    params.set("output gain", 0.0);
    params.set("threshold", -36.0);
    params.set("ratio", 10.0);
    params.set("attack", 0.0);
    params.set("release", 0.0);
    plugin.prepare(48000.0, 256, 2);

    let boosted = db_to_linear(6.0);
    let out = process_constant(&mut plugin, 1.0, 2, 256);
    for channel in &out {
        for &s in channel {
            assert!(s > 0.0, "gain reduction must not invert the signal");
            assert!(s < boosted, "output {s} not below boosted input {boosted}");
        }
    }
    assert!(plugin.engine().gain_reduction_db() < -30.0);
}

#[test]
fn control_thread_writes_reach_audio_thread() {
    let mut plugin = PluginController::new(Compressor::default());
    plugin.prepare(48000.0, 32, 1);
    let params = Arc::clone(plugin.parameters());

    std::thread::spawn(move || params.set("output gain", -24.0))
        .join()
        .unwrap();

    let out = process_constant(&mut plugin, 0.5, 1, 32);
    let expected = 0.5 * db_to_linear(-24.0);
    assert!(out[0].iter().all(|&s| (s - expected).abs() < 1e-6));
}
