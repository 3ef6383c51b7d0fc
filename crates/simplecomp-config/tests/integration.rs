//! Integration tests for simplecomp-config.
//!
//! These tests verify presets end to end: files on disk, the parameter
//! store, and the audio the controller produces.

use simplecomp_config::{ConfigError, Preset, factory_presets, get_factory_preset};
use simplecomp_core::{AudioBlock, CompressorEngine, CompressorParam};
use simplecomp_dynamics::Compressor;
use simplecomp_plugin::{CoefficientSnapshot, PluginController};
use tempfile::TempDir;

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("squash.toml");

    let preset = Preset::new("Squash")
        .with_description("Lots of it")
        .with_param(CompressorParam::Threshold, -30.0)
        .with_param(CompressorParam::Ratio, 8.0);
    preset.save(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Preset::load(&path).unwrap(), preset);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Preset::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_load_rejects_unknown_parameter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "name = \"Bad\"\n[params]\nknee = 6.0\n").unwrap();
    assert!(matches!(
        Preset::load(&path),
        Err(ConfigError::UnknownParameter(ref id)) if id == "knee"
    ));
}

#[test]
fn test_preset_drives_controller() {
    let mut plugin = PluginController::new(Compressor::default());
    let preset = get_factory_preset("drum_smash").unwrap();
    preset.apply(plugin.parameters()).unwrap();

    let expected = CoefficientSnapshot::from_params(&plugin.parameters().snapshot());
    assert_eq!(plugin.current_coefficients(), expected);
    assert_eq!(expected.attack_ms, 0.0);

    plugin.prepare(48000.0, 128, 1);
    let mut samples = [0.5f32; 128];
    let mut channels: [&mut [f32]; 1] = [&mut samples];
    plugin.process(&mut AudioBlock::new(&mut channels, 1));
    assert!(samples.iter().all(|s| s.is_finite()));
    assert!(plugin.engine().gain_reduction_db() < 0.0);
}

#[test]
fn test_factory_presets_survive_file_round_trip() {
    let dir = TempDir::new().unwrap();
    for preset in factory_presets() {
        let path = dir.path().join(format!("{}.toml", preset.name));
        preset.save(&path).unwrap();
        assert_eq!(Preset::load(&path).unwrap(), preset, "{}", preset.name);
    }
}
