//! File-based compression command.

use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use simplecomp_core::{AudioBlock, CompressorEngine, linear_to_db};
use simplecomp_dynamics::Compressor;
use simplecomp_plugin::{PluginController, is_layout_supported};

use super::common::{apply_overrides, load_preset, parse_key_val};
use crate::audio::{Audio, read_wav, write_wav};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset to start from (factory name or TOML file)
    #[arg(short, long)]
    preset: Option<String>,

    /// Saved plug-in state (JSON) to start from
    #[arg(long)]
    state: Option<PathBuf>,

    /// Parameter overrides, applied last (e.g., "threshold=-18" or "102=-18")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, String)>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
    bit_depth: u16,
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    match s.parse::<u16>() {
        Ok(bits @ (16 | 24 | 32)) => Ok(bits),
        _ => Err(format!("unsupported bit depth '{s}' (expected 16, 24, or 32)")),
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        anyhow::bail!("--block-size must be at least 1");
    }

    println!("Reading {}...", args.input.display());
    let mut audio = read_wav(&args.input)?;
    let num_channels = audio.channels.len();
    let frames = audio.num_frames();

    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        num_channels,
        audio.sample_rate,
        frames as f64 / f64::from(audio.sample_rate)
    );

    if !is_layout_supported(num_channels, num_channels) {
        anyhow::bail!("Unsupported channel count {num_channels}: only mono and stereo are accepted");
    }

    let sample_rate = f64::from(audio.sample_rate);
    let mut plugin = PluginController::new(Compressor::new(sample_rate as f32));

    if let Some(path) = &args.state {
        let bytes = std::fs::read(path)?;
        plugin.deserialize(&bytes)?;
        println!("Loaded state: {}", path.display());
    }
    if let Some(name) = &args.preset {
        let preset = load_preset(name)?;
        preset.apply(plugin.parameters())?;
        println!("Loaded preset: {}", preset.name);
    }
    for (param, value) in apply_overrides(plugin.parameters(), &args.param)? {
        let desc = param.descriptor();
        println!("  {} = {}", desc.string_id, desc.format_value(value));
    }

    plugin.prepare(sample_rate, args.block_size, num_channels);

    let input_rms = audio.rms();
    let input_peak = audio.peak();

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let max_reduction_db = process_audio(&mut plugin, &mut audio, args.block_size, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message("done");
    plugin.release();

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(audio.rms()),
        linear_to_db(audio.peak())
    );
    println!("  Max gain reduction: {max_reduction_db:.1} dB");

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &audio, args.bit_depth)?;
    println!("Done!");

    Ok(())
}

/// Run `audio` through `plugin` in blocks of at most `block_size` frames.
///
/// Returns the deepest gain reduction reported by any block.
fn process_audio<E: CompressorEngine>(
    plugin: &mut PluginController<E>,
    audio: &mut Audio,
    block_size: usize,
    mut progress: impl FnMut(usize),
) -> f32 {
    let frames = audio.num_frames();
    let num_channels = audio.channels.len();
    let mut max_reduction_db = 0.0f32;

    let mut start = 0;
    while start < frames {
        let end = (start + block_size).min(frames);
        let mut slices: Vec<&mut [f32]> = audio
            .channels
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();
        plugin.process(&mut AudioBlock::new(&mut slices, num_channels));
        max_reduction_db = max_reduction_db.min(plugin.engine().gain_reduction_db());

        start = end;
        progress(start);
    }

    max_reduction_db
}
