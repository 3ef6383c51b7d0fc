//! Preset management commands.
//!
//! Lists the factory presets, shows any preset, and writes new presets or
//! plug-in state files built from a preset plus overrides.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use simplecomp_config::{Preset, factory_preset_names, get_factory_preset};
use simplecomp_core::CompressorParam;
use simplecomp_dynamics::Compressor;
use simplecomp_plugin::PluginController;

use super::common::{apply_overrides, load_preset, parse_key_val};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List the factory presets
    List,

    /// Show details of a preset
    Show {
        /// Factory preset name or path to a TOML file
        name: String,
    },

    /// Save a preset file from a base preset and overrides
    Save {
        /// Output TOML file
        output: PathBuf,

        /// Name stored in the preset (defaults to the file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Preset to start from (defaults to the plug-in defaults)
        #[arg(short, long)]
        from: Option<String>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Parameter overrides (e.g., "ratio=4")
        #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
        param: Vec<(String, String)>,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Write the plug-in state (JSON) a host would store for a preset
    ExportState {
        /// Factory preset name or path to a TOML file
        name: String,

        /// Output state file
        output: PathBuf,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => {
            list_presets();
            Ok(())
        }
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            output,
            name,
            from,
            description,
            param,
            force,
        } => save_preset(
            &output,
            name.as_deref(),
            from.as_deref(),
            description.as_deref(),
            &param,
            force,
        ),
        PresetsCommand::ExportState { name, output } => export_state(&name, &output),
    }
}

fn list_presets() {
    println!("Factory Presets:");
    println!("================");
    for id in factory_preset_names() {
        if let Some(preset) = get_factory_preset(id) {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {id:16} {:16} - {desc}", preset.name);
        }
    }
    println!();
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
        println!();
    }

    println!("Parameters:");
    for param in CompressorParam::ALL {
        let desc = param.descriptor();
        match preset.get(param) {
            Some(value) => println!("  {:12} = {}", desc.string_id, desc.format_value(value)),
            None => println!("  {:12}   (unchanged)", desc.string_id),
        }
    }

    Ok(())
}

fn save_preset(
    output: &Path,
    name: Option<&str>,
    from: Option<&str>,
    description: Option<&str>,
    overrides: &[(String, String)],
    force: bool,
) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "'{}' already exists. Use --force to overwrite.",
            output.display()
        );
    }

    let plugin = PluginController::new(Compressor::default());
    if let Some(base) = from {
        load_preset(base)?.apply(plugin.parameters())?;
    }
    apply_overrides(plugin.parameters(), overrides)?;

    let name = name
        .map(str::to_string)
        .or_else(|| {
            output
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| Preset::default().name);

    let mut preset = Preset::from_store(name, plugin.parameters());
    if let Some(desc) = description {
        preset = preset.with_description(desc);
    }
    preset.save(output)?;

    println!("Saved preset '{}' to {}", preset.name, output.display());
    Ok(())
}

fn export_state(name: &str, output: &Path) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    let plugin = PluginController::new(Compressor::default());
    preset.apply(plugin.parameters())?;

    std::fs::write(output, plugin.serialize()?)?;
    println!("Wrote state for '{}' to {}", preset.name, output.display());
    Ok(())
}
