//! Parameter listing command.

use clap::Args;
use simplecomp_core::{CompressorParam, attack_knob_to_ms, release_knob_to_ms};
use simplecomp_plugin::ParameterStore;

#[derive(Args)]
pub struct ParamsArgs {
    /// Show details for a single parameter (textual or numeric ID)
    #[arg(value_name = "PARAM")]
    param: Option<String>,
}

pub fn run(args: &ParamsArgs) -> anyhow::Result<()> {
    let store = ParameterStore::new();

    if let Some(key) = &args.param {
        let param = super::common::resolve_param(&store, key)?;
        show_param(param);
        return Ok(());
    }

    println!("Parameters");
    println!("==========");
    println!();
    println!(
        "  {:4}  {:12}  {:>10}  {:>10}  {:>10}",
        "ID", "Name", "Min", "Max", "Default"
    );
    println!(
        "  {:4}  {:12}  {:>10}  {:>10}  {:>10}",
        "--", "----", "---", "---", "-------"
    );
    for desc in store.descriptors() {
        println!(
            "  {:4}  {:12}  {:>10}  {:>10}  {:>10}",
            desc.id.0,
            desc.string_id,
            desc.format_value(desc.min),
            desc.format_value(desc.max),
            desc.format_value(desc.default),
        );
    }
    println!();
    println!("Example usage:");
    println!();
    println!("  simplecomp process input.wav output.wav --param threshold=-18 --param ratio=4");

    Ok(())
}

fn show_param(param: CompressorParam) {
    let desc = param.descriptor();
    println!("{}", desc.name);
    println!("{}", "=".repeat(desc.name.len()));
    println!();
    println!("  ID:       {} ({})", desc.string_id, desc.id.0);
    println!(
        "  Range:    {} to {}",
        desc.format_value(desc.min),
        desc.format_value(desc.max)
    );
    println!("  Default:  {}", desc.format_value(desc.default));
    println!("  Step:     {}", desc.step);

    match param {
        CompressorParam::Attack => println!(
            "  Maps to:  {} ms at min, {} ms at max",
            attack_knob_to_ms(desc.min),
            attack_knob_to_ms(desc.max)
        ),
        CompressorParam::Release => println!(
            "  Maps to:  {} ms at min, {} ms at max",
            release_knob_to_ms(desc.min),
            release_knob_to_ms(desc.max)
        ),
        _ => {}
    }
}
