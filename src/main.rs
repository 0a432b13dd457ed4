//! adc-matrix CLI
//!
//! Usage: adc-matrix <COMMAND>
//!
//! Commands:
//!   generate  Render one scenario file per input value
//!   select    Select a random execution subset and write the manifest
//!   run       Generate the full matrix, then select

mod cli;

use anyhow::Result;
use clap::Parser;

use adc_matrix::select::RandomSource;
use adc_matrix::{generate, select, write_manifest, Config, ScenarioTemplate};
use cli::{Cli, Commands, GenerateArgs, SelectArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Generate { generate } => {
            apply_generate_args(&mut config, &generate);
            config.validate()?;
            cmd_generate(&config, &generate, cli.quiet)?;
        }
        Commands::Select { select } => {
            apply_select_args(&mut config, &select);
            config.validate()?;
            cmd_select(&config, cli.quiet)?;
        }
        Commands::Run {
            generate,
            select,
        } => {
            apply_generate_args(&mut config, &generate);
            apply_select_args(&mut config, &select);
            config.validate()?;
            cmd_generate(&config, &generate, cli.quiet)?;
            cmd_select(&config, cli.quiet)?;
        }
    }

    Ok(())
}

fn apply_generate_args(config: &mut Config, args: &GenerateArgs) {
    if let Some(domain_size) = args.domain_size {
        config.domain_size = domain_size;
    }
    if let Some(ref output_dir) = args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(output_width) = args.output_width {
        config.output_width = output_width;
        // The default pin list only fits the default width; a custom width
        // needs its own pin list from the config file.
        if config.led_pins.len() != output_width as usize {
            config.led_pins = (0..output_width).collect();
        }
    }
    if let Some(channel) = args.channel {
        config.channel = channel;
    }
    if let Some(repeat) = args.repeat {
        config.repeat_count = repeat;
    }
}

fn apply_select_args(config: &mut Config, args: &SelectArgs) {
    if let Some(sample_size) = args.sample_size {
        config.sample_size = Some(sample_size);
    }
    if let Some(ref manifest) = args.manifest {
        config.manifest = manifest.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
}

fn cmd_generate(config: &Config, args: &GenerateArgs, quiet: bool) -> Result<()> {
    let template = match args.template {
        Some(ref path) => ScenarioTemplate::from_file(path)?,
        None => ScenarioTemplate::from_config(config)?,
    };

    let written = generate(0..config.domain_size, &template, config)?;

    if !quiet {
        println!(
            "Generated {} scenarios in {}",
            written,
            config.output_dir.display()
        );
    }
    Ok(())
}

fn cmd_select(config: &Config, quiet: bool) -> Result<()> {
    let source = RandomSource::from_seed_option(config.seed);
    let sample_size = config.effective_sample_size();

    let selection = select(config.domain_size, sample_size, &mut source.rng())?;
    write_manifest(
        &config.manifest,
        &config.output_dir,
        &config.extension,
        &selection,
    )?;

    if !quiet {
        println!(
            "Selected {} of {} scenarios into {}",
            selection.len(),
            config.domain_size,
            config.manifest.display()
        );
    }
    Ok(())
}
