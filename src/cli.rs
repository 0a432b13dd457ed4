use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// adc-matrix - HIL test-matrix generator and sampler
#[derive(Parser, Debug)]
#[command(name = "adc-matrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "adc-matrix.toml")]
    pub config: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one scenario file per input value
    Generate {
        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Select a random execution subset and write the manifest
    Select {
        #[command(flatten)]
        select: SelectArgs,
    },

    /// Generate the full matrix, then select (a complete run)
    Run {
        #[command(flatten)]
        generate: GenerateArgs,

        #[command(flatten)]
        select: SelectArgs,
    },
}

/// Overrides shared by scenario generation
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of input sample values (2^N for an N-bit converter)
    #[arg(long)]
    pub domain_size: Option<u32>,

    /// Directory receiving the scenario files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Normalization divisor applied before bit extraction
    #[arg(long)]
    pub scale: Option<u32>,

    /// Number of output lines, one expected bit each
    #[arg(long)]
    pub output_width: Option<u32>,

    /// ADC channel the sample is fed into
    #[arg(long)]
    pub channel: Option<u32>,

    /// Backend repeat count for the fed sample
    #[arg(long)]
    pub repeat: Option<u32>,

    /// Custom scenario template file (must carry one {{value}} field)
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

/// Overrides shared by subset selection
#[derive(Args, Debug, Default)]
pub struct SelectArgs {
    /// How many scenarios to select (default: the whole domain)
    #[arg(long)]
    pub sample_size: Option<u32>,

    /// Manifest path
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Seed for reproducible selection (omit for fresh entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["adc-matrix", "generate"]).unwrap();
        if let Commands::Generate { generate } = cli.command {
            assert_eq!(generate.domain_size, None);
            assert_eq!(generate.output_dir, None);
            assert_eq!(generate.template, None);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_generate_with_overrides() {
        let cli = Cli::try_parse_from([
            "adc-matrix",
            "generate",
            "--domain-size",
            "8",
            "--scale",
            "2",
            "--output-width",
            "3",
            "--output-dir",
            "out",
        ])
        .unwrap();

        if let Commands::Generate { generate } = cli.command {
            assert_eq!(generate.domain_size, Some(8));
            assert_eq!(generate.scale, Some(2));
            assert_eq!(generate.output_width, Some(3));
            assert_eq!(generate.output_dir, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_select_with_seed() {
        let cli = Cli::try_parse_from([
            "adc-matrix",
            "select",
            "--sample-size",
            "100",
            "--seed",
            "42",
        ])
        .unwrap();

        if let Commands::Select { select } = cli.command {
            assert_eq!(select.sample_size, Some(100));
            assert_eq!(select.seed, Some(42));
            assert_eq!(select.manifest, None);
        } else {
            panic!("Expected Select command");
        }
    }

    #[test]
    fn test_cli_parse_run_takes_both_argument_sets() {
        let cli = Cli::try_parse_from([
            "adc-matrix",
            "run",
            "--domain-size",
            "16",
            "--sample-size",
            "4",
        ])
        .unwrap();

        if let Commands::Run { generate, select } = cli.command {
            assert_eq!(generate.domain_size, Some(16));
            assert_eq!(select.sample_size, Some(4));
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["adc-matrix", "generate", "--config", "rig.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("rig.toml"));
    }

    #[test]
    fn test_cli_quiet_flag() {
        let cli = Cli::try_parse_from(["adc-matrix", "-q", "select"]).unwrap();
        assert!(cli.quiet);
    }
}
