use crate::config::{ByteLensConfig, DumpMode};
use crate::format::HexCase;
use crate::lanes;
use crate::sample::SampleRecord;
use crate::value::Value;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

pub mod formatters;

use formatters::{CliDumpFormatter, CliLanesFormatter, CliSampleFormatter};

#[derive(Parser)]
#[command(name = "byte-lens")]
#[command(about = "Dump the raw bytes of fixed-size values", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of the default locations
    #[arg(long = "config", short = 'c', global = true)]
    pub config_path: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Show version information
    #[arg(long = "version", short = 'V', action = clap::ArgAction::SetTrue)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dump typed values, e.g. `u32:0x12345678 f64:-2.5 str10:hello`
    Dump {
        #[arg(
            required = true,
            allow_hyphen_values = true,
            help = "Values as TYPE:LITERAL, TYPE one of:\n  u8 u16 u32 u64 u128\n  i8 i16 i32 i64 i128\n  f32 f64 bool char\n  strN - text in an N-byte buffer\n"
        )]
        values: Vec<Value>,

        /// Dumps to print: bin, hex or both
        #[arg(long, short)]
        radix: Option<DumpMode>,

        /// Text between byte groups
        #[arg(long, short, allow_hyphen_values = true)]
        separator: Option<String>,

        /// Uppercase hex digits
        #[arg(long)]
        upper: bool,
    },

    /// Dump every field of a sample record, on the stack and on the heap
    Sample {
        /// Fill the record with recognizable values instead of zeroes
        #[arg(long)]
        demo: bool,
    },

    /// Show how a lane count of zero wraps an unsigned loop bound
    Lanes {
        /// Number of lanes
        #[arg(long, short = 'n', default_value_t = 0, allow_hyphen_values = true)]
        count: i32,

        /// Maximum iterations actually run
        #[arg(
            long,
            default_value_t = 8,
            value_parser = clap::value_parser!(u64).range(..=lanes::MAX_CAP as u64)
        )]
        cap: u64,
    },

    /// Show config file locations
    Config {
        /// Write a default user config file
        #[arg(long)]
        init: bool,
    },
}

fn load_config(cli: &Cli) -> Result<ByteLensConfig, String> {
    let loaded = match &cli.config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading explicit config file");
            ByteLensConfig::load_from(path)
        }
        None => ByteLensConfig::load(),
    };
    loaded.map_err(|e| format!("Error loading configuration: {e}"))
}

/// Run the CLI application
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration cannot be loaded or parsed
/// - The default config file cannot be written
/// - Printing help fails
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    crate::logger::init_log(cli.verbose);

    if cli.version {
        print!("{}", crate::version::get_version_info());
        return Ok(());
    }

    let config = load_config(&cli)?;
    debug!(?config, "configuration loaded");

    match &cli.command {
        Some(Commands::Dump {
            values,
            radix,
            separator,
            upper,
        }) => {
            let mut formatter = config.format.formatter();
            if let Some(separator) = separator {
                formatter = formatter.with_separator(separator.clone());
            }
            if *upper {
                formatter = formatter.with_case(HexCase::Upper);
            }
            let mode = radix.unwrap_or(config.format.radix);
            println!(
                "{}",
                CliDumpFormatter::format_values(values, mode, &formatter)
            );
            Ok(())
        }
        Some(Commands::Sample { demo }) => {
            let record = if *demo {
                SampleRecord::demo()
            } else {
                SampleRecord::default()
            };
            println!(
                "{}",
                CliSampleFormatter::format_samples(&record, &config.format.formatter())
            );
            Ok(())
        }
        Some(Commands::Lanes { count, cap }) => {
            let cap = usize::try_from(*cap).unwrap_or(lanes::MAX_CAP);
            println!("{}", CliLanesFormatter::format_lanes(*count, cap));
            Ok(())
        }
        Some(Commands::Config { init }) => {
            if *init {
                let path = ByteLensConfig::create_default_config_file()
                    .map_err(|e| format!("Error creating config file: {e}"))?;
                println!("Wrote default config to {}", path.display());
            } else {
                ByteLensConfig::print_config_info();
            }
            Ok(())
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().map_err(|e| e.to_string())?;
            Ok(())
        }
    }
}
