//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for qa-validator
#[derive(Parser, Debug)]
#[command(name = "qa-validator")]
#[command(author, version, about = "Question/answer validator - scores peers against a reference")]
#[command(long_about = r#"
qa-validator runs a continuous validation loop over a set of peers.

Each iteration:
1. Generate a question (themes and questions come from the text-generation service)
2. Stream the question to every peer and collect their answers
3. Score each answer against a reference answer
4. Blend scores into a running reputation; emit normalized weights on a cadence

Configuration files are loaded from (in priority order):
1. QA_VALIDATOR_<SECTION>__<KEY>               Environment overrides
2. --config <path>                             Explicit config file
3. ./validator.toml                            Project-level config
4. ~/.config/qa-validator/config.toml          Global config

Example:
  qa-validator --config validator.toml
  qa-validator --netuid 3 --alpha 0.8 --cadence 10 --telemetry
  qa-validator --max-iterations 5 -vv
"#)]
pub struct Cli {
    /// Subnet identifier weights are submitted for
    #[arg(long, value_name = "ID")]
    pub netuid: Option<u16>,

    /// Reputation blend factor in [0, 1) (weight kept from previous reputation)
    #[arg(long, value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Completed iterations between weight emissions
    #[arg(long, value_name = "N")]
    pub cadence: Option<u64>,

    /// Stop after this many iterations
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<u64>,

    /// Record per-iteration telemetry
    #[arg(long)]
    pub telemetry: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore discovered config files and environment overrides (--config is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
