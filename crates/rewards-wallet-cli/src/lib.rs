//! Command-line inspector for rewards external wallet payloads.
//!
//! Reads one wallet JSON object from a file or stdin and prints either a
//! field listing with the localized status label or the canonical JSON form.
//!
//! ```text
//! rewards-wallet [--json] [PATH]
//! ```
//!
//! Environment (a `.env` file is honoured):
//! - `REWARDS_WALLET_LABELS` — JSON label table, defaults to built-in English
//! - `REWARDS_WALLET_OUTPUT` — `summary` (default) or `json`
//! - `RUST_LOG` — tracing filter, defaults to `warn`

pub mod config;
mod render;

use config::{CliConfig, ConfigError, OutputMode};
use rewards_wallet::{ExternalWalletRecord, ParseError};
use std::path::PathBuf;

pub use render::summary;

pub const USAGE: &str = "usage: rewards-wallet [--json] [PATH]\n\
     Reads a wallet JSON object from PATH, or stdin when PATH is `-` or omitted.";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// `--json` was given
    pub json: bool,
    /// Input file; `None` reads stdin
    pub path: Option<PathBuf>,
    /// `--help` was given
    pub help: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--json" => parsed.json = true,
                "-h" | "--help" => parsed.help = true,
                "-" if parsed.path.is_none() => {}
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown flag `{flag}`")))
                }
                _ if parsed.path.is_none() => parsed.path = Some(PathBuf::from(&arg)),
                _ => return Err(CliError::Usage(format!("unexpected argument `{arg}`"))),
            }
        }
        Ok(parsed)
    }

    /// Output mode after applying `--json` over the configured default.
    pub fn output(&self, config: &CliConfig) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            config.output
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid wallet payload: {0}")]
    Parse(#[from] ParseError),

    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the report for one wallet payload.
pub fn run(args: &Args, config: &CliConfig, input: &str) -> Result<String, CliError> {
    let record = ExternalWalletRecord::parse(input)?;
    tracing::debug!(wallet = %record, "parsed wallet payload");

    match args.output(config) {
        OutputMode::Json => Ok(record.to_json()?),
        OutputMode::Summary => {
            let labels = config.load_labels()?;
            Ok(summary(&record, &labels))
        }
    }
}
