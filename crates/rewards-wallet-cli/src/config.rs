use rewards_wallet::{LabelError, LabelTable};
use std::env;
use std::path::PathBuf;

const LABELS_VAR: &str = "REWARDS_WALLET_LABELS";
const OUTPUT_VAR: &str = "REWARDS_WALLET_OUTPUT";

/// How a parsed record is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable field listing with the status label.
    #[default]
    Summary,
    /// Canonical JSON.
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(OutputMode::Summary),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON label table to use instead of the built-in English one
    pub labels_path: Option<PathBuf>,
    /// Output format when `--json` is not given
    pub output: OutputMode,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let labels_path = var(LABELS_VAR).map(PathBuf::from);

        let output = match var(OUTPUT_VAR) {
            Some(mode) => mode.parse()?,
            None => OutputMode::default(),
        };

        Ok(Self {
            labels_path,
            output,
        })
    }

    /// Load the configured label table, or the built-in English labels.
    pub fn load_labels(&self) -> Result<LabelTable, ConfigError> {
        let Some(path) = &self.labels_path else {
            return Ok(LabelTable::english());
        };

        tracing::debug!("Loading wallet status labels from {}", path.display());
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let table = LabelTable::from_json(&data)?;

        let missing = table.missing();
        if !missing.is_empty() {
            tracing::warn!(
                "Label table {} has no entry for {:?}",
                path.display(),
                missing
            );
        }
        Ok(table)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid REWARDS_WALLET_OUTPUT value: {0} (expected `summary` or `json`)")]
    InvalidOutput(String),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidLabels(#[from] LabelError),
}
