//! Configuration loading for the analyzer.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::MatchStrategy;
use crate::trace::ParseMode;

/// Analyzer configuration, read from `coil-analyzer.toml` in the working
/// directory. Every field has a default, so the application also runs
/// without a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalyzerConfig {
    /// Directory scanned for bench log files.
    pub data_dir: PathBuf,
    /// File name matching strategy for selection lookups.
    pub match_strategy: MatchStrategy,
    /// Row-tolerance policy for the log parser.
    pub parse_mode: ParseMode,
    /// Optional deployment cutoff date (ISO `YYYY-MM-DD`).
    pub expires_on: Option<NaiveDate>,
    /// Coil identifiers offered in the dropdown.
    pub coils: Vec<String>,
    /// Receiver channel identifiers offered for selection.
    pub channels: Vec<String>,
    /// Voltage/signal-type codes offered for selection.
    pub signals: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            match_strategy: MatchStrategy::default(),
            parse_mode: ParseMode::default(),
            expires_on: None,
            coils: to_strings(&["DCP", "KNEE_16", "ACI", "SHOULDER_16", "ANTERIOR"]),
            channels: to_strings(&["MSEQ0", "MSEQ1", "MSEQ2", "MSEQ3"]),
            signals: to_strings(&["VDH", "VDL", "VLNA", "VPIN"]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AnalyzerConfig {
    /// Default config file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "coil-analyzer.toml";

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the config file
    ///
    /// # Returns
    /// * `Ok(AnalyzerConfig)` if the file was successfully loaded and parsed
    /// * `Err(String)` with a descriptive error message otherwise
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load `coil-analyzer.toml` from the working directory, falling back
    /// to defaults when the file is absent or unreadable.
    pub fn load_or_default() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using defaults", Self::FILE_NAME);
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
