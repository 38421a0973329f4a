#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "https://railways.easemytrip.com/Train/PnrchkStatus";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_INPUT_PATH: &str = "pnrs.txt";
pub const DEFAULT_CSV_OUTPUT_PATH: &str = "pnr_status.csv";
pub const DEFAULT_TXT_OUTPUT_PATH: &str = "pnr_status.txt";

/// Fully resolved run settings. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
    pub input_path: PathBuf,
    pub csv_output_path: PathBuf,
    pub txt_output_path: PathBuf,
}

/// Optional values from one configuration source (TOML file or CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub api_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub input_path: Option<PathBuf>,
    pub csv_output_path: Option<PathBuf>,
    pub txt_output_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            csv_output_path: PathBuf::from(DEFAULT_CSV_OUTPUT_PATH),
            txt_output_path: PathBuf::from(DEFAULT_TXT_OUTPUT_PATH),
        }
    }
}

impl Settings {
    /// Layers a source on top of the current values; unset fields are kept.
    pub fn apply(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(endpoint) = overrides.api_endpoint {
            self.api_endpoint = endpoint;
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(path) = overrides.input_path {
            self.input_path = path;
        }
        if let Some(path) = overrides.csv_output_path {
            self.csv_output_path = path;
        }
        if let Some(path) = overrides.txt_output_path {
            self.txt_output_path = path;
        }
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_path("input_path", &self.input_path.to_string_lossy())?;
        validate_path("csv_output_path", &self.csv_output_path.to_string_lossy())?;
        validate_path("txt_output_path", &self.txt_output_path.to_string_lossy())?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn csv_output_path(&self) -> &Path {
        &self.csv_output_path
    }

    fn txt_output_path(&self) -> &Path {
        &self.txt_output_path
    }
}
