use crate::config::SettingsOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pnr-status")]
#[command(about = "Check the booking status of a list of PNRs")]
pub struct CliArgs {
    /// File with one PNR per line [default: pnrs.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// CSV output file, one row per passenger [default: pnr_status.csv]
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Plain-text output file [default: pnr_status.txt]
    #[arg(long)]
    pub txt_output: Option<PathBuf>,

    /// Status endpoint the encrypted PNR is posted to
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_endpoint: self.api_endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            input_path: self.input.clone(),
            csv_output_path: self.csv_output.clone(),
            txt_output_path: self.txt_output.clone(),
        }
    }
}
