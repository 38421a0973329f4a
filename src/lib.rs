pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::cli::CliArgs;

pub use self::config::{toml_config::TomlConfig, Settings};
pub use self::core::{
    batch::{BatchDriver, BatchSummary, ItemOutcome},
    client::HttpStatusClient,
    crypto::PayloadCipher,
    engine::PnrEngine,
};
pub use self::domain::model::{Code, StatusRecord};
pub use self::utils::error::{PnrError, Result};
