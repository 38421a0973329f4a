use crate::config::SettingsOverrides;
use crate::utils::error::{PnrError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration. Every section and key is optional; anything left
/// out falls through to the built-in default or a CLI flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub csv_path: Option<PathBuf>,
    pub txt_path: Option<PathBuf>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PnrError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PnrError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PnrError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_endpoint: self.source.endpoint.clone(),
            timeout_seconds: self.source.timeout_seconds,
            input_path: self.input.path.clone(),
            csv_output_path: self.output.csv_path.clone(),
            txt_output_path: self.output.txt_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/pnr"
timeout_seconds = 12

[input]
path = "codes.txt"

[output]
csv_path = "out/status.csv"
txt_path = "out/status.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = Settings::default().apply(config.overrides());

        assert_eq!(settings.api_endpoint, "https://api.example.com/pnr");
        assert_eq!(settings.timeout_seconds, 12);
        assert_eq!(settings.input_path, PathBuf::from("codes.txt"));
        assert_eq!(settings.csv_output_path, PathBuf::from("out/status.csv"));
        assert_eq!(settings.txt_output_path, PathBuf::from("out/status.txt"));
    }

    #[test]
    fn test_empty_config_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.overrides(), SettingsOverrides::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PNR_TEST_API_ENDPOINT", "https://test.api.com");

        let toml_content = r#"
[source]
endpoint = "${PNR_TEST_API_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint.as_deref(), Some("https://test.api.com"));

        std::env::remove_var("PNR_TEST_API_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[source]
endpoint = "${PNR_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = Settings::default().apply(config.overrides());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = TomlConfig::from_toml_str("[source]\nretries = 3\n");
        assert!(matches!(result, Err(PnrError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"from-file.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.path, Some(PathBuf::from("from-file.txt")));
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            TomlConfig::from_file("/nonexistent/pnr-status.toml"),
            Err(PnrError::ConfigError { .. })
        ));
    }
}
