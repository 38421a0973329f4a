use thiserror::Error;

#[derive(Error, Debug)]
pub enum PnrError {
    #[error("Input file not found: {path}")]
    MissingInputFile { path: String },

    #[error("PNR {code} LENGTH should be 10 DIGITS (got {length})")]
    InvalidCodeLength { code: String, length: usize },

    #[error("Network request failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Remote service returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Response cannot be parsed as JSON: {reason}")]
    InvalidResponseFormat { reason: String },

    #[error("Invalid JSON data format. Missing key: {field}")]
    MissingField { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload decryption failed: {message}")]
    Decryption { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Network,
    Response,
    Output,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PnrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PnrError::MissingInputFile { .. } => ErrorCategory::Input,
            PnrError::InvalidCodeLength { .. } | PnrError::Decryption { .. } => {
                ErrorCategory::Validation
            }
            PnrError::NetworkFailure(_) | PnrError::HttpStatus { .. } => ErrorCategory::Network,
            PnrError::InvalidResponseFormat { .. }
            | PnrError::MissingField { .. }
            | PnrError::Json(_) => ErrorCategory::Response,
            PnrError::Io(_) | PnrError::Csv(_) => ErrorCategory::Output,
            PnrError::ConfigError { .. } | PnrError::InvalidConfigValue { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Response => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    /// Fatal errors end the run; everything else is contained to a single code.
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PnrError::MissingInputFile { path } => format!("{} file not found.", path),
            PnrError::NetworkFailure(_) | PnrError::HttpStatus { .. } => {
                format!("An error occurred while connecting to the API: {}", self)
            }
            PnrError::InvalidResponseFormat { reason } => format!(
                "Invalid response from the API. Response cannot be parsed as JSON. {}",
                reason
            ),
            PnrError::MissingField { .. } => {
                format!("An error occurred while parsing the API response: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Create the input file with one 10-character PNR per line",
            ErrorCategory::Validation => "Check the PNR; it must be exactly 10 characters long",
            ErrorCategory::Network => "Check network connectivity and the API endpoint, then rerun",
            ErrorCategory::Response => "The API response changed shape; inspect it with --verbose",
            ErrorCategory::Output => "Make sure the output files are writable",
            ErrorCategory::Config => "Fix the configuration value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PnrError>;
