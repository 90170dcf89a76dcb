use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Division by zero!")]
    DivisionByZero,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Remote endpoint returned status {status}")]
    HttpStatusError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    RemoteFetch,
    Configuration,
    Io,
    Validation,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::DivisionByZero => ErrorCategory::Arithmetic,
            DemoError::HttpError(_)
            | DemoError::HttpStatusError { .. }
            | DemoError::SerializationError(_) => ErrorCategory::RemoteFetch,
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    /// 連線、狀態碼與解碼錯誤都屬於遠端抓取失敗
    pub fn is_remote_fetch_failure(&self) -> bool {
        self.category() == ErrorCategory::RemoteFetch
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
