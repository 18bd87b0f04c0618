use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 無法連線到伺服器 (connection refused, timeout)
    Connection,
    /// 伺服器有回應但狀態或內容錯誤
    Server,
    Configuration,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::Http(e) if e.is_connect() || e.is_timeout() => ErrorCategory::Connection,
            ReportError::Http(_) | ReportError::HttpStatus { .. } => ErrorCategory::Server,
            ReportError::TomlParse(_)
            | ReportError::Config { .. }
            | ReportError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.category() == ErrorCategory::Connection
    }

    pub fn user_friendly_message(&self, base_url: &str) -> String {
        match self.category() {
            ErrorCategory::Connection => {
                format!("Cannot reach the tournament server at {}: {}", base_url, self)
            }
            ErrorCategory::Server => format!("Error while talking to the API: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Connection => {
                "Make sure the server is running and --base-url points at it"
            }
            ErrorCategory::Server => "Check the server logs; the run was aborted without partial results",
            ErrorCategory::Configuration => "Fix the flag or config file value and retry",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Connection => 2,
            ErrorCategory::Server => 1,
            ErrorCategory::Configuration => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
