use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("Request failed: {0}")]
    RequestFailure(#[from] reqwest::Error),

    #[error("Invalid configuration data: {message}")]
    SchemaFailure { message: String },

    #[error("JSON decode error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Schema,
    Io,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormatterError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaFailure {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RequestFailure(_) => ErrorCategory::Request,
            Self::SchemaFailure { .. } | Self::JsonError(_) => ErrorCategory::Schema,
            Self::IoError(_) => ErrorCategory::Io,
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Request => ErrorSeverity::Medium,
            ErrorCategory::Schema | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn is_request_failure(&self) -> bool {
        self.category() == ErrorCategory::Request
    }

    pub fn is_schema_failure(&self) -> bool {
        self.category() == ErrorCategory::Schema
    }

    /// The single line shown to the user. Input validation messages are shown
    /// as-is; everything else collapses into one generic message.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            other => format!("Error while retrieving or generating markdown: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::RequestFailure(e) if e.is_timeout() => {
                "The webhook did not answer in time; try again or raise --timeout-secs"
            }
            Self::RequestFailure(e) if e.is_status() => {
                "The webhook rejected the request; check the campaign ID and try again"
            }
            Self::RequestFailure(_) => "Check the network connection and the webhook URL",
            Self::SchemaFailure { .. } | Self::JsonError(_) => {
                "The webhook returned unexpected data; verify the campaign is configured"
            }
            Self::IoError(_) => "Check that the output directory is writable",
            Self::TomlError(_) => "Make sure the config file is valid TOML",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line arguments or config file"
            }
            Self::ValidationError { .. } => "Enter a 4-digit numeric campaign ID",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = FormatterError::validation("Campaign ID must be exactly 4 digits.");
        assert_eq!(err.user_friendly_message(), "Campaign ID must be exactly 4 digits.");
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_schema_failure_collapses_into_generic_message() {
        let err = FormatterError::schema("Top-level JSON must be an object or an array of objects.");
        assert!(err.is_schema_failure());
        assert_eq!(
            err.user_friendly_message(),
            "Error while retrieving or generating markdown: Invalid configuration data: \
             Top-level JSON must be an object or an array of objects."
        );
    }

    #[test]
    fn test_json_error_is_schema_category() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FormatterError::from(json_err);
        assert_eq!(err.category(), ErrorCategory::Schema);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
