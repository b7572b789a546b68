use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Generation error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Processing,
    Io,
    Serialization,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::IoError(_) => ErrorCategory::Io,
            GenError::SerializationError(_) => ErrorCategory::Serialization,
            GenError::MissingConfigError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            GenError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line arguments / suite config and try again"
            }
            ErrorCategory::Processing => {
                "Reduce the requested count or enlarge the sampling domain"
            }
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Serialization => "Inspect the manifest data for invalid values",
        }
    }

    /// 給終端使用者看的錯誤訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::IoError(e) => format!("Could not write the instance file: {}", e),
            GenError::SerializationError(_) => "Could not write the suite manifest".to_string(),
            GenError::MissingConfigError { field } => {
                format!("A required setting is missing: {}", field)
            }
            GenError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            GenError::ConfigValidationError { field, message } => {
                format!("The setting '{}' is invalid: {}", field, message)
            }
            GenError::ProcessingError { message } => {
                format!("Instance generation failed: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = GenError::MissingConfigError {
            field: "count".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = GenError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_message_hides_internals() {
        let err = GenError::InvalidConfigValueError {
            field: "domain_size".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        let msg = err.user_friendly_message();
        assert!(msg.contains("domain_size"));
        assert!(msg.contains("must be at least 1"));
    }
}
