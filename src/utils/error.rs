use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Prompt failed: {message}")]
    PromptError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Validation,
    Interaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ReadmeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReadmeError::IoError(_) => ErrorCategory::Io,
            ReadmeError::JsonError(_) | ReadmeError::TomlError { .. } => {
                ErrorCategory::Configuration
            }
            ReadmeError::InvalidConfigValueError { .. } => ErrorCategory::Validation,
            ReadmeError::PromptError { .. } => ErrorCategory::Interaction,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReadmeError::IoError(_) => ErrorSeverity::Critical,
            ReadmeError::PromptError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReadmeError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            ReadmeError::JsonError(_) => {
                "Fix the JSON syntax in the profile file, or rerun with --interactive".to_string()
            }
            ReadmeError::TomlError { .. } => {
                "Fix the TOML syntax in the profile file, or rerun with --interactive".to_string()
            }
            ReadmeError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' entry in the profile file", field)
            }
            ReadmeError::PromptError { .. } => {
                "Run again from an interactive terminal".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReadmeError::IoError(e) => format!("Could not read or write a file: {}", e),
            ReadmeError::JsonError(e) => format!("The profile file is not valid JSON: {}", e),
            ReadmeError::TomlError { message } => {
                format!("The profile file is not valid TOML: {}", message)
            }
            ReadmeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value '{}': {}", field, value, reason),
            ReadmeError::PromptError { message } => {
                format!("Interactive setup failed: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadmeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_exit_codes() {
        let io = ReadmeError::IoError(std::io::Error::other("disk full"));
        assert_eq!(io.severity().exit_code(), 3);
        assert_eq!(io.category(), ErrorCategory::Io);

        let invalid = ReadmeError::InvalidConfigValueError {
            field: "social_links.blog".to_string(),
            value: "blog".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert_eq!(invalid.severity().exit_code(), 1);
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert!(invalid.recovery_suggestion().contains("social_links.blog"));
    }

    #[test]
    fn test_user_friendly_message() {
        let err = ReadmeError::TomlError {
            message: "expected `=`".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "The profile file is not valid TOML: expected `=`"
        );
        assert_eq!(err.to_string(), "TOML parsing error: expected `=`");

        let prompt = ReadmeError::PromptError {
            message: "stdin closed".to_string(),
        };
        assert_eq!(prompt.severity().exit_code(), 2);
    }
}
