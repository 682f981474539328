use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Non-finite coordinate ({latitude}, {longitude})")]
    NonFiniteCoordinate { latitude: f64, longitude: f64 },

    #[error("A comparison holds at most {max} options, got {count}")]
    TooManyOptions { count: usize, max: usize },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status used by the binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::IoError(_) => ErrorCategory::Io,
            QuoteError::SerializationError(_)
            | QuoteError::CsvError(_)
            | QuoteError::ProcessingError { .. } => ErrorCategory::Data,
            QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            QuoteError::NonFiniteCoordinate { .. } | QuoteError::TooManyOptions { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QuoteError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            QuoteError::SerializationError(_) => {
                "Make sure the request file is valid JSON with camelCase field names".to_string()
            }
            QuoteError::CsvError(_) => "Retry with --formats json to skip CSV output".to_string(),
            QuoteError::ConfigValidationError { field, .. }
            | QuoteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            QuoteError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            QuoteError::NonFiniteCoordinate { .. } => {
                "Supply numeric latitude and longitude values".to_string()
            }
            QuoteError::TooManyOptions { max, .. } => {
                format!("Remove options until at most {} remain", max)
            }
            QuoteError::ProcessingError { .. } => "Inspect the request data and retry".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Data => format!("The quote data could not be processed: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
            ErrorCategory::Input => format!("The request contains invalid input: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = QuoteError::TooManyOptions { count: 4, max: 3 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains('3'));
    }

    #[test]
    fn test_config_error_message_names_field() {
        let err = QuoteError::MissingConfigError {
            field: "input.request_file".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("input.request_file"));
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            QuoteError::TooManyOptions { count: 4, max: 3 },
            QuoteError::MissingConfigError {
                field: "output.output_path".to_string(),
            },
            QuoteError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];

        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();
        assert_eq!(codes, vec![2, 1, 3]);
    }
}
