use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeError {
    #[error("Invalid date for {field}: '{value}' ({reason})")]
    InvalidDate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Birth date {birth_date} is after reference date {reference_date}")]
    FutureDate {
        birth_date: chrono::NaiveDate,
        reference_date: chrono::NaiveDate,
    },

    #[error("Invalid orbital body '{body}': {reason}")]
    InvalidBodyData { body: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AgeError::InvalidDate { .. } | AgeError::FutureDate { .. } => ErrorCategory::Input,
            AgeError::InvalidBodyData { .. }
            | AgeError::ConfigError { .. }
            | AgeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AgeError::IoError(_) | AgeError::SerializationError(_) | AgeError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AgeError::InvalidDate { value, .. } if value.trim().is_empty() => {
                "Please choose a birth date".to_string()
            }
            AgeError::InvalidDate { value, .. } => {
                format!("'{}' is not a valid calendar date", value)
            }
            AgeError::FutureDate { birth_date, .. } => {
                format!("Birth date {} is in the future", birth_date)
            }
            AgeError::InvalidBodyData { body, reason } => {
                format!("The planet table entry '{}' is invalid: {}", body, reason)
            }
            AgeError::ConfigError { message } => format!("Configuration problem: {}", message),
            AgeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option {} is invalid: {}", field, reason)
            }
            AgeError::IoError(e) => format!("File access failed: {}", e),
            AgeError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            AgeError::CsvError(e) => format!("Could not produce CSV output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgeError::InvalidDate { .. } => "Enter the date as YYYY-MM-DD, e.g. 1990-05-17",
            AgeError::FutureDate { .. } => {
                "Pick a birth date on or before the reference date (today by default)"
            }
            AgeError::InvalidBodyData { .. } => {
                "Every body needs a non-empty name and a positive orbital period in days"
            }
            AgeError::ConfigError { .. } => "Check that the bodies file is valid TOML",
            AgeError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
            AgeError::IoError(_) => "Check that the path exists and is readable/writable",
            AgeError::SerializationError(_) | AgeError::CsvError(_) => {
                "Retry with --format text"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = AgeError::FutureDate {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("2030-01-01"));
    }

    #[test]
    fn test_blank_date_message() {
        let err = AgeError::InvalidDate {
            field: "birth_date".to_string(),
            value: "  ".to_string(),
            reason: "empty".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Please choose a birth date");
    }

    #[test]
    fn test_body_errors_are_configuration() {
        let err = AgeError::InvalidBodyData {
            body: "Vulcan".to_string(),
            reason: "orbital period must be positive".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Invalid orbital body 'Vulcan': orbital period must be positive"
        );
    }
}
