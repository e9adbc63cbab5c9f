use std::fmt;
use thiserror::Error;

/// Which input payload a parse failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Request,
    Mapping,
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Request => f.write_str("request"),
            Payload::Mapping => f.write_str("mapping"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RemapError {
    #[error("Error al parsear {payload}: {source}")]
    ParseError {
        payload: Payload,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error al generar resultado: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RemapError {
    pub fn parse(payload: Payload, source: serde_json::Error) -> Self {
        RemapError::ParseError { payload, source }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        RemapError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RemapError::ParseError { .. } => ErrorCategory::Input,
            RemapError::ValidationError { .. } => ErrorCategory::Data,
            RemapError::ConfigError { .. } | RemapError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RemapError::IoError(_) | RemapError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RemapError::ParseError { .. }
            | RemapError::ValidationError { .. }
            | RemapError::ConfigError { .. }
            | RemapError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RemapError::IoError(_) | RemapError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// One-line diagnostic printed to stdout before the process exits.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RemapError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RemapError::ParseError {
                payload: Payload::Request,
                ..
            } => "Check that the request file is a JSON object with destination, shipping_type and detail",
            RemapError::ParseError {
                payload: Payload::Mapping,
                ..
            } => "Check that the mapping file is a JSON array of ClaUbicacion/ClaSapUbicacion/Descripcion objects",
            RemapError::ValidationError { .. } => "Fix the input data and run again",
            RemapError::IoError(_) => "Make sure the input paths exist and are readable",
            RemapError::SerializationError(_) => "Report this as a bug",
            RemapError::ConfigError { .. } | RemapError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RemapError>;
