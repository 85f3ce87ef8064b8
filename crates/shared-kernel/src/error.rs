// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BrushFilterError {
    /// Adds human context while keeping the wrapped error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BrushFilterError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, BrushFilterError>;

/// Domain-layer errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid field name: {reason}")]
    InvalidFieldName { reason: String },

    #[error("Invalid range bound '{value}': {reason}")]
    InvalidBound { value: String, reason: String },

    #[error("Invalid filter '{key}': {reason}")]
    InvalidFilter { key: String, reason: String },

    #[error("Timestamp {millis} is outside the representable date range")]
    TimestampOutOfRange { millis: String },

    #[error("Invalid time mode: {mode}")]
    InvalidTimeMode { mode: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Timepicker must be initialized before calling getTimefilter")]
    TimepickerNotInitialized,

    #[error("Failed to update time range: {reason}")]
    TimeRangeUpdateFailed {
        reason: String,
        #[source]
        source: Option<Box<BrushFilterError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document: {details}")]
    SerializationError { format: String, details: String },

    #[error("Time range store is unavailable: {details}")]
    StoreUnavailable { details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors (report rendering and CLI output).
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render {format} report: {details}")]
    RenderFailed { format: String, details: String },

    #[error("Invalid output destination '{path}': {reason}")]
    InvalidOutput { path: PathBuf, reason: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for BrushFilterError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BrushFilterError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for BrushFilterError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<BrushFilterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BrushFilterError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BrushFilterError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
