// --- File: crates/mentorlink_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Mentorlink errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for MentorlinkError.
#[derive(Error, Debug)]
pub enum MentorlinkError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during a storage operation
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for MentorlinkError {
    fn status_code(&self) -> u16 {
        match self {
            MentorlinkError::ParseError(_) => 400,
            MentorlinkError::ConfigError(_) => 500,
            MentorlinkError::ValidationError(_) => 400,
            MentorlinkError::StorageError(_) => 500,
            MentorlinkError::ExternalServiceError { .. } => 502,
            MentorlinkError::ConflictError(_) => 409,
            MentorlinkError::NotFoundError(_) => 404,
            MentorlinkError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, MentorlinkError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, MentorlinkError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| MentorlinkError::InternalError(format!("{}: {}", context, error)))
    }
}

// Common error conversions
impl From<serde_json::Error> for MentorlinkError {
    fn from(err: serde_json::Error) -> Self {
        MentorlinkError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for MentorlinkError {
    fn from(err: std::io::Error) -> Self {
        MentorlinkError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> MentorlinkError {
    MentorlinkError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> MentorlinkError {
    MentorlinkError::NotFoundError(message.to_string())
}

pub fn storage_error<T: fmt::Display>(message: T) -> MentorlinkError {
    MentorlinkError::StorageError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> MentorlinkError {
    MentorlinkError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> MentorlinkError {
    MentorlinkError::InternalError(message.to_string())
}
