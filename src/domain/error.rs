//! Application error types with proper error chaining.

use thiserror::Error;

use super::types::EntityId;

#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(EntityId),
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("malformed request body: {0}")]
    Malformed(String),
    #[error("validation failed: {0}")]
    Multiple(String),
}

impl From<&str> for ValidationError {
    fn from(s: &str) -> Self {
        ValidationError::Malformed(s.to_string())
    }
}

/// A foreign key could not be confirmed against its owning service.
///
/// Covers both a genuinely unknown identifier and an unreachable peer;
/// the two are deliberately indistinguishable to the caller.
#[derive(Error, Debug, Clone)]
pub enum ReferenceError {
    #[error("invalid reference: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for the 404 path.
    #[must_use]
    pub fn not_found(id: EntityId) -> Self {
        AppError::Store(StoreError::NotFound(id))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(ValidationError::Multiple(err.to_string()))
    }
}
