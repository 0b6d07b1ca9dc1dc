//! Common error types for biomarker classification

use thiserror::Error;

/// Common result type for classifier operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the classifier
///
/// The first three variants are caller contract violations. They are never
/// converted into a default category.
#[derive(Error, Debug)]
pub enum Error {
    /// Biomarker identifier not present in the static definition set
    #[error("Unknown biomarker: {0}")]
    UnknownBiomarker(String),

    /// A sex-dependent biomarker was requested without the sex of the subject
    #[error("Missing required context for {biomarker}: {context}")]
    MissingRequiredContext {
        biomarker: &'static str,
        context: &'static str,
    },

    /// Value is NaN, infinite or outside the accepted domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f64 },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Health-data payload could not be decoded
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_value(field: impl Into<String>, value: f64) -> Self {
        Error::InvalidValue {
            field: field.into(),
            value,
        }
    }
}
