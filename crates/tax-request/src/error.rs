//! Tax request error types.

use thiserror::Error;

/// Errors that can occur while configuring the tax request builder.
///
/// Payload generation itself never fails; missing order data shows up as
/// empty sections or null fields in the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxRequestError {
    /// The document type name is not one the tax service accepts.
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    /// A configuration value is present but unusable.
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
}

/// Convenience type alias for tax request results.
pub type Result<T> = std::result::Result<T, TaxRequestError>;
