//! Domain error types.

use thiserror::Error;

/// Errors that can occur while reading host order data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A monetary amount could not be parsed.
    #[error("Invalid monetary amount: {0:?}")]
    InvalidAmount(String),
}
