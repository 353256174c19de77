//! Request configuration loaded from environment variables.

use crate::document::DocumentType;
use crate::error::{Result, TaxRequestError};

/// Tax code sent for line items whose tax category has no code.
pub const DEFAULT_TAX_CODE: &str = "P0000000";

/// Tax code sent for shipping charges.
pub const FREIGHT_TAX_CODE: &str = "FR000000";

/// Description sent for shipping charge lines.
pub const SHIPPING_DESCRIPTION: &str = "Shipping Charge";

/// Builder configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `AVATAX_COMPANY_CODE`: company code registered with the tax service (default: empty)
/// - `AVATAX_DOCUMENT_TYPE`: document type used when a request does not name one (default: `"SalesOrder"`)
/// - `AVATAX_DEFAULT_TAX_CODE`: line item tax code fallback (default: `"P0000000"`)
/// - `AVATAX_FREIGHT_TAX_CODE`: shipping line tax code (default: `"FR000000"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub company_code: String,
    pub default_document_type: DocumentType,
    pub default_tax_code: String,
    pub freight_tax_code: String,
    pub shipping_description: String,
}

impl RequestConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let default_document_type = match lookup("AVATAX_DOCUMENT_TYPE") {
            Some(value) => value
                .parse::<DocumentType>()
                .map_err(|e| TaxRequestError::InvalidConfig {
                    key: "AVATAX_DOCUMENT_TYPE",
                    reason: e.to_string(),
                })?,
            None => defaults.default_document_type,
        };

        let config = Self {
            company_code: lookup("AVATAX_COMPANY_CODE").unwrap_or(defaults.company_code),
            default_document_type,
            default_tax_code: non_blank(&lookup, "AVATAX_DEFAULT_TAX_CODE")?
                .unwrap_or(defaults.default_tax_code),
            freight_tax_code: non_blank(&lookup, "AVATAX_FREIGHT_TAX_CODE")?
                .unwrap_or(defaults.freight_tax_code),
            shipping_description: defaults.shipping_description,
        };

        if config.company_code.is_empty() {
            tracing::warn!("AVATAX_COMPANY_CODE is not set, requests will carry an empty company code");
        }

        Ok(config)
    }

    /// Sets the company code.
    pub fn with_company_code(mut self, company_code: impl Into<String>) -> Self {
        self.company_code = company_code.into();
        self
    }

    /// Returns the requested document type, or the configured default.
    pub fn document_type(&self, requested: Option<DocumentType>) -> DocumentType {
        requested.unwrap_or(self.default_document_type)
    }
}

fn non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<String>> {
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(TaxRequestError::InvalidConfig {
            key,
            reason: "value is blank".to_string(),
        }),
        other => Ok(other),
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            company_code: String::new(),
            default_document_type: DocumentType::SalesOrder,
            default_tax_code: DEFAULT_TAX_CODE.to_string(),
            freight_tax_code: FREIGHT_TAX_CODE.to_string(),
            shipping_description: SHIPPING_DESCRIPTION.to_string(),
        }
    }
}
