//! Transaction document types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxRequestError;

/// The kind of transaction document the tax service records.
///
/// Order documents are estimates that the service discards; invoice documents
/// are persisted and can later be committed or voided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentType {
    /// Estimate for a sale, used while the customer is checking out.
    #[default]
    SalesOrder,

    /// Recorded sale.
    SalesInvoice,

    /// Estimate for a refund.
    ReturnOrder,

    /// Recorded refund.
    ReturnInvoice,

    /// Estimate for a purchase from a vendor.
    PurchaseOrder,

    /// Recorded purchase from a vendor.
    PurchaseInvoice,
}

impl DocumentType {
    /// Returns true if the service persists documents of this type.
    pub fn is_invoice(&self) -> bool {
        matches!(
            self,
            DocumentType::SalesInvoice | DocumentType::ReturnInvoice | DocumentType::PurchaseInvoice
        )
    }

    /// Returns the name the tax service uses for this document type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::SalesOrder => "SalesOrder",
            DocumentType::SalesInvoice => "SalesInvoice",
            DocumentType::ReturnOrder => "ReturnOrder",
            DocumentType::ReturnInvoice => "ReturnInvoice",
            DocumentType::PurchaseOrder => "PurchaseOrder",
            DocumentType::PurchaseInvoice => "PurchaseInvoice",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = TaxRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SalesOrder" => Ok(DocumentType::SalesOrder),
            "SalesInvoice" => Ok(DocumentType::SalesInvoice),
            "ReturnOrder" => Ok(DocumentType::ReturnOrder),
            "ReturnInvoice" => Ok(DocumentType::ReturnInvoice),
            "PurchaseOrder" => Ok(DocumentType::PurchaseOrder),
            "PurchaseInvoice" => Ok(DocumentType::PurchaseInvoice),
            other => Err(TaxRequestError::UnknownDocumentType(other.to_string())),
        }
    }
}
