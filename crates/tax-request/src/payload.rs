//! Wire types for the `createTransactionModel` request.
//!
//! Field names and nesting follow the tax service's request schema. Optional
//! values are serialized as explicit `null`s, except `taxOverride` which is
//! omitted entirely when there is nothing to override.

use chrono::NaiveDate;
use domain::Address;
use serde::Serialize;

use crate::document::DocumentType;

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRequest {
    pub create_transaction_model: TransactionModel,
}

impl TaxRequest {
    /// Returns the request as a JSON value, ready to be sent.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Transaction header and its lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionModel {
    /// Order number.
    pub code: String,
    /// Date the tax is effective on.
    pub date: NaiveDate,
    /// Order-level discount, spread by the service across discounted lines.
    pub discount: f64,
    pub commit: bool,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub lines: Vec<LineModel>,
    pub customer_code: String,
    pub company_code: String,
    pub customer_usage_type: Option<String>,
    pub exemption_no: Option<String>,
    pub reference_code: String,
    pub currency_code: String,
    pub business_identification_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_override: Option<TaxOverride>,
}

/// A single taxable line: a line item or a shipping charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineModel {
    /// `"{id}-LI"` for line items, `"{id}-FR"` for shipments.
    pub number: String,
    pub description: String,
    pub tax_code: String,
    pub item_code: String,
    pub quantity: u32,
    pub amount: f64,
    /// Whether the header discount applies to this line.
    pub discounted: bool,
    pub tax_included: bool,
    pub addresses: LineAddresses,
    pub customer_usage_type: Option<String>,
    pub business_identification_no: Option<String>,
    pub exemption_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAddresses {
    pub ship_from: AddressModel,
    pub ship_to: AddressModel,
}

/// Address block as the tax service expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressModel {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl From<&Address> for AddressModel {
    fn from(address: &Address) -> Self {
        Self {
            line1: address.address1.clone(),
            line2: address.address2.clone(),
            city: address.city.clone(),
            region: address.state_code.clone(),
            country: address.country_iso.clone(),
            postal_code: address.zipcode.clone(),
        }
    }
}

impl From<Option<&Address>> for AddressModel {
    fn from(address: Option<&Address>) -> Self {
        address.map(AddressModel::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaxOverrideType {
    /// Calculate tax as of a different date than the document date.
    TaxDate,
}

/// Instructs the service to override part of its calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxOverride {
    #[serde(rename = "type")]
    pub override_type: TaxOverrideType,
    pub reason: String,
    pub tax_date: NaiveDate,
}

impl TaxOverride {
    /// Pins the tax date to the day the order was completed.
    pub fn completed_at(date: NaiveDate) -> Self {
        Self {
            override_type: TaxOverrideType::TaxDate,
            reason: "Completed At".to_string(),
            tax_date: date,
        }
    }
}
