//! Line items and shipments.

use common::RecordId;
use serde::{Deserialize, Serialize};

use super::Money;

/// A purchased variant on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: RecordId,

    /// Stock keeping unit of the purchased variant.
    pub sku: String,

    /// Human-readable product name.
    pub name: String,

    /// Tax classification code from the item's tax category, if it has one.
    #[serde(default)]
    pub tax_code: Option<String>,

    pub quantity: u32,

    /// Price per unit, before promotions.
    pub price: Money,
}

impl LineItem {
    /// Creates a new line item without a tax classification.
    pub fn new(
        id: u64,
        sku: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        price: Money,
    ) -> Self {
        Self {
            id: RecordId::new(id),
            sku: sku.into(),
            name: name.into(),
            tax_code: None,
            quantity,
            price,
        }
    }

    pub fn with_tax_code(mut self, tax_code: impl Into<String>) -> Self {
        self.tax_code = Some(tax_code.into());
        self
    }

    /// Returns the undiscounted amount for this item (quantity * price).
    pub fn amount(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// A shipment of some or all of an order's items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: RecordId,

    /// Name of the selected shipping method.
    pub shipping_method: String,

    /// Shipping cost before promotions. Promotions live in the order's
    /// adjustments, see [`TaxableOrder::shipment_amount`](super::TaxableOrder::shipment_amount).
    pub cost: Money,
}

impl Shipment {
    pub fn new(id: u64, shipping_method: impl Into<String>, cost: Money) -> Self {
        Self {
            id: RecordId::new(id),
            shipping_method: shipping_method.into(),
            cost,
        }
    }
}
