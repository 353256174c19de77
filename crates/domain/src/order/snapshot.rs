//! Read-only order view and its owned snapshot implementation.

use chrono::{DateTime, Utc};
use common::RecordId;
use serde::{Deserialize, Serialize};

use super::{Adjustable, Address, Adjustment, LineItem, Money, Shipment};

/// Read-only view of an order, as needed to build a tax request.
///
/// Hosts implement this over their own order records, or convert into an
/// [`OrderSnapshot`] which implements it already.
pub trait TaxableOrder {
    /// Human-readable order number, e.g. `"R123456789"`.
    fn number(&self) -> &str;

    /// When the order completed checkout, if it has.
    fn completed_at(&self) -> Option<DateTime<Utc>>;

    /// Returns true once the order has completed checkout.
    fn is_completed(&self) -> bool {
        self.completed_at().is_some()
    }

    /// ISO 4217 currency code.
    fn currency(&self) -> &str;

    /// Code identifying the customer to the tax service.
    fn customer_code(&self) -> String;

    /// Entity/use code for exempt customers.
    fn customer_usage_type(&self) -> Option<&str>;

    /// Tax exemption certificate number.
    fn exemption_number(&self) -> Option<&str>;

    /// VAT registration id.
    fn business_identification_no(&self) -> Option<&str>;

    /// Every adjustment on the order, including those on line items and shipments.
    fn all_adjustments(&self) -> &[Adjustment];

    /// Line items in display order.
    fn line_items(&self) -> &[LineItem];

    /// Shipments in creation order.
    fn shipments(&self) -> &[Shipment];

    /// Sum of the eligible promotions attached to `shipment` (zero or negative).
    fn shipment_promo_total(&self, shipment: &Shipment) -> Money {
        let target = Adjustable::Shipment(shipment.id);
        self.all_adjustments()
            .iter()
            .filter(|adj| adj.is_eligible_promotion() && adj.adjustable == target)
            .map(|adj| adj.amount)
            .sum()
    }

    /// Shipping cost after the shipment's own promotions.
    fn shipment_amount(&self, shipment: &Shipment) -> Money {
        shipment.cost + self.shipment_promo_total(shipment)
    }

    fn bill_address(&self) -> Option<&Address>;

    fn ship_address(&self) -> Option<&Address>;

    /// Address of the stock location the order ships from.
    fn stock_location(&self) -> Option<&Address>;
}

/// The customer who placed an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Account id, absent for guest checkouts.
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub entity_use_code: Option<String>,
    #[serde(default)]
    pub exemption_number: Option<String>,
    #[serde(default)]
    pub vat_id: Option<String>,
}

impl Customer {
    /// A registered customer.
    pub fn registered(user_id: u64, email: impl Into<String>) -> Self {
        Self {
            user_id: Some(RecordId::new(user_id)),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// A guest checkout identified only by email.
    pub fn guest(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Returns the user id for registered customers, the email for guests.
    pub fn code(&self) -> String {
        match (self.user_id, &self.email) {
            (Some(id), _) => id.to_string(),
            (None, Some(email)) => email.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Owned snapshot of a host order.
///
/// Built once per request from live order state (or deserialized from the
/// host's JSON export) and never mutated by the tax request builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub number: String,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub currency: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub bill_address: Option<Address>,
    #[serde(default)]
    pub ship_address: Option<Address>,
    #[serde(default)]
    pub stock_location: Option<Address>,
}

impl OrderSnapshot {
    /// Creates an empty, incomplete order.
    pub fn new(number: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            currency: currency.into(),
            ..Self::default()
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn with_shipment(mut self, shipment: Shipment) -> Self {
        self.shipments.push(shipment);
        self
    }

    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    /// Sets both the billing and shipping address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.bill_address = Some(address.clone());
        self.ship_address = Some(address);
        self
    }

    pub fn with_stock_location(mut self, location: Address) -> Self {
        self.stock_location = Some(location);
        self
    }

    pub fn completed(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }
}

impl TaxableOrder for OrderSnapshot {
    fn number(&self) -> &str {
        &self.number
    }

    fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn customer_code(&self) -> String {
        self.customer.code()
    }

    fn customer_usage_type(&self) -> Option<&str> {
        self.customer.entity_use_code.as_deref()
    }

    fn exemption_number(&self) -> Option<&str> {
        self.customer.exemption_number.as_deref()
    }

    fn business_identification_no(&self) -> Option<&str> {
        self.customer.vat_id.as_deref()
    }

    fn all_adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    fn bill_address(&self) -> Option<&Address> {
        self.bill_address.as_ref()
    }

    fn ship_address(&self) -> Option<&Address> {
        self.ship_address.as_ref()
    }

    fn stock_location(&self) -> Option<&Address> {
        self.stock_location.as_ref()
    }
}
