//! Monetary adjustments applied to an order or its parts.

use common::RecordId;
use serde::{Deserialize, Serialize};

use super::Money;

/// What produced an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentSource {
    /// A promotion action (coupon, automatic discount, free shipping).
    Promotion,
    /// A tax rate.
    Tax,
    /// Anything else: manual adjustments, cancellations, returns.
    Other,
}

/// The entity an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Adjustable {
    /// The order as a whole.
    Order,
    /// A single line item.
    LineItem(RecordId),
    /// A single shipment.
    Shipment(RecordId),
}

impl Adjustable {
    /// Returns true if the adjustable is a shipment.
    pub fn is_shipment(&self) -> bool {
        matches!(self, Adjustable::Shipment(_))
    }
}

/// A monetary adjustment as recorded by the host's promotion and tax subsystems.
///
/// Discounts carry negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub amount: Money,

    /// Whether the adjustment's conditions are currently satisfied.
    pub eligible: bool,

    pub source: AdjustmentSource,

    pub adjustable: Adjustable,
}

impl Adjustment {
    /// Creates an eligible promotion adjustment.
    pub fn promotion(adjustable: Adjustable, amount: Money) -> Self {
        Self {
            amount,
            eligible: true,
            source: AdjustmentSource::Promotion,
            adjustable,
        }
    }

    /// Creates an adjustment from a tax rate.
    pub fn tax(adjustable: Adjustable, amount: Money) -> Self {
        Self {
            amount,
            eligible: true,
            source: AdjustmentSource::Tax,
            adjustable,
        }
    }

    /// Marks the adjustment as no longer eligible.
    pub fn ineligible(mut self) -> Self {
        self.eligible = false;
        self
    }

    /// Returns true if the adjustment came from a promotion.
    pub fn is_promotion(&self) -> bool {
        self.source == AdjustmentSource::Promotion
    }

    /// Returns true for eligible promotion adjustments, the only kind that
    /// count as a discount.
    pub fn is_eligible_promotion(&self) -> bool {
        self.eligible && self.is_promotion()
    }
}
