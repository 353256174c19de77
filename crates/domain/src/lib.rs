//! Order snapshot model read by the tax request builder.
//!
//! This crate provides the read-only view of a host order:
//! - `TaxableOrder` trait with the getters the builder depends on
//! - `OrderSnapshot`, an owned adapter implementing that trait
//! - Value objects for money, addresses, adjustments, line items and shipments

pub mod error;
pub mod order;

pub use error::DomainError;
pub use order::{
    Adjustable, Address, Adjustment, AdjustmentSource, Customer, LineItem, Money, OrderSnapshot,
    Shipment, TaxableOrder,
};
