//! Order snapshot and related value objects.

mod adjustment;
mod items;
mod snapshot;
mod value_objects;

pub use adjustment::{Adjustable, Adjustment, AdjustmentSource};
pub use items::{LineItem, Shipment};
pub use snapshot::{Customer, OrderSnapshot, TaxableOrder};
pub use value_objects::{Address, Money};
