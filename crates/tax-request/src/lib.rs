//! Tax transaction request builder.
//!
//! Turns an order snapshot into the `createTransactionModel` request understood
//! by the tax calculation service. The builder decides two things the host
//! data does not state directly:
//! 1. Which promotions count towards the header discount. Shipping promotions
//!    are already reflected in the shipment amount and are left out.
//! 2. Which date the tax is effective on: the completion date for completed
//!    orders, today otherwise.
//!
//! Transport, credentials and response handling live with the caller.

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod payload;

pub use builder::{RequestOptions, TaxRequestBuilder};
pub use config::RequestConfig;
pub use document::DocumentType;
pub use error::TaxRequestError;
pub use payload::{
    AddressModel, LineAddresses, LineModel, TaxOverride, TaxOverrideType, TaxRequest,
    TransactionModel,
};
