//! Shared types for the tax request workspace.

mod types;

pub use types::RecordId;
