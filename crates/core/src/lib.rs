//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod name;

pub use error::{ValidationError, ValidationResult};
pub use id::{LedgerEntryId, MovementId, ProductId, UnitId};
pub use name::EntityName;
