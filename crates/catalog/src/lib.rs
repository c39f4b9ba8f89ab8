//! Reference-data registries (products and units of measure).
//!
//! This crate contains the business rules for reference data, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! storage layer supplies the currently-registered names; the functions here
//! decide whether a write is allowed.

pub mod product;
pub mod unit;

pub use product::Product;
pub use unit::UnitOfMeasure;
