//! Inventory domain module.
//!
//! This crate contains the business rules for stock movements, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! storage layer captures a [`StockSnapshot`] inside its transaction, asks
//! [`plan_movement`] to validate the intake and compute the new running
//! quantity, and only then writes the movement, ledger entry, and balance.

pub mod ledger;
pub mod movement;

pub use ledger::{Balance, LedgerEntry};
pub use movement::{
    plan_movement, Movement, MovementDraft, MovementKind, PlannedMovement, StockSnapshot,
};
