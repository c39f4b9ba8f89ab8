//! Storage and application services for the warehouse.
//!
//! `memory` holds the four relational tables behind a single lock; `service`
//! exposes the explicit transactional operation set the presentation layer
//! calls. The movement cascade ("validate, then write movement + ledger entry
//! + balance") lives in [`service::WarehouseService::record_movement`] as one
//! all-or-nothing unit of work.

pub mod memory;
pub mod service;

pub use memory::{InMemoryWarehouse, StoreError};
pub use service::{LedgerFilter, ServiceError, WarehouseService};
