use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use stockroom_catalog::{Product, UnitOfMeasure};
use stockroom_inventory::{Balance, LedgerEntry, Movement};

/// Opaque storage-unavailability error. Validation failures never surface
/// here; this is the "infrastructure failure" category only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// The four relational tables.
///
/// `balances` and the reference tables use `Vec` rather than keyed maps
/// because rows survive the deletion of what they reference (the reference is
/// nulled, the row stays).
#[derive(Debug, Default)]
pub struct WarehouseState {
    pub products: Vec<Product>,
    pub units: Vec<UnitOfMeasure>,
    /// At most one row per product.
    pub balances: Vec<Balance>,
    /// Append-only.
    pub ledger: Vec<LedgerEntry>,
    pub movements: Vec<Movement>,
    /// Next ledger sequence number (strictly increasing, starts at 1).
    pub next_sequence: u64,
}

/// In-memory warehouse store.
///
/// All tables sit behind one `RwLock`: a write guard is the transaction.
/// Writers are fully serialized, which is what makes the stock check in the
/// movement cascade safe against concurrent overdraw; readers share access.
/// Intended for a single-process deployment; not optimized for scale.
#[derive(Debug, Default)]
pub struct InMemoryWarehouse {
    state: RwLock<WarehouseState>,
}

impl InMemoryWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the shared read view.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, WarehouseState>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    /// Acquire the exclusive write view (the transaction boundary).
    ///
    /// Callers must finish all validation before mutating anything through
    /// the guard; since the in-memory mutations themselves cannot fail, this
    /// makes every operation all-or-nothing.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, WarehouseState>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl WarehouseState {
    /// Hand out the next ledger sequence number.
    pub fn take_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }
}
