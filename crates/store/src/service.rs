use chrono::{DateTime, Utc};
use thiserror::Error;

use stockroom_catalog::{Product, UnitOfMeasure};
use stockroom_core::{LedgerEntryId, MovementId, ProductId, UnitId, ValidationError};
use stockroom_inventory::{
    plan_movement, Balance, LedgerEntry, Movement, MovementDraft, MovementKind, StockSnapshot,
};

use crate::memory::{InMemoryWarehouse, StoreError, WarehouseState};

/// Error surfaced by the service layer: either a business-rule rejection or
/// an opaque storage failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Query filter for the ledger listing. Ordering is fixed: timestamp
/// descending, sequence descending as tiebreak.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerFilter {
    pub kind: Option<MovementKind>,
    pub product: Option<ProductId>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
    pub offset: usize,
}

/// The operation set the presentation layer invokes.
///
/// Each write method takes the store's write lock once, runs the full
/// validation sequence against the locked state, and only then mutates — so
/// every operation is a single all-or-nothing transaction and concurrent
/// writers are serialized.
#[derive(Debug, Default)]
pub struct WarehouseService {
    store: InMemoryWarehouse,
}

impl WarehouseService {
    pub fn new() -> Self {
        Self {
            store: InMemoryWarehouse::new(),
        }
    }

    // -------------------------
    // Registries
    // -------------------------

    /// Create a product, or rename an existing one when `id` is given.
    pub fn create_or_update_product(
        &self,
        id: Option<ProductId>,
        name: &str,
    ) -> Result<Product, ServiceError> {
        let mut state = self.store.write()?;

        if let Some(id) = id {
            if !state.products.iter().any(|p| p.id == id) {
                return Err(ValidationError::not_found("product").into());
            }
        }

        let product = Product::create_or_update(id, name, &state.products)?;
        upsert_product(&mut state, product.clone());
        tracing::debug!(product = %product.id, name = %product.name, "product registered");
        Ok(product)
    }

    /// Create a unit of measure, or rename an existing one when `id` is given.
    pub fn create_or_update_unit(
        &self,
        id: Option<UnitId>,
        name: &str,
    ) -> Result<UnitOfMeasure, ServiceError> {
        let mut state = self.store.write()?;

        if let Some(id) = id {
            if !state.units.iter().any(|u| u.id == id) {
                return Err(ValidationError::not_found("unit").into());
            }
        }

        let unit = UnitOfMeasure::create_or_update(id, name, &state.units)?;
        upsert_unit(&mut state, unit.clone());
        tracing::debug!(unit = %unit.id, name = %unit.name, "unit registered");
        Ok(unit)
    }

    /// Administrative delete. References held by balances, ledger entries,
    /// and movements are set to null; the rows themselves stay.
    pub fn delete_product(&self, id: ProductId) -> Result<(), ServiceError> {
        let mut state = self.store.write()?;

        let Some(pos) = state.products.iter().position(|p| p.id == id) else {
            return Err(ValidationError::not_found("product").into());
        };
        state.products.remove(pos);

        for balance in state.balances.iter_mut() {
            if balance.product == Some(id) {
                balance.product = None;
            }
        }
        for entry in state.ledger.iter_mut() {
            if entry.product == Some(id) {
                entry.product = None;
            }
        }
        for movement in state.movements.iter_mut() {
            if movement.product == Some(id) {
                movement.product = None;
            }
        }

        tracing::info!(product = %id, "product deleted, references nulled");
        Ok(())
    }

    /// Administrative delete with the same set-null semantics as
    /// [`Self::delete_product`].
    pub fn delete_unit(&self, id: UnitId) -> Result<(), ServiceError> {
        let mut state = self.store.write()?;

        let Some(pos) = state.units.iter().position(|u| u.id == id) else {
            return Err(ValidationError::not_found("unit").into());
        };
        state.units.remove(pos);

        for balance in state.balances.iter_mut() {
            if balance.unit == Some(id) {
                balance.unit = None;
            }
        }
        for entry in state.ledger.iter_mut() {
            if entry.unit == Some(id) {
                entry.unit = None;
            }
        }
        for movement in state.movements.iter_mut() {
            if movement.unit == Some(id) {
                movement.unit = None;
            }
        }

        tracing::info!(unit = %id, "unit deleted, references nulled");
        Ok(())
    }

    // -------------------------
    // Movement intake + cascade
    // -------------------------

    /// Validate and record a movement, then cascade: append the ledger entry
    /// carrying the recomputed running quantity and upsert the balance to the
    /// same quantity. Returns the appended ledger entry.
    ///
    /// All reads and writes happen under one write guard; a rejection leaves
    /// no rows behind.
    pub fn record_movement(
        &self,
        draft: MovementDraft,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<LedgerEntry, ServiceError> {
        let mut state = self.store.write()?;

        let snapshot = match draft.product {
            Some(product) => snapshot_for(&state, product),
            None => StockSnapshot::default(),
        };
        let planned = plan_movement(&draft, &snapshot)?;

        // Referential integrity: both ids must point at live registry rows.
        if !state.products.iter().any(|p| p.id == planned.product) {
            return Err(ValidationError::not_found("product").into());
        }
        if !state.units.iter().any(|u| u.id == planned.unit) {
            return Err(ValidationError::not_found("unit").into());
        }

        let recorded_at = timestamp.unwrap_or_else(Utc::now);

        // Validation is complete; the three writes below form the cascade.
        state.movements.push(Movement {
            id: MovementId::new(),
            product: Some(planned.product),
            quantity: planned.quantity,
            unit: Some(planned.unit),
            recorded_at,
            kind: planned.kind,
        });

        let sequence = state.take_sequence();
        let entry = LedgerEntry {
            id: LedgerEntryId::new(),
            sequence,
            product: Some(planned.product),
            delta: planned.quantity,
            unit: Some(planned.unit),
            running: planned.new_running,
            recorded_at,
            kind: planned.kind,
        };
        state.ledger.push(entry.clone());

        match state
            .balances
            .iter_mut()
            .find(|b| b.product == Some(planned.product))
        {
            Some(balance) => {
                balance.quantity = planned.new_running;
                balance.unit = Some(planned.unit);
            }
            None => state.balances.push(Balance {
                product: Some(planned.product),
                quantity: planned.new_running,
                unit: Some(planned.unit),
            }),
        }

        tracing::info!(
            product = %planned.product,
            kind = planned.kind.as_str(),
            quantity = planned.quantity,
            running = planned.new_running,
            "movement recorded"
        );
        Ok(entry)
    }

    // -------------------------
    // Reads
    // -------------------------

    /// Current on-hand quantity, or `None` while no balance row exists.
    pub fn current_balance(&self, product: ProductId) -> Result<Option<u32>, ServiceError> {
        let state = self.store.read()?;
        Ok(state
            .balances
            .iter()
            .find(|b| b.product == Some(product))
            .map(|b| b.quantity))
    }

    pub fn get_product(&self, id: ProductId) -> Result<Option<Product>, ServiceError> {
        let state = self.store.read()?;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    pub fn get_unit(&self, id: UnitId) -> Result<Option<UnitOfMeasure>, ServiceError> {
        let state = self.store.read()?;
        Ok(state.units.iter().find(|u| u.id == id).cloned())
    }

    /// Products, most recently registered first.
    pub fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        let state = self.store.read()?;
        Ok(state.products.iter().rev().cloned().collect())
    }

    /// Units, most recently registered first.
    pub fn list_units(&self) -> Result<Vec<UnitOfMeasure>, ServiceError> {
        let state = self.store.read()?;
        Ok(state.units.iter().rev().cloned().collect())
    }

    pub fn list_balances(&self) -> Result<Vec<Balance>, ServiceError> {
        let state = self.store.read()?;
        Ok(state.balances.iter().rev().cloned().collect())
    }

    /// Movements, newest first.
    pub fn list_movements(&self) -> Result<Vec<Movement>, ServiceError> {
        let state = self.store.read()?;
        let mut movements: Vec<Movement> = state.movements.clone();
        movements.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(movements)
    }

    /// Ledger entries matching `filter`, timestamp descending (sequence
    /// descending breaks timestamp ties).
    pub fn list_ledger(&self, filter: &LedgerFilter) -> Result<Vec<LedgerEntry>, ServiceError> {
        let state = self.store.read()?;

        let mut entries: Vec<LedgerEntry> = state
            .ledger
            .iter()
            .filter(|e| filter.kind.is_none_or(|k| e.kind == k))
            .filter(|e| filter.product.is_none_or(|p| e.product == Some(p)))
            .filter(|e| filter.from.is_none_or(|from| e.recorded_at >= from))
            .filter(|e| filter.to.is_none_or(|to| e.recorded_at <= to))
            .cloned()
            .collect();

        entries.sort_by(|a, b| {
            b.recorded_at
                .cmp(&a.recorded_at)
                .then(b.sequence.cmp(&a.sequence))
        });

        let entries = entries
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(entries)
    }
}

fn snapshot_for(state: &WarehouseState, product: ProductId) -> StockSnapshot {
    StockSnapshot {
        balance: state
            .balances
            .iter()
            .find(|b| b.product == Some(product))
            .map(|b| b.quantity),
        last_inbound_unit: state
            .ledger
            .iter()
            .rev()
            .find(|e| e.product == Some(product) && e.kind == MovementKind::Inbound)
            .and_then(|e| e.unit),
        prior_running: state
            .ledger
            .iter()
            .rev()
            .find(|e| e.product == Some(product))
            .map(|e| e.running),
    }
}

fn upsert_product(state: &mut WarehouseState, product: Product) {
    match state.products.iter_mut().find(|p| p.id == product.id) {
        Some(existing) => *existing = product,
        None => state.products.push(product),
    }
}

fn upsert_unit(state: &mut WarehouseState, unit: UnitOfMeasure) {
    match state.units.iter_mut().find(|u| u.id == unit.id) {
        Some(existing) => *existing = unit,
        None => state.units.push(unit),
    }
}
