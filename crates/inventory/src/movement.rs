use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{MovementId, ProductId, UnitId, ValidationError, ValidationResult};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Stock-increasing movement ("Kirdi").
    Inbound,
    /// Stock-decreasing movement ("Chiqdi").
    Outbound,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "inbound",
            MovementKind::Outbound => "outbound",
        }
    }
}

/// A recorded movement. Immutable once persisted; the timestamp is assigned
/// at creation and is not user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    /// Nullable: becomes `None` if the product is administratively deleted.
    pub product: Option<ProductId>,
    pub quantity: u32,
    pub unit: Option<UnitId>,
    pub recorded_at: DateTime<Utc>,
    pub kind: MovementKind,
}

/// Unvalidated movement intake, as submitted by the presentation layer.
///
/// `product` and `unit` are optional here because the intake form allows them
/// to be omitted; validation turns absence into a field-scoped error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementDraft {
    pub product: Option<ProductId>,
    pub quantity: u32,
    pub unit: Option<UnitId>,
    pub kind: MovementKind,
}

/// Snapshot of the stock state the validation sequence reads, captured by the
/// storage layer inside the same transaction that will perform the writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockSnapshot {
    /// Current balance quantity, if a balance row exists for the product.
    pub balance: Option<u32>,
    /// Unit of the most recent `Inbound` ledger entry for the product.
    pub last_inbound_unit: Option<UnitId>,
    /// Running quantity of the most recent ledger entry for the product,
    /// regardless of unit (the ledger is global per product).
    pub prior_running: Option<u32>,
}

/// A fully validated movement with its computed post-movement quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMovement {
    pub product: ProductId,
    pub quantity: u32,
    pub unit: UnitId,
    pub kind: MovementKind,
    /// Running quantity after applying this movement.
    pub new_running: u32,
}

/// Run the full validation sequence over an intake draft and compute the new
/// running quantity. No writes happen here; a returned error means the store
/// must persist nothing.
pub fn plan_movement(
    draft: &MovementDraft,
    snapshot: &StockSnapshot,
) -> ValidationResult<PlannedMovement> {
    let product = draft
        .product
        .ok_or(ValidationError::missing_field("product"))?;
    let unit = draft.unit.ok_or(ValidationError::missing_field("unit"))?;

    if draft.quantity == 0 {
        return Err(ValidationError::InvalidQuantity);
    }

    if draft.kind == MovementKind::Outbound {
        let balance = snapshot.balance.ok_or(ValidationError::ProductNotInStock)?;
        if draft.quantity > balance {
            return Err(ValidationError::InsufficientStock);
        }
        if let Some(last_inbound) = snapshot.last_inbound_unit {
            if last_inbound != unit {
                return Err(ValidationError::UnitMismatch);
            }
        }
    }

    let prior = snapshot.prior_running.unwrap_or(0);
    let new_running = match draft.kind {
        MovementKind::Inbound => prior
            .checked_add(draft.quantity)
            .ok_or(ValidationError::InvalidQuantity)?,
        // The ledger-wide prior is not unit-scoped and can disagree with the
        // balance row in pathological histories, so the subtraction is checked
        // again here even though the balance was already verified.
        MovementKind::Outbound => prior
            .checked_sub(draft.quantity)
            .ok_or(ValidationError::InsufficientStock)?,
    };

    Ok(PlannedMovement {
        product,
        quantity: draft.quantity,
        unit,
        kind: draft.kind,
        new_running,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(quantity: u32, kind: MovementKind) -> MovementDraft {
        MovementDraft {
            product: Some(ProductId::new()),
            quantity,
            unit: Some(UnitId::new()),
            kind,
        }
    }

    #[test]
    fn missing_product_is_rejected_first() {
        let mut d = draft(0, MovementKind::Outbound);
        d.product = None;
        d.unit = None;
        let err = plan_movement(&d, &StockSnapshot::default()).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("product"));
    }

    #[test]
    fn missing_unit_is_rejected_before_quantity() {
        let mut d = draft(0, MovementKind::Inbound);
        d.unit = None;
        let err = plan_movement(&d, &StockSnapshot::default()).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("unit"));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let d = draft(0, MovementKind::Inbound);
        let err = plan_movement(&d, &StockSnapshot::default()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);
    }

    #[test]
    fn first_inbound_starts_from_zero() {
        let d = draft(10, MovementKind::Inbound);
        let planned = plan_movement(&d, &StockSnapshot::default()).unwrap();
        assert_eq!(planned.new_running, 10);
    }

    #[test]
    fn inbound_accepts_any_unit() {
        // A different unit than the last inbound is fine for inbound movement.
        let d = draft(5, MovementKind::Inbound);
        let snapshot = StockSnapshot {
            balance: Some(10),
            last_inbound_unit: Some(UnitId::new()),
            prior_running: Some(10),
        };
        let planned = plan_movement(&d, &snapshot).unwrap();
        assert_eq!(planned.new_running, 15);
    }

    #[test]
    fn outbound_without_balance_row_is_not_in_stock() {
        let d = draft(1, MovementKind::Outbound);
        let err = plan_movement(&d, &StockSnapshot::default()).unwrap_err();
        assert_eq!(err, ValidationError::ProductNotInStock);
    }

    #[test]
    fn outbound_exceeding_balance_is_insufficient() {
        let d = draft(15, MovementKind::Outbound);
        let snapshot = StockSnapshot {
            balance: Some(10),
            last_inbound_unit: Some(d.unit.unwrap()),
            prior_running: Some(10),
        };
        let err = plan_movement(&d, &snapshot).unwrap_err();
        assert_eq!(err, ValidationError::InsufficientStock);
    }

    #[test]
    fn outbound_with_foreign_unit_is_a_mismatch() {
        let d = draft(5, MovementKind::Outbound);
        let snapshot = StockSnapshot {
            balance: Some(10),
            last_inbound_unit: Some(UnitId::new()),
            prior_running: Some(10),
        };
        let err = plan_movement(&d, &snapshot).unwrap_err();
        assert_eq!(err, ValidationError::UnitMismatch);
    }

    #[test]
    fn outbound_reduces_running_quantity() {
        let d = draft(5, MovementKind::Outbound);
        let snapshot = StockSnapshot {
            balance: Some(10),
            last_inbound_unit: Some(d.unit.unwrap()),
            prior_running: Some(10),
        };
        let planned = plan_movement(&d, &snapshot).unwrap();
        assert_eq!(planned.new_running, 5);
    }

    #[test]
    fn desynchronized_prior_still_cannot_go_negative() {
        // Balance says 10 but the ledger head says 3: the checked subtraction
        // still refuses to produce a negative running quantity.
        let d = draft(5, MovementKind::Outbound);
        let snapshot = StockSnapshot {
            balance: Some(10),
            last_inbound_unit: Some(d.unit.unwrap()),
            prior_running: Some(3),
        };
        let err = plan_movement(&d, &snapshot).unwrap_err();
        assert_eq!(err, ValidationError::InsufficientStock);
    }

    #[test]
    fn inbound_overflow_is_rejected() {
        let d = draft(2, MovementKind::Inbound);
        let snapshot = StockSnapshot {
            balance: Some(u32::MAX),
            last_inbound_unit: None,
            prior_running: Some(u32::MAX),
        };
        let err = plan_movement(&d, &snapshot).unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);
    }
}
