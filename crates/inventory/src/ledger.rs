use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{LedgerEntryId, ProductId, UnitId};

use crate::movement::MovementKind;

/// One append-only balance snapshot, written as the side effect of a recorded
/// movement. Never mutated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: LedgerEntryId,
    /// Store-assigned, strictly increasing across all entries. Used as the
    /// ordering tiebreak when two entries carry the same timestamp.
    pub sequence: u64,
    /// Nullable: becomes `None` if the product is administratively deleted.
    pub product: Option<ProductId>,
    /// Quantity delta of the movement that produced this entry.
    pub delta: u32,
    pub unit: Option<UnitId>,
    /// Running quantity after the movement.
    pub running: u32,
    pub recorded_at: DateTime<Utc>,
    pub kind: MovementKind,
}

/// Current on-hand quantity for one product. At most one per product; absent
/// until the first movement. Mutated only by the movement cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub product: Option<ProductId>,
    pub quantity: u32,
    pub unit: Option<UnitId>,
}

/// Check the running-quantity chain of a product's ledger, oldest first:
/// every entry's running quantity must equal the previous entry's running
/// quantity plus/minus that entry's delta.
pub fn chain_is_consistent(entries: &[LedgerEntry]) -> bool {
    let mut prior: u32 = 0;
    for entry in entries {
        let expected = match entry.kind {
            MovementKind::Inbound => prior.checked_add(entry.delta),
            MovementKind::Outbound => prior.checked_sub(entry.delta),
        };
        if expected != Some(entry.running) {
            return false;
        }
        prior = entry.running;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::movement::{plan_movement, MovementDraft, StockSnapshot};

    fn entry(sequence: u64, delta: u32, running: u32, kind: MovementKind) -> LedgerEntry {
        LedgerEntry {
            id: LedgerEntryId::new(),
            sequence,
            product: Some(ProductId::new()),
            delta,
            unit: Some(UnitId::new()),
            running,
            recorded_at: Utc::now(),
            kind,
        }
    }

    #[test]
    fn consistent_chain_is_accepted() {
        let entries = vec![
            entry(1, 10, 10, MovementKind::Inbound),
            entry(2, 5, 5, MovementKind::Outbound),
            entry(3, 7, 12, MovementKind::Inbound),
        ];
        assert!(chain_is_consistent(&entries));
    }

    #[test]
    fn broken_chain_is_rejected() {
        let entries = vec![
            entry(1, 10, 10, MovementKind::Inbound),
            entry(2, 5, 6, MovementKind::Outbound),
        ];
        assert!(!chain_is_consistent(&entries));
    }

    #[test]
    fn empty_chain_is_consistent() {
        assert!(chain_is_consistent(&[]));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: any sequence of movements accepted by the planner yields
        /// a consistent ledger chain whose head equals the balance, and the
        /// balance never goes negative (it cannot, by type, but the planner
        /// must also never accept an overdraw).
        #[test]
        fn accepted_movements_keep_ledger_and_balance_in_sync(
            ops in prop::collection::vec((any::<bool>(), 1u32..100), 1..50)
        ) {
            let product = ProductId::new();
            let unit = UnitId::new();

            let mut entries: Vec<LedgerEntry> = Vec::new();
            let mut balance: Option<u32> = None;
            let mut last_inbound_unit: Option<UnitId> = None;
            let mut sequence: u64 = 0;

            for (inbound, quantity) in ops {
                let kind = if inbound { MovementKind::Inbound } else { MovementKind::Outbound };
                let draft = MovementDraft {
                    product: Some(product),
                    quantity,
                    unit: Some(unit),
                    kind,
                };
                let snapshot = StockSnapshot {
                    balance,
                    last_inbound_unit,
                    prior_running: entries.last().map(|e| e.running),
                };

                match plan_movement(&draft, &snapshot) {
                    Ok(planned) => {
                        sequence += 1;
                        entries.push(LedgerEntry {
                            id: LedgerEntryId::new(),
                            sequence,
                            product: Some(product),
                            delta: planned.quantity,
                            unit: Some(planned.unit),
                            running: planned.new_running,
                            recorded_at: Utc::now(),
                            kind: planned.kind,
                        });
                        balance = Some(planned.new_running);
                        if kind == MovementKind::Inbound {
                            last_inbound_unit = Some(unit);
                        }
                    }
                    Err(_) => {
                        // Rejections must leave everything untouched; nothing
                        // to assert here beyond not mutating state.
                    }
                }
            }

            prop_assert!(chain_is_consistent(&entries));
            if let Some(head) = entries.last() {
                prop_assert_eq!(balance, Some(head.running));
            } else {
                prop_assert_eq!(balance, None);
            }
        }
    }
}
