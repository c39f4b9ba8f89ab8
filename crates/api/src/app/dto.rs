use serde::Deserialize;
use serde_json::json;

use chrono::{DateTime, Utc};
use stockroom_catalog::{Product, UnitOfMeasure};
use stockroom_inventory::{Balance, LedgerEntry, Movement};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordMovementRequest {
    pub product_id: Option<String>,
    pub quantity: u32,
    pub unit_id: Option<String>,
    pub kind: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct LedgerQuery {
    pub kind: Option<String>,
    pub product_id: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id.to_string(),
        "name": product.name.as_str(),
    })
}

pub fn unit_to_json(unit: &UnitOfMeasure) -> serde_json::Value {
    json!({
        "id": unit.id.to_string(),
        "name": unit.name.as_str(),
    })
}

pub fn balance_to_json(balance: &Balance) -> serde_json::Value {
    json!({
        "product_id": balance.product.map(|p| p.to_string()),
        "quantity": balance.quantity,
        "unit_id": balance.unit.map(|u| u.to_string()),
    })
}

pub fn ledger_entry_to_json(entry: &LedgerEntry) -> serde_json::Value {
    json!({
        "id": entry.id.to_string(),
        "sequence": entry.sequence,
        "product_id": entry.product.map(|p| p.to_string()),
        "delta": entry.delta,
        "unit_id": entry.unit.map(|u| u.to_string()),
        "running": entry.running,
        "recorded_at": entry.recorded_at.to_rfc3339(),
        "kind": entry.kind.as_str(),
    })
}

pub fn movement_to_json(movement: &Movement) -> serde_json::Value {
    json!({
        "id": movement.id.to_string(),
        "product_id": movement.product.map(|p| p.to_string()),
        "quantity": movement.quantity,
        "unit_id": movement.unit.map(|u| u.to_string()),
        "recorded_at": movement.recorded_at.to_rfc3339(),
        "kind": movement.kind.as_str(),
    })
}
