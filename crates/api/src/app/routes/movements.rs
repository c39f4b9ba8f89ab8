use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_core::{ProductId, UnitId};
use stockroom_inventory::MovementDraft;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{admin, dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_movements).post(record_movement))
}

/// Record a movement and run the balance/ledger cascade. The response body is
/// the appended ledger entry.
pub async fn record_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RecordMovementRequest>,
) -> axum::response::Response {
    let kind = match errors::parse_movement_kind(&body.kind) {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let product: Option<ProductId> = match common::parse_opt_id(body.product_id.as_deref(), "product") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let unit: Option<UnitId> = match common::parse_opt_id(body.unit_id.as_deref(), "unit") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let draft = MovementDraft {
        product,
        quantity: body.quantity,
        unit,
        kind,
    };

    // The timestamp is always assigned here, never taken from the request.
    match services.warehouse().record_movement(draft, None) {
        Ok(entry) => {
            (StatusCode::CREATED, Json(dto::ledger_entry_to_json(&entry))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_movements(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.warehouse().list_movements() {
        Ok(movements) => {
            let items = movements
                .iter()
                .take(admin::LIST_PER_PAGE)
                .map(dto::movement_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
