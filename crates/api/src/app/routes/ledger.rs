use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_core::ProductId;
use stockroom_store::LedgerFilter;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{admin, dto, errors};

/// The ledger is append-only history: read-only over HTTP.
pub fn router() -> Router {
    Router::new().route("/", get(list_ledger))
}

pub async fn list_ledger(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::LedgerQuery>,
) -> axum::response::Response {
    let kind = match &query.kind {
        Some(raw) => match errors::parse_movement_kind(raw) {
            Ok(k) => Some(k),
            Err(resp) => return resp,
        },
        None => None,
    };
    let product: Option<ProductId> =
        match common::parse_opt_id(query.product_id.as_deref(), "product") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

    let filter = LedgerFilter {
        kind,
        product,
        from: query.from,
        to: query.to,
        limit: Some(query.limit.unwrap_or(admin::LIST_PER_PAGE)),
        offset: query.offset.unwrap_or(0),
    };

    match services.warehouse().list_ledger(&filter) {
        Ok(entries) => {
            let items = entries
                .iter()
                .map(dto::ledger_entry_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
