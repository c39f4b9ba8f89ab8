use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_core::ProductId;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Balances are derived state: read-only over HTTP, mutated only by the
/// movement cascade.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_balances))
        .route("/:product_id", get(get_balance))
}

pub async fn list_balances(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.warehouse().list_balances() {
        Ok(balances) => {
            let items = balances.iter().map(dto::balance_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    Path(product_id): Path<String>,
) -> axum::response::Response {
    let product: ProductId = match common::parse_id(&product_id, "product") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.warehouse().current_balance(product) {
        Ok(Some(quantity)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "product_id": product.to_string(),
                "quantity": quantity,
            })),
        )
            .into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "no balance recorded for this product",
        ),
        Err(e) => errors::service_error_to_response(e),
    }
}
