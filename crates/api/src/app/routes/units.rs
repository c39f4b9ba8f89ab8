use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_core::UnitId;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_units).post(create_unit))
        .route("/:id", get(get_unit).delete(delete_unit))
}

pub async fn create_unit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterNameRequest>,
) -> axum::response::Response {
    match services.warehouse().create_or_update_unit(None, &body.name) {
        Ok(unit) => (StatusCode::CREATED, Json(dto::unit_to_json(&unit))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_units(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.warehouse().list_units() {
        Ok(units) => {
            let items = units.iter().map(dto::unit_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_unit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: UnitId = match common::parse_id(&id, "unit") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.warehouse().get_unit(id) {
        Ok(Some(unit)) => (StatusCode::OK, Json(dto::unit_to_json(&unit))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "unit not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_unit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: UnitId = match common::parse_id(&id, "unit") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.warehouse().delete_unit(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
