use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::ValidationError;
use stockroom_inventory::MovementKind;
use stockroom_store::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Validation(v) => {
            let status = match &v {
                ValidationError::NotFound { .. } => StatusCode::NOT_FOUND,
                ValidationError::DuplicateName { .. } => StatusCode::CONFLICT,
                ValidationError::ProductNotInStock
                | ValidationError::InsufficientStock
                | ValidationError::UnitMismatch => StatusCode::UNPROCESSABLE_ENTITY,
                ValidationError::InvalidFormat { .. }
                | ValidationError::MissingField { .. }
                | ValidationError::InvalidQuantity => StatusCode::BAD_REQUEST,
            };
            json_error(status, v.code(), v.to_string())
        }
        ServiceError::Store(e) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "unavailable", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_movement_kind(s: &str) -> Result<MovementKind, axum::response::Response> {
    match s.to_lowercase().as_str() {
        // Uzbek terms accepted for compatibility with the original forms.
        "inbound" | "kirdi" => Ok(MovementKind::Inbound),
        "outbound" | "chiqdi" => Ok(MovementKind::Outbound),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "invalid_movement_kind",
            "kind must be one of: inbound, outbound",
        )),
    }
}
