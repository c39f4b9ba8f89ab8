use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::admin;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Admin panel metadata (static presentation configuration).
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "site_header": admin::SITE_HEADER,
        "site_title": admin::SITE_TITLE,
        "index_title": admin::INDEX_TITLE,
        "list_per_page": admin::LIST_PER_PAGE,
    }))
}
