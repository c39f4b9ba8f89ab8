//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: application service wiring (warehouse store + service)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses
//! - `admin.rs`: static admin-panel presentation configuration

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod admin;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::AppServices::build());

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/", get(routes::system::index))
        .merge(routes::router())
        .layer(Extension(services))
}
