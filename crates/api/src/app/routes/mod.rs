use axum::Router;

pub mod balances;
pub mod common;
pub mod ledger;
pub mod movements;
pub mod products;
pub mod system;
pub mod units;

/// Router for all warehouse endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/units", units::router())
        .nest("/products", products::router())
        .nest("/movements", movements::router())
        .nest("/balances", balances::router())
        .nest("/ledger", ledger::router())
}
