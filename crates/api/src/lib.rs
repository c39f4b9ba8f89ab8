//! HTTP presentation layer for the warehouse service.

pub mod app;
