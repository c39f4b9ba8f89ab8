use core::str::FromStr;

use axum::http::StatusCode;

use crate::app::errors;

/// Parse a path identifier into a typed id, mapping failure to a 400.
pub fn parse_id<T: FromStr>(
    raw: &str,
    field: &'static str,
) -> Result<T, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("invalid {field} id"),
        )
    })
}

/// Parse an optional identifier from a request body or query string.
///
/// `None` stays `None` (absence is handled by domain validation, which turns
/// it into a field-scoped `missing_field` error); a present-but-malformed id
/// is a 400 here.
pub fn parse_opt_id<T: FromStr>(
    raw: Option<&str>,
    field: &'static str,
) -> Result<Option<T>, axum::response::Response> {
    match raw {
        None => Ok(None),
        Some(s) => parse_id(s, field).map(Some),
    }
}
