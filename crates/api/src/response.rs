//! Shared response envelope types for API handlers.
//!
//! Responses use a `{ "data": ... }` envelope. Use [`DataResponse`] instead
//! of ad-hoc `serde_json::json!({ "data": ... })` to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
