//! Shared response envelope types for API handlers.
//!
//! All success responses use a `{ "data": ... }` envelope. The envelope
//! is an immutable value constructed per call, never a reused field, so
//! no response state can leak across requests.

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
