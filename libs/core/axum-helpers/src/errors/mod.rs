//! Structured error responses.

pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body.
///
/// Returned for every error the HTTP layer produces itself, so clients see
/// one consistent shape:
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
