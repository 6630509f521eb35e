//! # UI Error Type
//!
//! Unified error surface for the state layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Maison                                │
//! │                                                                         │
//! │  Frontend                    Rust State Layer                           │
//! │  ────────                    ────────────────                           │
//! │                                                                         │
//! │  dispatch('placeOrder')                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  State Operation                                                 │  │
//! │  │  Result<T, UiError>                                              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── StoreError::Backend("...") ────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Domain Error? ──── CoreError::LastAdmin ──────── UiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The frontend receives { "code": "...", "message": "..." } and maps     │
//! │  the code to a toast or inline form message.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use maison_core::CoreError;
use maison_store::StoreError;

/// Error returned from state-layer operations.
///
/// ## Serialization
/// This is what the frontend receives when an operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes the frontend switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Removing or demoting the last admin
    LastAdmin,

    /// Cart operation failed
    CartError,

    /// Checkout attempted in the wrong stage or with an empty cart
    CheckoutError,

    /// Persistence failed
    StorageError,
}

impl UiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UiError {
            code,
            message: message.into(),
        }
    }

    pub fn checkout(message: impl Into<String>) -> Self {
        UiError::new(ErrorCode::CheckoutError, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        UiError::new(ErrorCode::CartError, message)
    }
}

impl From<CoreError> for UiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => UiError::new(
                ErrorCode::NotFound,
                format!("{} not found: {}", entity, id),
            ),
            CoreError::LastAdmin => UiError::new(
                ErrorCode::LastAdmin,
                "The last admin account cannot be removed or demoted",
            ),
            CoreError::Validation(e) => UiError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl From<StoreError> for UiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => e.into(),
            StoreError::Serialization(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Persisted value corrupt: {}", e);
                UiError::new(ErrorCode::StorageError, "Stored data could not be read")
            }
            StoreError::Backend(e) => {
                tracing::error!("Storage backend failed: {}", e);
                UiError::new(ErrorCode::StorageError, "Saving failed")
            }
        }
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_through() {
        let err: UiError = CoreError::not_found("Product", 42).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("42"));
    }

    #[test]
    fn test_last_admin_maps_to_its_own_code() {
        let err: UiError = StoreError::Domain(CoreError::LastAdmin).into();
        assert_eq!(err.code, ErrorCode::LastAdmin);
    }

    #[test]
    fn test_serialized_shape() {
        let err = UiError::new(ErrorCode::ValidationError, "Name is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Name is required");
    }
}
