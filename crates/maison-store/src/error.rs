//! # Store Error Types
//!
//! Error types for persistence-backed store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Domain rejection (CoreError: validation / not-found / last-admin)     │
//! │       │                         ── occurs BEFORE any mutation           │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the persistence failure modes         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UiError (maison-state) ← serialized for the frontend                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use maison_core::{CoreError, ValidationError};

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Domain rejection: validation failure, missing id, or invariant
    /// violation. Raised before the owning collection is touched.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// A persisted value could not be encoded or decoded.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated value under a key
    /// - Schema drift between app versions
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend rejected a read or write (quota, I/O failure).
    #[error("Storage backend failed: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound domain error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::Domain(CoreError::not_found(entity, id))
    }
}

/// Lets store operations use `?` directly on validators, which return the
/// inner `ValidationError` rather than a `CoreError`.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Domain(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_pass_through() {
        let err = StoreError::not_found("Product", 7);
        assert_eq!(err.to_string(), "Product not found: 7");

        let err: StoreError = CoreError::LastAdmin.into();
        assert!(matches!(err, StoreError::Domain(CoreError::LastAdmin)));
    }

    #[test]
    fn test_validation_errors_convert_in_one_hop() {
        // Validators return the inner ValidationError; `?` in store
        // operations must lift it straight into StoreError.
        fn rejects() -> StoreResult<()> {
            maison_core::validation::validate_price_cents(-1)?;
            Ok(())
        }

        let err = rejects().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(CoreError::Validation(ValidationError::MustBeNonNegative {
                field: "price"
            }))
        ));
    }
}
