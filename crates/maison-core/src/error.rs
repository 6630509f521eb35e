//! # Error Types
//!
//! Domain-specific error types for maison-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  maison-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  maison-store errors (separate crate)                                  │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  maison-state errors (UI layer)                                        │
//! │  └── UiError          - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → UiError → Frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entity, ID, field)
//! 3. Errors are enum variants, never String
//! 4. Every rejected operation leaves the owning collection untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An operation targeted an id that does not exist in its collection.
    ///
    /// ## When This Occurs
    /// - Updating or removing a product that was already deleted
    /// - Removing a user record that does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },

    /// The user collection must always retain at least one admin.
    ///
    /// ## When This Occurs
    /// - `UserStore::remove` targets the sole remaining admin-role record
    ///
    /// ## User Workflow
    /// ```text
    /// Admin dashboard: delete user
    ///      │
    ///      ▼
    /// Count admin records (before removal)
    ///      │
    ///      ▼
    /// count == 1 and target is admin → LastAdmin
    ///      │
    ///      ▼
    /// UI shows blocking notice, collection unchanged
    /// ```
    #[error("cannot remove the last admin account")]
    LastAdmin,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        CoreError::NotFound { entity, id }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Invalid format (e.g., email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::LastAdmin;
        assert_eq!(err.to_string(), "cannot remove the last admin account");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative { field: "price" };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
