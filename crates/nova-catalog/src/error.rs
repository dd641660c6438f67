//! # Catalog Error Types
//!
//! Error types for data-layer operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (nova-core)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds lookup/uniqueness/credential cases  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (nova-app) ← Serialized for the UI shell                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use nova_core::CoreError;

/// Data-layer errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Lookup by id misses
    /// - Entity was soft-deleted
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Uniqueness violation on a business key.
    ///
    /// ## When This Occurs
    /// - Creating a product with an existing SKU
    /// - Creating a user with an existing email
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Sign-in failed. Deliberately does not say whether the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but was deactivated by an administrator.
    #[error("Account is disabled")]
    AccountDisabled,

    /// Business rule violation from nova-core (validation, closed orders).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CatalogError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        CatalogError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found("Product", "p-404");
        assert_eq!(err.to_string(), "Product not found: p-404");
    }

    #[test]
    fn test_duplicate_message() {
        let err = CatalogError::duplicate("sku", "PHN-NOVA-001");
        assert_eq!(
            err.to_string(),
            "Duplicate sku: 'PHN-NOVA-001' already exists"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::Validation(nova_core::ValidationError::Required {
            field: "sku".to_string(),
        });
        let err = CatalogError::from(core);
        assert_eq!(err.to_string(), "Validation error: sku is required");
    }
}
