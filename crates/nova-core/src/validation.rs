//! # Validation Module
//!
//! Input validation for back-office writes and storefront queries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI shell (TypeScript)                                        │
//! │  ├── Basic format checks (empty fields, length)                        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command layer (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repositories                                                 │
//! │  ├── Uniqueness checks (SKU, email)                                    │
//! │  └── Existence checks (lookups by id)                                  │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart/wishlist store performs NO validation - its operations are total
//! and callers own the shape of product records.
//!
//! ## Usage
//! ```rust
//! use nova_core::validation::{validate_sku, validate_price_cents};
//!
//! validate_sku("PHN-NOVA-001").unwrap();
//! validate_price_cents(109_900).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_RATING_TENTHS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use nova_core::validation::validate_sku;
///
/// assert!(validate_sku("PHN-NOVA-001").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 120 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates a brand name.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 60 characters
pub fn validate_brand(brand: &str) -> ValidationResult<()> {
    let brand = brand.trim();

    if brand.is_empty() {
        return Err(ValidationError::Required {
            field: "brand".to_string(),
        });
    }

    if brand.len() > 60 {
        return Err(ValidationError::TooLong {
            field: "brand".to_string(),
            max: 60,
        });
    }

    Ok(())
}

/// Validates an account email.
///
/// Mock-grade check: one `@`, non-empty local part, a dot in the domain.
/// There is no mail delivery anywhere in this system, so anything stricter
/// would be theater.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@domain.tld".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns all/default results)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (giveaway items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a pre-markdown price against the current price.
///
/// ## Rules
/// - Must be strictly greater than the sale price (otherwise the
///   strikethrough badge would show a markup)
pub fn validate_original_price_cents(original: i64, price: i64) -> ValidationResult<()> {
    if original <= price {
        return Err(ValidationError::MustBePositive {
            field: "markdown".to_string(),
        });
    }

    Ok(())
}

/// Validates a star rating in tenths.
///
/// ## Rules
/// - Must be between 0 (unrated) and 50 (5.0 stars)
pub fn validate_rating_tenths(tenths: u8) -> ValidationResult<()> {
    if tenths > MAX_RATING_TENTHS {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: MAX_RATING_TENTHS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        // Valid SKUs
        assert!(validate_sku("PHN-NOVA-001").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("gadget_1").is_ok());

        // Invalid SKUs
        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Nova Phone 12 Pro").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_brand() {
        assert!(validate_brand("Samsung").is_ok());
        assert!(validate_brand("").is_err());
        assert!(validate_brand(&"B".repeat(61)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@novagadgets.test").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@nowhere.test").is_err());
        assert!(validate_email("ada@nodot").is_err());
        assert!(validate_email("a@b@c.test").is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  pixel  ").unwrap(), "pixel");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(109_900).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_original_price_cents() {
        assert!(validate_original_price_cents(99_900, 84_915).is_ok());
        assert!(validate_original_price_cents(84_915, 84_915).is_err());
        assert!(validate_original_price_cents(50_000, 84_915).is_err());
    }

    #[test]
    fn test_validate_rating_tenths() {
        assert!(validate_rating_tenths(0).is_ok());
        assert!(validate_rating_tenths(45).is_ok());
        assert!(validate_rating_tenths(50).is_ok());
        assert!(validate_rating_tenths(51).is_err());
    }
}
