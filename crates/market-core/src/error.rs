//! # Error Types
//!
//! Domain-specific error types for market-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  market-core errors (this file)                                     │
//! │  ├── MarketError      - Domain failures (lookup, capacity, format)  │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  market-files errors (separate crate)                               │
//! │  └── StoreError       - File operation failures                     │
//! │                                                                     │
//! │  Flow: ValidationError → MarketError → StoreError → caller          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, capacity, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Market Error
// =============================================================================

/// Domain errors for catalog lookups, cart mutation, and the summary format.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum MarketError {
    /// A catalog lookup by name or id matched no item.
    #[error("No match found")]
    NoMatch,

    /// A price lookup by item name matched no catalog entry.
    ///
    /// Distinct from [`MarketError::NoMatch`]: checkout surfaces this one
    /// when a cart entry has no catalog price.
    #[error("matched price was not found")]
    PriceNotFound,

    /// Removal of an item the cart does not hold.
    #[error("{name} was not found in the cart")]
    NotInCart { name: String },

    /// Append into a cart whose logical size already equals its capacity.
    ///
    /// The cart never grows: overflow is reported, not absorbed. A partial
    /// multi-append (summary parsing) leaves the entries written before the
    /// failure in place.
    #[error("the cart is already full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A summary line violates the `( <count> ) <name>` grammar, or its
    /// count token is unparsable or outside the accepted range.
    #[error("malformed summary line: {reason}")]
    MalformedLine { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., unparsable id or price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// The name does not belong to any catalog item.
    #[error("no item named '{name}' exists in the catalog")]
    UnknownItem { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MarketError.
pub type CoreResult<T> = Result<T, MarketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(MarketError::NoMatch.to_string(), "No match found");
        assert_eq!(
            MarketError::PriceNotFound.to_string(),
            "matched price was not found"
        );

        let err = MarketError::CapacityExceeded { capacity: 8 };
        assert_eq!(err.to_string(), "the cart is already full (capacity 8)");

        let err = MarketError::NotInCart {
            name: "Banana".to_string(),
        };
        assert_eq!(err.to_string(), "Banana was not found in the cart");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "id".to_string(),
            min: 1000,
            max: 9999,
        };
        assert_eq!(err.to_string(), "id must be between 1000 and 9999");
    }

    #[test]
    fn test_validation_converts_to_market_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let market_err: MarketError = validation_err.into();
        assert!(matches!(market_err, MarketError::Validation(_)));
    }
}
