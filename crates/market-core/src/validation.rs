//! # Validation Module
//!
//! Input validation for catalog inserts.
//!
//! ## Validation Order
//! `Catalog::add_item` runs these checks in a fixed order, and the first
//! failure is the one the caller sees:
//!
//! 1. id parses as an integer
//! 2. id lies in [1000, 9999]
//! 3. name is non-empty
//! 4. price (after its leading currency symbol) parses as a decimal
//! 5. parsed price is non-negative
//!
//! The order is part of the contract: a row that is wrong in several ways
//! always reports the id problem first.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Inclusive bounds for a 4-decimal-digit item id.
pub const MIN_ITEM_ID: i64 = 1000;
pub const MAX_ITEM_ID: i64 = 9999;

// =============================================================================
// Item Id
// =============================================================================

/// Validates a raw item id string and returns the parsed id.
///
/// ## Rules
/// - Must parse as an integer
/// - Must lie in [1000, 9999]
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_item_id;
///
/// assert_eq!(validate_item_id("4011").unwrap(), 4011);
/// assert!(validate_item_id("40b1").is_err());
/// assert!(validate_item_id("999").is_err());
/// ```
pub fn validate_item_id(raw: &str) -> ValidationResult<i64> {
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "not parsable to int".to_string(),
        })?;

    validate_id_range(id)?;
    Ok(id)
}

/// Validates that an already-numeric id lies in the 4-digit range.
///
/// Shared by [`validate_item_id`] and `Catalog::find_by_id`, whose caller
/// supplies the id as an integer directly.
pub fn validate_id_range(id: i64) -> ValidationResult<()> {
    if !(MIN_ITEM_ID..=MAX_ITEM_ID).contains(&id) {
        return Err(ValidationError::OutOfRange {
            field: "id".to_string(),
            min: MIN_ITEM_ID,
            max: MAX_ITEM_ID,
        });
    }

    Ok(())
}

// =============================================================================
// Item Name
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (or whitespace only)
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Ice Cream").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Price
// =============================================================================

/// Validates a raw unit price string and returns the parsed amount.
///
/// The first character is the currency symbol and is dropped unexamined;
/// the remainder must parse as a decimal and must not be negative. Format
/// is checked before sign, so `"$-x"` reports the format problem.
///
/// ## Example
/// ```rust
/// use market_core::money::Money;
/// use market_core::validation::validate_unit_price;
///
/// assert_eq!(validate_unit_price("$1.59").unwrap(), Money::from_cents(159));
/// assert!(validate_unit_price("$1.5.9").is_err());
/// assert!(validate_unit_price("$-1.59").is_err());
/// ```
pub fn validate_unit_price(raw: &str) -> ValidationResult<Money> {
    let mut chars = raw.chars();
    chars.next(); // currency symbol
    let numeric = chars.as_str();

    let price: Money = numeric.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "not parsable to a decimal amount".to_string(),
    })?;

    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert_eq!(validate_item_id("1000").unwrap(), 1000);
        assert_eq!(validate_item_id("9999").unwrap(), 9999);
        assert_eq!(validate_item_id(" 4011 ").unwrap(), 4011);

        assert!(matches!(
            validate_item_id("forty"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_item_id("999"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_item_id("10000"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Banana").is_ok());
        assert!(validate_item_name("Ice Cream").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("  ").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert_eq!(
            validate_unit_price("$0.49").unwrap(),
            Money::from_cents(49)
        );
        assert_eq!(
            validate_unit_price("$11.5").unwrap(),
            Money::from_cents(1150)
        );

        // Any single leading character is treated as the symbol
        assert_eq!(validate_unit_price("€2.00").unwrap(), Money::from_cents(200));

        assert!(matches!(
            validate_unit_price("$abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_unit_price(""),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_unit_price("$-1.59"),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_price_format_is_checked_before_sign() {
        // A string that is both malformed and "negative" reports format first
        assert!(matches!(
            validate_unit_price("$-1.5.9"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
