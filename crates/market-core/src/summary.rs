//! # Summary Format
//!
//! The textual cart-summary protocol: one line per distinct item,
//!
//! ```text
//! ( <count> ) <itemName>
//! ```
//!
//! with exactly one ASCII space between tokens. Serialization
//! ([`summarize`]) walks the cart; parsing ([`parse_line`]) validates a
//! line against the grammar and the catalog, then appends to the cart.
//!
//! Parsing is stricter than serialization: a catalog name containing a
//! space ("Ice Cream") serializes fine but tokenizes into five pieces on
//! the way back in, and counts above [`MAX_LINE_QUANTITY`](crate::MAX_LINE_QUANTITY)
//! are emitted but never accepted. Both asymmetries are part of the
//! format.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreResult, MarketError, ValidationError};
use crate::MAX_LINE_QUANTITY;

/// Renders the cart's contents as summary text.
///
/// Each distinct name appears once, at its first occurrence, with the
/// total number of occurrences in front. Lines are newline-joined and the
/// result is trimmed, so an empty cart gives an empty string.
///
/// ## Example
/// ```rust
/// use market_core::{summarize, Cart};
///
/// let mut cart = Cart::with_capacity(4);
/// cart.push("Banana").unwrap();
/// cart.push("Banana").unwrap();
/// assert_eq!(summarize(&cart), "( 2 ) Banana");
/// ```
pub fn summarize(cart: &Cart) -> String {
    let names: Vec<&str> = cart.items().collect();

    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            continue; // already emitted at its first occurrence
        }
        let count = names.iter().filter(|&&n| n == *name).count();
        out.push_str(&format!("( {} ) {}\n", count, name));
    }

    out.trim().to_string()
}

/// Parses one summary line and appends its item to the cart.
///
/// Checks run in a fixed order: token shape, count parsability, count
/// range, name existence, then capacity while writing. On a capacity
/// failure the entries appended before the cart filled STAY in the cart;
/// the caller sees the error and the partial write.
///
/// ## Errors
/// - [`MarketError::MalformedLine`] - wrong token shape, unparsable
///   count, or count outside `1..=MAX_LINE_QUANTITY`
/// - [`MarketError::Validation`] - the name matches no catalog item
/// - [`MarketError::CapacityExceeded`] - the cart filled mid-write
///
/// ## Example
/// ```rust
/// use market_core::{parse_line, Cart, Catalog};
///
/// let catalog = Catalog::with_seed();
/// let mut cart = Cart::with_capacity(8);
/// let size = parse_line("( 2 ) Banana", &mut cart, &catalog).unwrap();
/// assert_eq!(size, 2);
/// ```
pub fn parse_line(line: &str, cart: &mut Cart, catalog: &Catalog) -> CoreResult<usize> {
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() != 4 || tokens[0] != "(" || tokens[2] != ")" {
        return Err(MarketError::MalformedLine {
            reason: "expected `( <count> ) <name>` with single spaces".to_string(),
        });
    }

    let count: i64 = tokens[1].parse().map_err(|_| MarketError::MalformedLine {
        reason: format!("count `{}` is not an integer", tokens[1]),
    })?;

    if !(1..=MAX_LINE_QUANTITY).contains(&count) {
        return Err(MarketError::MalformedLine {
            reason: format!("count {} is outside 1..={}", count, MAX_LINE_QUANTITY),
        });
    }

    let name = tokens[3];
    if catalog.find_by_name(name).is_err() {
        return Err(ValidationError::UnknownItem {
            name: name.to_string(),
        }
        .into());
    }

    let mut size = cart.len();
    for _ in 0..count {
        size = cart.push(name)?;
    }
    Ok(size)
}

// =============================================================================
// Unit Tests
// =============================================================================
