//! # Cart Module
//!
//! A bounded shopping cart: a fixed run of optional item-name slots plus a
//! tracked logical length.
//!
//! ## Slot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  slots: [ Banana | Banana | Apple | ─ | ─ | ─ ]    len = 3          │
//! │            0        1        2      3   4   5                       │
//! │                                                                     │
//! │  Slots at index >= len are unused. Capacity is fixed at             │
//! │  construction and never grows; a full cart reports                  │
//! │  CapacityExceeded instead of reallocating.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating operations report the new logical size by return value, the
//! way a caller tracking an external size counter would expect.

use crate::catalog::Catalog;
use crate::error::{CoreResult, MarketError};
use crate::money::Money;
use crate::SALES_TAX;

/// A bounded cart of item names.
///
/// ## Invariants
/// - `len <= capacity` always
/// - Slots below `len` are occupied; slots at or above it are `None`
/// - Item names are not validated against any catalog on insert; checkout
///   is where an unknown name surfaces
#[derive(Debug, Clone)]
pub struct Cart {
    slots: Vec<Option<String>>,
    len: usize,
}

impl Cart {
    /// Creates an empty cart with the given fixed capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Cart {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    /// The fixed slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The logical size: how many leading slots are occupied.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the cart holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks whether the logical size has reached the capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Iterates the live entries in slot order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.slots[..self.len].iter().filter_map(|s| s.as_deref())
    }

    /// Appends an item and returns the new logical size.
    ///
    /// The name is stored as given; no catalog check happens here.
    ///
    /// ## Errors
    /// [`MarketError::CapacityExceeded`] when the cart is already full.
    pub fn push(&mut self, item: &str) -> CoreResult<usize> {
        if self.is_full() {
            return Err(MarketError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.slots[self.len] = Some(item.to_string());
        self.len += 1;
        Ok(self.len)
    }

    /// Counts the occurrences of an item (exact string match).
    pub fn occurrences_of(&self, item: &str) -> usize {
        self.items().filter(|&name| name == item).count()
    }

    /// Checks whether at least one occurrence of an item is present.
    ///
    /// Short-circuits on the first match.
    pub fn contains(&self, item: &str) -> bool {
        self.items().any(|name| name == item)
    }

    /// Removes one occurrence of an item and returns the new logical size.
    ///
    /// The matched slot is overwritten with the last live entry and the
    /// last slot is cleared: removal is O(1) and does NOT preserve the
    /// relative order of the remaining items.
    ///
    /// ## Errors
    /// [`MarketError::NotInCart`] when no live slot matches.
    pub fn remove_one(&mut self, item: &str) -> CoreResult<usize> {
        let index = self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_deref() == Some(item))
            .ok_or_else(|| MarketError::NotInCart {
                name: item.to_string(),
            })?;

        self.slots.swap(index, self.len - 1);
        self.slots[self.len - 1] = None;
        self.len -= 1;
        Ok(self.len)
    }

    /// Removes every item and returns the new logical size (always 0).
    ///
    /// Clears every slot, not just the live ones.
    pub fn clear(&mut self) -> usize {
        self.slots.fill(None);
        self.len = 0;
        0
    }

    /// Totals the cart against the given catalog, tax included.
    ///
    /// Each entry contributes its unit price plus the fixed 5% sales tax;
    /// the math is exact integer arithmetic (see [`Money`]).
    ///
    /// ## Errors
    /// [`MarketError::PriceNotFound`] when any entry has no catalog price.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::{Cart, Catalog};
    ///
    /// let catalog = Catalog::with_seed();
    /// let mut cart = Cart::with_capacity(4);
    /// cart.push("Banana").unwrap();
    ///
    /// let total = cart.checkout(&catalog).unwrap();
    /// assert_eq!(format!("{}", total), "$0.5145"); // $0.49 + 5%
    /// ```
    pub fn checkout(&self, catalog: &Catalog) -> CoreResult<Money> {
        let mut total = Money::zero();
        for name in self.items() {
            total += catalog.price_of(name)?.with_tax(SALES_TAX);
        }
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_of(capacity: usize, items: &[&str]) -> Cart {
        let mut cart = Cart::with_capacity(capacity);
        for item in items {
            cart.push(item).unwrap();
        }
        cart
    }

    #[test]
    fn test_push_returns_new_size() {
        let mut cart = Cart::with_capacity(3);
        assert_eq!(cart.push("Banana").unwrap(), 1);
        assert_eq!(cart.push("Apple").unwrap(), 2);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.capacity(), 3);
    }

    #[test]
    fn test_push_into_full_cart_fails() {
        let mut cart = cart_of(2, &["Banana", "Apple"]);
        assert!(matches!(
            cart.push("Milk"),
            Err(MarketError::CapacityExceeded { capacity: 2 })
        ));
        // The failed push changed nothing
        assert_eq!(cart.len(), 2);

        // A zero-capacity cart is born full
        let mut empty = Cart::with_capacity(0);
        assert!(matches!(
            empty.push("Banana"),
            Err(MarketError::CapacityExceeded { capacity: 0 })
        ));
    }

    #[test]
    fn test_occurrences_and_contains() {
        let cart = cart_of(6, &["Banana", "Apple", "Banana"]);

        assert_eq!(cart.occurrences_of("Banana"), 2);
        assert_eq!(cart.occurrences_of("Apple"), 1);
        assert_eq!(cart.occurrences_of("Milk"), 0);

        assert!(cart.contains("Apple"));
        assert!(!cart.contains("Milk"));
        // Exact match only
        assert!(!cart.contains("banana"));
    }

    #[test]
    fn test_remove_one_swaps_with_last() {
        let mut cart = cart_of(6, &["Banana", "Apple", "Milk"]);

        assert_eq!(cart.remove_one("Banana").unwrap(), 2);

        // The last entry moved into the vacated slot: order is not kept
        let items: Vec<&str> = cart.items().collect();
        assert_eq!(items, vec!["Milk", "Apple"]);
    }

    #[test]
    fn test_remove_one_decrements_count_and_size() {
        let mut cart = cart_of(6, &["Banana", "Banana", "Apple"]);

        let before = cart.occurrences_of("Banana");
        assert_eq!(cart.remove_one("Banana").unwrap(), 2);
        assert_eq!(cart.occurrences_of("Banana"), before - 1);

        // Still one left, so a second removal succeeds...
        assert_eq!(cart.remove_one("Banana").unwrap(), 1);
        // ...and a third does not
        assert!(matches!(
            cart.remove_one("Banana"),
            Err(MarketError::NotInCart { .. })
        ));
    }

    #[test]
    fn test_remove_last_remaining_item() {
        let mut cart = cart_of(2, &["Banana"]);
        assert_eq!(cart.remove_one("Banana").unwrap(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_every_slot() {
        let mut cart = cart_of(4, &["Banana", "Apple"]);

        assert_eq!(cart.clear(), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.occurrences_of("Banana"), 0);
        assert_eq!(cart.occurrences_of("Apple"), 0);

        // Capacity is untouched and the cart is reusable
        assert_eq!(cart.capacity(), 4);
        assert_eq!(cart.push("Milk").unwrap(), 1);
    }

    #[test]
    fn test_checkout_single_banana() {
        let catalog = Catalog::with_seed();
        let cart = cart_of(2, &["Banana"]);

        // $0.49 × 1.05 = $0.5145, exactly
        let total = cart.checkout(&catalog).unwrap();
        assert_eq!(total, Money::from_units(5145));
    }

    #[test]
    fn test_checkout_sums_per_entry() {
        let catalog = Catalog::with_seed();
        let cart = cart_of(4, &["Banana", "Banana", "Apple"]);

        // (49 + 49 + 159) cents × 1.05 = $2.6985
        let total = cart.checkout(&catalog).unwrap();
        assert_eq!(total, Money::from_units(26_985));
    }

    #[test]
    fn test_checkout_empty_cart_is_zero() {
        let catalog = Catalog::with_seed();
        let cart = Cart::with_capacity(3);
        assert_eq!(cart.checkout(&catalog).unwrap(), Money::zero());
    }

    #[test]
    fn test_checkout_unknown_item_fails() {
        let catalog = Catalog::with_seed();
        let cart = cart_of(2, &["Durian"]);
        assert!(matches!(
            cart.checkout(&catalog),
            Err(MarketError::PriceNotFound)
        ));
    }
}
