//! # Catalog Module
//!
//! The market catalog: an ordered run of optional item slots, seeded with
//! the 25 stock items plus a handful of empty growth slots.
//!
//! ## Slot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  slots: [ Apple | Avocado | ... | Tomato | ─ | ─ | ─ | ─ ]          │
//! │           0       1              24        25  26  27  28           │
//! │                                                                     │
//! │  `None` slots mean "not yet used". Scans skip them; inserts fill    │
//! │  the first one. When none is left, capacity doubles and the new     │
//! │  tail is all empty.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is an owned value handed to whoever needs it; there is no
//! process-wide instance. Items are only ever added, never removed or
//! edited in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreResult, MarketError};
use crate::money::Money;
use crate::validation::{
    validate_id_range, validate_item_id, validate_item_name, validate_unit_price,
};

// =============================================================================
// Seed Data
// =============================================================================

/// The stock catalog rows: `(id, name, price)`.
///
/// Ids are 4 decimal digits; prices carry a leading `$`.
const SEED_ITEMS: &[(&str, &str, &str)] = &[
    ("4390", "Apple", "$1.59"),
    ("4046", "Avocado", "$0.59"),
    ("4011", "Banana", "$0.49"),
    ("4500", "Beef", "$3.79"),
    ("4033", "Blueberry", "$6.89"),
    ("4129", "Broccoli", "$1.79"),
    ("4131", "Butter", "$4.59"),
    ("4017", "Carrot", "$1.19"),
    ("3240", "Cereal", "$3.69"),
    ("3560", "Cheese", "$3.49"),
    ("3294", "Chicken", "$5.09"),
    ("4071", "Chocolate", "$3.19"),
    ("4363", "Cookie", "$9.5"),
    ("4232", "Cucumber", "$0.79"),
    ("3033", "Eggs", "$3.09"),
    ("4770", "Grape", "$2.29"),
    ("3553", "Ice Cream", "$5.39"),
    ("3117", "Milk", "$2.09"),
    ("3437", "Mushroom", "$1.79"),
    ("4663", "Onion", "$0.79"),
    ("4030", "Pepper", "$1.99"),
    ("3890", "Pizza", "$11.5"),
    ("4139", "Potato", "$0.69"),
    ("3044", "Spinach", "$3.09"),
    ("4688", "Tomato", "$1.79"),
];

/// Empty slots appended past the seed, reserved for growth.
const GROWTH_SLOTS: usize = 4;

// =============================================================================
// Item
// =============================================================================

/// A purchasable item in the market catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier: exactly 4 decimal digits, in [1000, 9999].
    pub id: String,

    /// Display name, never empty. Lookups match it exactly,
    /// case-sensitively.
    pub name: String,

    /// Unit price before tax.
    pub price: Money,
}

/// `"<id> <name> <price>"`, the catalog's one-line item rendering.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.price)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The market catalog.
///
/// ## Invariants
/// - Occupied slots hold validated items (4-digit id, non-empty name,
///   non-negative price)
/// - Capacity only ever grows, by doubling, and only when an insert finds
///   no empty slot
/// - Duplicate ids are not rejected; first match wins on lookup
#[derive(Debug, Clone)]
pub struct Catalog {
    slots: Vec<Option<Item>>,
}

impl Catalog {
    /// Creates the catalog with the 25 stock items and 4 empty growth
    /// slots.
    pub fn with_seed() -> Self {
        let mut slots: Vec<Option<Item>> = SEED_ITEMS
            .iter()
            .map(|&(id, name, price)| {
                Some(Item {
                    id: id.to_string(),
                    name: name.to_string(),
                    price: price[1..].parse().expect("seed prices are well-formed"),
                })
            })
            .collect();
        slots.extend(std::iter::repeat_with(|| None).take(GROWTH_SLOTS));

        Catalog { slots }
    }

    /// Creates an empty catalog with the given number of slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Catalog {
            slots: vec![None; capacity],
        }
    }

    /// Total number of slots, occupied or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Checks whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns a deep copy of all slots, empty markers included.
    pub fn snapshot(&self) -> Vec<Option<Item>> {
        self.slots.clone()
    }

    /// Iterates the occupied slots in order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().flatten()
    }

    /// Finds the item with the given name.
    ///
    /// Linear scan; first match wins.
    ///
    /// ## Errors
    /// [`MarketError::NoMatch`] when no occupied slot carries the name.
    pub fn find_by_name(&self, name: &str) -> CoreResult<&Item> {
        self.items()
            .find(|item| item.name == name)
            .ok_or(MarketError::NoMatch)
    }

    /// Finds the item with the given numeric id.
    ///
    /// ## Errors
    /// - [`MarketError::Validation`] when the id is outside [1000, 9999]
    /// - [`MarketError::NoMatch`] when no item carries the id
    pub fn find_by_id(&self, id: i64) -> CoreResult<&Item> {
        validate_id_range(id)?;

        let key = id.to_string();
        self.items()
            .find(|item| item.id == key)
            .ok_or(MarketError::NoMatch)
    }

    /// Returns the unit price of the named item.
    ///
    /// ## Errors
    /// [`MarketError::PriceNotFound`] when the name matches nothing.
    pub fn price_of(&self, name: &str) -> CoreResult<Money> {
        self.items()
            .find(|item| item.name == name)
            .map(|item| item.price)
            .ok_or(MarketError::PriceNotFound)
    }

    /// Adds a new item to the catalog.
    ///
    /// Validates id format, id range, name, price format, and price sign,
    /// in that order. The validated item goes into the first empty slot;
    /// when every slot is occupied the capacity doubles first and the item
    /// lands at the start of the new tail.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::catalog::Catalog;
    ///
    /// let mut catalog = Catalog::with_seed();
    /// catalog.add_item("4912", "Mango", "$2.49").unwrap();
    /// assert_eq!(catalog.find_by_name("Mango").unwrap().id, "4912");
    /// ```
    pub fn add_item(&mut self, id: &str, name: &str, price: &str) -> CoreResult<()> {
        let id = validate_item_id(id)?;
        validate_item_name(name)?;
        let price = validate_unit_price(price)?;

        let item = Item {
            id: id.to_string(),
            name: name.to_string(),
            price,
        };

        let index = match self.first_empty_slot() {
            Some(index) => index,
            None => self.grow(),
        };
        self.slots[index] = Some(item);

        Ok(())
    }

    /// Index of the first empty slot, if any.
    fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Doubles the slot count and returns the index of the first new slot.
    ///
    /// Occupied slots are carried over once; the entire new tail is empty.
    fn grow(&mut self) -> usize {
        let old_len = self.slots.len();
        self.slots.resize(old_len.max(1) * 2, None);
        old_len
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::with_seed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
