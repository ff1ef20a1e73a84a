//! # market-core: Pure Business Logic for Corner Market
//!
//! This crate is the heart of Corner Market. It contains all catalog,
//! cart, and summary-format logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Corner Market Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                 ★ market-core (THIS CRATE) ★                │    │
//! │  │                                                             │    │
//! │  │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────────┐   │    │
//! │  │  │ catalog │  │  cart   │  │  money  │  │   summary    │   │    │
//! │  │  │  Item   │  │  Cart   │  │  Money  │  │  summarize   │   │    │
//! │  │  │ Catalog │  │  push/  │  │ TaxRate │  │  parse_line  │   │    │
//! │  │  │ lookups │  │ remove  │  │         │  │              │   │    │
//! │  │  └─────────┘  └─────────┘  └─────────┘  └──────────────┘   │    │
//! │  │                                                             │    │
//! │  │  NO I/O • NO FILES • NO LOGGING • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │                market-files (File Layer)                    │    │
//! │  │         summary save/load, tracing, demo binary             │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The seeded item catalog with lookups and growth
//! - [`cart`] - The bounded cart and its mutation/valuation operations
//! - [`money`] - Integer money type and tax rates (no floating point!)
//! - [`summary`] - The `( <count> ) <name>` text format
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog insert validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic
//! 2. **No I/O**: File and console access is FORBIDDEN here
//! 3. **Integer Money**: Ten-thousandths of a dollar, so the 5% tax is
//!    exact on every cent-denominated price
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use market_core::{Cart, Catalog, summarize};
//!
//! let catalog = Catalog::with_seed();
//! let mut cart = Cart::with_capacity(8);
//!
//! cart.push("Banana").unwrap();
//! cart.push("Banana").unwrap();
//!
//! assert_eq!(summarize(&cart), "( 2 ) Banana");
//! assert_eq!(format!("{}", cart.checkout(&catalog).unwrap()), "$1.0290");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod summary;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use market_core::Cart` instead of
// `use market_core::cart::Cart`

pub use cart::Cart;
pub use catalog::{Catalog, Item};
pub use error::{CoreResult, MarketError, ValidationError};
pub use money::{Money, TaxRate};
pub use summary::{parse_line, summarize};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every item at checkout: 5%, fixed.
///
/// Every product in the market is taxable at this single rate; there are
/// no per-item rates and no tax-exempt items.
pub const SALES_TAX: TaxRate = TaxRate::from_bps(500);

/// Largest per-line quantity the summary format accepts.
///
/// A summary line with a count above this (or below 1) is rejected as
/// malformed on parse. Serialization does not clamp to it.
pub const MAX_LINE_QUANTITY: i64 = 10;
