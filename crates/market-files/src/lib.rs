//! # market-files: File Layer for Corner Market
//!
//! This crate provides summary file persistence for Corner Market. It is
//! the only place in the workspace that touches the filesystem or emits
//! log events.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Corner Market Data Flow                          │
//! │                                                                     │
//! │  Caller (demo binary, tests, embedding application)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                 market-files (THIS CRATE)                   │    │
//! │  │                                                             │    │
//! │  │   ┌──────────────────┐        ┌──────────────────┐          │    │
//! │  │   │   SummaryFile    │        │    StoreError    │          │    │
//! │  │   │ save (best       │        │ Io | Core        │          │    │
//! │  │   │ effort) / load   │        │                  │          │    │
//! │  │   └────────┬─────────┘        └──────────────────┘          │    │
//! │  └────────────┼────────────────────────────────────────────────┘    │
//! │               │ summarize / parse_line                              │
//! │               ▼                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                      market-core                            │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`summary_file`] - Save/load of the flat summary text format
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use market_core::{Cart, Catalog};
//! use market_files::SummaryFile;
//!
//! let catalog = Catalog::with_seed();
//! let mut cart = Cart::with_capacity(8);
//! cart.push("Banana").unwrap();
//!
//! let store = SummaryFile::new("cart_summary.txt");
//! store.save(&cart);
//!
//! let mut reloaded = Cart::with_capacity(8);
//! store.load(&mut reloaded, &catalog).unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod summary_file;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use summary_file::{
    load_summary, load_summary_from_path, save_summary, save_summary_to_path, SummaryFile,
};
