//! # Store Error Types
//!
//! Error types for summary file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error (open/read failures)                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← also wraps domain errors that           │
//! │       │                      abort a load (cart filled up)          │
//! │       ▼                                                             │
//! │  Caller decides: report, retry with a bigger cart, etc.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: per-line parse failures (those are skipped
//! during load, never surfaced) and save-side I/O failures (save is best
//! effort and only logs).

use market_core::MarketError;
use thiserror::Error;

/// Summary file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening or reading the underlying stream failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A domain failure aborted the operation (the only one a load can
    /// surface is a full cart).
    #[error(transparent)]
    Core(#[from] MarketError),
}

/// Result type for summary file operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
