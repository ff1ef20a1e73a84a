//! # Summary File Save/Load
//!
//! Persists cart summaries as flat text, one `( <count> ) <name>` line
//! per distinct item.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  save: best effort. Overwrites the target; an I/O failure is        │
//! │        logged at error level and swallowed. Never returns an error. │
//! │                                                                     │
//! │  load: best effort per line. Unparsable lines are skipped (debug    │
//! │        log); a full cart aborts the whole load and the error        │
//! │        reaches the caller, with the partial write still visible     │
//! │        in the cart.                                                 │
//! │                                                                     │
//! │  Handles are scoped: dropped (closed) on every exit path.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use market_core::{parse_line, summarize, Cart, Catalog, MarketError};

use crate::error::StoreResult;

// =============================================================================
// Stream-Level Operations
// =============================================================================

/// Writes the cart's summary text into the sink, best effort.
///
/// I/O failures are logged and swallowed; this function never fails.
pub fn save_summary<W: Write>(mut sink: W, cart: &Cart) {
    let summary = summarize(cart);

    if let Err(err) = sink
        .write_all(summary.as_bytes())
        .and_then(|_| sink.flush())
    {
        error!(%err, "failed to write cart summary");
    }
}

/// Loads summary lines from the source into the cart.
///
/// Each line is trimmed, then parsed. Lines that fail the grammar or name
/// an unknown item are skipped with a debug log; processing continues
/// with the next line. A full cart aborts the load.
///
/// Returns the cart's new logical size.
///
/// ## Errors
/// - [`StoreError::Io`](crate::StoreError::Io) when reading fails
/// - [`StoreError::Core`](crate::StoreError::Core) with
///   `CapacityExceeded` when the cart fills; entries loaded before the
///   failure remain in the cart
pub fn load_summary<R: BufRead>(source: R, cart: &mut Cart, catalog: &Catalog) -> StoreResult<usize> {
    let mut size = cart.len();

    for (line_no, line) in source.lines().enumerate() {
        let line = line?;
        match parse_line(line.trim(), cart, catalog) {
            Ok(new_size) => size = new_size,
            Err(err @ MarketError::CapacityExceeded { .. }) => return Err(err.into()),
            Err(err) => {
                debug!(line = line_no + 1, %err, "skipped summary line");
            }
        }
    }

    Ok(size)
}

// =============================================================================
// Path-Level Operations
// =============================================================================

/// Saves the cart's summary to the file at `path`, overwriting any
/// existing content. Best effort: open and write failures are logged and
/// swallowed.
pub fn save_summary_to_path<P: AsRef<Path>>(path: P, cart: &Cart) {
    let path = path.as_ref();
    match File::create(path) {
        // Handle closes when `file` drops, whatever the write outcome
        Ok(file) => save_summary(file, cart),
        Err(err) => {
            error!(path = %path.display(), %err, "failed to open summary file for writing");
        }
    }
}

/// Loads the summary file at `path` into the cart.
///
/// The file handle is dropped before the outcome is handed back, so a
/// `CapacityExceeded` abort reaches the caller with the file already
/// closed.
pub fn load_summary_from_path<P: AsRef<Path>>(
    path: P,
    cart: &mut Cart,
    catalog: &Catalog,
) -> StoreResult<usize> {
    let file = File::open(path.as_ref())?;
    load_summary(BufReader::new(file), cart, catalog)
}

// =============================================================================
// SummaryFile
// =============================================================================

/// A cart summary stored at a fixed path.
///
/// ## Usage
/// ```rust,no_run
/// use market_core::{Cart, Catalog};
/// use market_files::SummaryFile;
///
/// let catalog = Catalog::with_seed();
/// let cart = Cart::with_capacity(8);
///
/// let store = SummaryFile::new("cart_summary.txt");
/// store.save(&cart);
///
/// let mut reloaded = Cart::with_capacity(8);
/// let size = store.load(&mut reloaded, &catalog).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SummaryFile {
    path: PathBuf,
}

impl SummaryFile {
    /// Creates a store for the summary file at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SummaryFile { path: path.into() }
    }

    /// Returns the path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the cart's summary, overwriting existing content. Best
    /// effort; see [`save_summary_to_path`].
    pub fn save(&self, cart: &Cart) {
        debug!(path = %self.path.display(), items = cart.len(), "saving cart summary");
        save_summary_to_path(&self.path, cart);
    }

    /// Loads the stored summary into the cart and returns its new size.
    pub fn load(&self, cart: &mut Cart, catalog: &Catalog) -> StoreResult<usize> {
        debug!(path = %self.path.display(), "loading cart summary");
        load_summary_from_path(&self.path, cart, catalog)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
