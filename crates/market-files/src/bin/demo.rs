//! # Cart Demo
//!
//! Walks the whole system end to end: seed the catalog, fill a cart,
//! print the summary and the taxed total, save the summary to a file,
//! and load it back into a fresh cart.
//!
//! ## Usage
//! ```bash
//! # Default basket, default file
//! cargo run -p market-files --bin demo
//!
//! # Pick the items and the file
//! cargo run -p market-files --bin demo -- Banana Banana Apple --file ./my_cart.txt
//!
//! # Dump the seeded catalog as JSON and exit
//! cargo run -p market-files --bin demo -- --catalog
//! ```
//!
//! Set `RUST_LOG=debug` to see skipped-line and save diagnostics.

use std::env;

use serde::Serialize;

use market_core::{summarize, Cart, Catalog, Money, SALES_TAX};
use market_files::SummaryFile;

/// One distinct item on the printed receipt.
#[derive(Debug, Serialize)]
struct ReceiptLine {
    name: String,
    quantity: usize,
    unit_price: Money,
    line_total: Money,
}

/// The JSON receipt printed after checkout.
#[derive(Debug, Serialize)]
struct Receipt {
    lines: Vec<ReceiptLine>,
    tax_rate_bps: u32,
    total: Money,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut file_path = String::from("./cart_summary.txt");
    let mut capacity: usize = 20;
    let mut dump_catalog = false;
    let mut items: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--capacity" | "-c" => {
                if i + 1 < args.len() {
                    capacity = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--catalog" => {
                dump_catalog = true;
            }
            "--help" | "-h" => {
                println!("Corner Market Cart Demo");
                println!();
                println!("Usage: demo [ITEM]... [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>    Summary file path (default: ./cart_summary.txt)");
                println!("  -c, --capacity <N>   Cart capacity (default: 20)");
                println!("      --catalog        Dump the seeded catalog as JSON and exit");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            other => {
                items.push(other.to_string());
            }
        }
        i += 1;
    }

    if items.is_empty() {
        items = ["Banana", "Banana", "Apple", "Milk"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    println!("🛒 Corner Market Cart Demo");
    println!("==========================");

    let catalog = Catalog::with_seed();
    println!("✓ Catalog seeded: {} items", catalog.len());

    if dump_catalog {
        println!("{}", serde_json::to_string_pretty(&catalog.snapshot())?);
        return Ok(());
    }

    // Fill the cart
    let mut cart = Cart::with_capacity(capacity);
    for item in &items {
        if let Err(err) = cart.push(item) {
            eprintln!("Failed to add {}: {}", item, err);
        }
    }
    println!("✓ Cart filled: {} of {} slots", cart.len(), cart.capacity());

    // Summary and checkout
    println!();
    println!("Summary:");
    for line in summarize(&cart).lines() {
        println!("  {}", line);
    }

    let total = cart.checkout(&catalog)?;
    println!();
    println!("Total (incl. {}% tax): {}", SALES_TAX.percentage(), total);

    let receipt = build_receipt(&cart, &catalog, total)?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    // Save, then load into a fresh cart to prove the round trip
    let store = SummaryFile::new(&file_path);
    store.save(&cart);
    println!();
    println!("✓ Summary saved to {}", file_path);

    let mut reloaded = Cart::with_capacity(capacity);
    let size = store.load(&mut reloaded, &catalog)?;
    println!("✓ Reloaded {} items from {}", size, file_path);

    println!();
    println!("✓ Demo complete!");

    Ok(())
}

/// Folds the cart into distinct receipt lines plus the taxed total.
fn build_receipt(
    cart: &Cart,
    catalog: &Catalog,
    total: Money,
) -> Result<Receipt, Box<dyn std::error::Error>> {
    let mut lines: Vec<ReceiptLine> = Vec::new();

    for name in cart.items() {
        if lines.iter().any(|line| line.name == name) {
            continue;
        }
        let quantity = cart.occurrences_of(name);
        let unit_price = catalog.price_of(name)?;
        lines.push(ReceiptLine {
            name: name.to_string(),
            quantity,
            unit_price,
            line_total: unit_price * quantity as i64,
        });
    }

    Ok(Receipt {
        lines,
        tax_rate_bps: SALES_TAX.bps(),
        total,
    })
}
