//! # Purchase Command
//!
//! Drives a [`Checkout`] from the console.
//!
//! ## Flow
//! ```text
//! "Product name (or type 'done'): " ◄──────────────────────────┐
//!      │                                                        │
//!      ├── "done" ──► settle ──► bill, sold-out notices, count  │
//!      │                                                        │
//!      ▼                                                        │
//! "Quantity to purchase (whole number): "                       │
//!      │                                                        │
//!      ▼                                                        │
//! checkout.purchase() ──► line cost / not found / short stock ──┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::{Checkout, Inventory, Receipt, CURRENCY_SUFFIX, DONE_SENTINEL};
use tracing::{info, warn};

use crate::console::{Console, Prompt};
use crate::error::CliResult;

const ITEM_PROMPT: &str = "Product name (or type 'done'): ";
const QUANTITY: Prompt = Prompt::new("purchase quantity", "Quantity to purchase (whole number): ");

/// Runs one purchase session against the store.
///
/// The checkout is always settled, even when input closes mid-way, so no
/// zero-quantity record outlives this call.
pub fn purchase_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let mut checkout = Checkout::new(inventory);

    console.say("Enter products to purchase. Type 'done' when finished.")?;
    let collected = collect_items(console, &mut checkout);
    let receipt = checkout.settle();
    collected?;

    console.say(format_args!(
        "\nTotal bill (rounded): {} {}\n",
        receipt.total.rounded(),
        CURRENCY_SUFFIX
    ))?;
    for product in &receipt.removed {
        console.say(format_args!(
            "Removing {} from inventory as it is sold out.",
            product.name
        ))?;
    }
    console.say(format_args!(
        "Total number of products remaining: {}",
        receipt.remaining
    ))?;

    log_receipt(&receipt);
    Ok(())
}

/// The Collecting phase: loops until the operator types the sentinel.
fn collect_items<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    checkout: &mut Checkout<'_>,
) -> CliResult<()> {
    loop {
        let item = console.read_line(ITEM_PROMPT)?;
        if item.to_lowercase() == DONE_SENTINEL {
            return Ok(());
        }

        let quantity = console.read_positive_integer(QUANTITY)?;
        match checkout.purchase(&item, quantity) {
            Ok(line) => {
                console.say(format_args!(
                    "Added {} of {} to purchase (Cost: {}).",
                    line.quantity, line.name, line.cost
                ))?;
                if line.sold_out {
                    console.say(format_args!(
                        "{} is sold out and will be removed from inventory.",
                        line.name
                    ))?;
                }
            }
            Err(err) => console.say(err)?,
        }
    }
}

fn log_receipt(receipt: &Receipt) {
    match serde_json::to_string(receipt) {
        Ok(json) => info!(receipt = %json, "purchase receipt"),
        Err(err) => warn!(error = %err, "could not serialise receipt"),
    }
}
