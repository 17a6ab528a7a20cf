//! # Product Commands
//!
//! Listing, filtering, adding, removing and restocking products.
//!
//! ## Name Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator types " LETTUCE "                                            │
//! │       │  trim + lowercase                                               │
//! │       ▼                                                                 │
//! │  key = "lettuce"                                                        │
//! │       │                                                                 │
//! │       ├── remove_product  ──► drops EVERY record named lettuce          │
//! │       └── update_quantity ──► restocks the FIRST record named lettuce   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::normalize_key;
use stockroom_core::{Inventory, Money, NewProduct};
use tracing::{debug, warn};

use crate::console::{Console, Prompt};
use crate::error::CliResult;

const NAME: Prompt = Prompt::new("name", "Name: ");
const PRICE: Prompt = Prompt::new("price", "Price in Rs: ");
const QUANTITY: Prompt = Prompt::new("quantity", "Quantity (whole number): ");
const CATEGORY: Prompt = Prompt::new("type", "Type: ");
const RESTOCK_AMOUNT: Prompt = Prompt::new("restock amount", "Enter the quantity to add: ");

const CATEGORY_PROMPT: &str = "Enter category to display (e.g., Leafy green): ";
const REMOVE_PROMPT: &str = "Enter the product name to remove: ";
const UPDATE_PROMPT: &str = "Enter the product name to update quantity: ";

const NOT_FOUND: &str = "Product not found!";

/// Prints every product, one record line each, in store order.
pub fn display_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> CliResult<()> {
    console.say("\nCurrent Inventory:")?;
    for product in inventory.iter() {
        console.say(product)?;
    }
    console.blank()
}

/// Prints how many records the store holds.
pub fn display_total<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> CliResult<()> {
    console.say(format_args!("Total number of products: {}\n", inventory.len()))
}

/// Asks for a category and prints the products in it.
///
/// The match is exact after trimming and lowercasing both sides.
pub fn display_by_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> CliResult<()> {
    let category = normalize_key(&console.read_line(CATEGORY_PROMPT)?);
    console.say(format_args!("\nProducts in category '{category}':"))?;

    let matches = inventory.by_category(&category);
    debug!(category = %category, matches = matches.len(), "category filter");

    if matches.is_empty() {
        console.say("No products found in this category.")?;
    }
    for product in matches {
        console.say(product)?;
    }
    console.blank()
}

/// Collects a new product's details and appends it to the store.
///
/// Confirms by printing the whole inventory and the new total.
pub fn add_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    console.say("Enter new product details:")?;
    let name = console.read_non_numeric_text(NAME)?;
    let price = console.read_positive_integer(PRICE)?;
    let quantity = console.read_positive_integer(QUANTITY)?;
    let category = console.read_non_numeric_text(CATEGORY)?;

    inventory.add(NewProduct {
        name,
        price: Money::from_rupees(price),
        quantity,
        category,
    });

    console.say("Product added successfully!")?;
    display_inventory(console, inventory)?;
    display_total(console, inventory)
}

/// Removes every product with the given name.
pub fn remove_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let name = normalize_key(&console.read_line(REMOVE_PROMPT)?);

    if inventory.remove_by_name(&name) > 0 {
        console.say(format_args!("{} removed from inventory.", capitalize(&name)))?;
    } else {
        console.say(NOT_FOUND)?;
    }
    console.say(format_args!("Total products remaining: {}\n", inventory.len()))
}

/// Adds stock to the first product with the given name.
///
/// The amount is asked for even when the name is unknown.
pub fn update_quantity<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let name = console.read_line(UPDATE_PROMPT)?;
    let amount = console.read_positive_integer(RESTOCK_AMOUNT)?;

    match inventory.restock(&name, amount) {
        Ok(product) => {
            console.say(format_args!(
                "Updated {} quantity: {}",
                product.name, product.quantity
            ))?;
        }
        Err(err) => {
            warn!(name = %name, amount, error = %err, "restock rejected");
            console.say(err)?;
        }
    }
    console.blank()
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
