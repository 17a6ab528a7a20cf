//! # Menu Loop
//!
//! Prints the numbered menu, reads a choice and dispatches to a command
//! until the operator picks Exit.

use std::io::{BufRead, Write};

use stockroom_core::Inventory;
use tracing::{debug, info};

use crate::commands;
use crate::console::Console;
use crate::error::CliResult;

const MENU: &[&str] = &[
    "====== Inventory System ======",
    "1. Display total number of products",
    "2. Add a new product",
    "3. Display all products",
    "4. Display products by category",
    "5. Remove a product",
    "6. Update product quantity",
    "7. Purchase products",
    "8. Exit",
];

const CHOICE_PROMPT: &str = "Enter your choice: ";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowTotal,
    AddProduct,
    ShowInventory,
    ShowCategory,
    RemoveProduct,
    UpdateQuantity,
    Purchase,
    Exit,
}

impl MenuChoice {
    /// Maps the operator's (trimmed) answer to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::ShowTotal,
            "2" => MenuChoice::AddProduct,
            "3" => MenuChoice::ShowInventory,
            "4" => MenuChoice::ShowCategory,
            "5" => MenuChoice::RemoveProduct,
            "6" => MenuChoice::UpdateQuantity,
            "7" => MenuChoice::Purchase,
            "8" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Runs the menu until Exit is chosen.
///
/// The store is borrowed for the whole loop and lent to each command in turn.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    loop {
        for line in MENU {
            console.say(line)?;
        }
        let answer = console.read_line(CHOICE_PROMPT)?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            debug!(answer = %answer, "invalid menu choice");
            console.say("Invalid choice, please try again.\n")?;
            continue;
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::ShowTotal => commands::display_total(console, inventory)?,
            MenuChoice::AddProduct => commands::add_product(console, inventory)?,
            MenuChoice::ShowInventory => commands::display_inventory(console, inventory)?,
            MenuChoice::ShowCategory => commands::display_by_category(console, inventory)?,
            MenuChoice::RemoveProduct => commands::remove_product(console, inventory)?,
            MenuChoice::UpdateQuantity => commands::update_quantity(console, inventory)?,
            MenuChoice::Purchase => commands::purchase_products(console, inventory)?,
            MenuChoice::Exit => {
                console.say("Exiting the program.")?;
                info!(products = inventory.len(), "session finished");
                return Ok(());
            }
        }
    }
}
