//! # Commands
//!
//! One function per menu entry. Each takes the console and the store,
//! prints its own results, and returns nothing the menu needs.
//!
//! - [`product`] - display, add, remove, restock
//! - [`purchase`] - the purchase flow

pub mod product;
pub mod purchase;

pub use product::{
    add_product, display_by_category, display_inventory, display_total, remove_product,
    update_quantity,
};
pub use purchase::purchase_products;
