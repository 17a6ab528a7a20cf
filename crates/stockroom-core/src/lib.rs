//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate holds every inventory rule as plain functions over an in-memory
//! store, with zero console I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockroom-cli (console app)                     │   │
//! │  │   Menu loop ──► prompts / readers ──► printed results           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Inventory                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │ checkout  │  │ validation│  │   │
//! │  │   │  Product  │  │ Inventory │  │ Checkout  │  │   rules   │  │   │
//! │  │   │   Money   │  │   seed    │  │  Receipt  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO FILES • NO NETWORK                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product records
//! - [`money`] - Whole-rupee `Money`
//! - [`inventory`] - The ordered store and its mutations
//! - [`checkout`] - Purchase collection and settlement
//! - [`seed`] - Launch catalogue
//! - [`validation`] - Operator input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Checkout, Inventory};
//!
//! let mut inventory = Inventory::seeded();
//! let mut checkout = Checkout::new(&mut inventory);
//! checkout.purchase("lettuce", 50).unwrap();
//!
//! let receipt = checkout.settle();
//! assert_eq!(receipt.total.to_string(), "500 RS");
//! assert_eq!(inventory.len(), 9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod inventory;
pub mod money;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{Checkout, LineItem, Receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use types::{NewProduct, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Unit suffix printed after every amount.
pub const CURRENCY_SUFFIX: &str = "RS";

/// What the operator types to finish a purchase.
pub const DONE_SENTINEL: &str = "done";
