//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   NewProduct    │──►│    Product      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  name           │   │  id (UUID)      │                             │
//! │  │  price          │   │  name           │                             │
//! │  │  quantity       │   │  price (Money)  │                             │
//! │  │  category       │   │  quantity       │                             │
//! │  └─────────────────┘   │  category       │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - `id`: UUID v4, only for log correlation
//! - `name`: how the operator refers to a product; not unique, compared
//!   case-insensitively

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;
use crate::validation::normalize_key;

// =============================================================================
// Product
// =============================================================================

/// A product record held in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Display name as entered. Not unique.
    pub name: String,

    /// Unit price in whole rupees.
    pub price: Money,

    /// Units on the shelf.
    pub quantity: u64,

    /// Free-text category ("type"), e.g. "Leafy green".
    pub category: String,
}

impl Product {
    /// Creates a product with a fresh id.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: u64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    /// Case-insensitive name match against an already-normalised key.
    #[inline]
    pub fn has_name(&self, key: &str) -> bool {
        normalize_key(&self.name) == key
    }

    /// Case-insensitive exact category match against a normalised key.
    #[inline]
    pub fn in_category(&self, key: &str) -> bool {
        normalize_key(&self.category) == key
    }

    /// Checks if the shelf holds at least `quantity` units.
    #[inline]
    pub fn can_sell(&self, quantity: u64) -> bool {
        self.quantity >= quantity
    }

    #[inline]
    pub fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }
}

/// The record line: `<name> | <price> RS | <quantity> | <type>`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.name, self.price, self.quantity, self.category
        )
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Validated fields for a product about to be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    pub quantity: u64,
    pub category: String,
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Product::new(new.name, new.price, new.quantity, new.category)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
