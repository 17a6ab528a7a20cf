//! # Checkout
//!
//! The purchase flow: collect line items against live stock, then settle.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout Lifecycle                              │
//! │                                                                         │
//! │   Checkout::new(&mut inventory)                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   ┌──────────────┐  purchase(name, qty)                                 │
//! │   │  COLLECTING  │◄──────────────────┐                                  │
//! │   │              │───────────────────┘                                  │
//! │   │  • unknown name   → ProductNotFound   (no charge)                   │
//! │   │  • qty > stock    → InsufficientStock (no charge, no decrement)     │
//! │   │  • bill overflows → BillOverflow      (no charge, no decrement)     │
//! │   │  • otherwise      → stock -= qty, bill += price × qty               │
//! │   └──────┬───────┘                                                      │
//! │          │ settle(self)   ← consumes the checkout: no way back          │
//! │          ▼                                                              │
//! │   ┌──────────────┐                                                      │
//! │   │   SETTLED    │  Receipt { lines, total, removed, remaining }        │
//! │   │              │  every qty == 0 record purged from the store         │
//! │   └──────────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Buying the same item twice is fine: each purchase re-reads the already
//! decremented quantity. A record that hits zero stays in the store (still
//! matchable, with nothing available) until `settle` runs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::Product;
use crate::validation::normalize_key;

// =============================================================================
// Line Item
// =============================================================================

/// One accepted purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub product_id: Uuid,
    /// Product name as stored (not as typed).
    pub name: String,
    pub quantity: u64,
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub cost: Money,
    /// This purchase emptied the shelf.
    pub sold_out: bool,
}

// =============================================================================
// Receipt
// =============================================================================

/// Outcome of settling a checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub lines: Vec<LineItem>,
    pub total: Money,
    /// Records purged because their quantity reached zero.
    pub removed: Vec<Product>,
    /// Store size after the purge.
    pub remaining: usize,
    pub settled_at: DateTime<Utc>,
}

// =============================================================================
// Checkout
// =============================================================================

/// A purchase session in the Collecting state.
///
/// Holds the store mutably for its whole life, so nothing else can touch
/// stock between the first purchase and settlement.
#[derive(Debug)]
pub struct Checkout<'a> {
    inventory: &'a mut Inventory,
    lines: Vec<LineItem>,
    total: Money,
}

impl<'a> Checkout<'a> {
    pub fn new(inventory: &'a mut Inventory) -> Self {
        Checkout {
            inventory,
            lines: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Buys `quantity` units of the FIRST product named `name`.
    ///
    /// ## Errors
    /// - `Validation` if `quantity` is zero
    /// - `ProductNotFound` if no record matches
    /// - `InsufficientStock` if the shelf holds fewer than `quantity`
    /// - `BillOverflow` if the running bill cannot absorb the line cost
    ///
    /// On error neither the store nor the bill changes.
    pub fn purchase(&mut self, name: &str, quantity: u64) -> CoreResult<LineItem> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity",
                value: 0,
            }
            .into());
        }

        let key = normalize_key(name);
        let product = self
            .inventory
            .find_first_mut(&key)
            .ok_or_else(|| CoreError::ProductNotFound(key.clone()))?;

        if !product.can_sell(quantity) {
            debug!(
                name = %product.name,
                available = product.quantity,
                requested = quantity,
                "insufficient stock"
            );
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }

        let Some((cost, total)) = product
            .price
            .checked_mul(quantity)
            .and_then(|cost| Some((cost, self.total.checked_add(cost)?)))
        else {
            warn!(
                name = %product.name,
                quantity,
                running_total = %self.total,
                "bill overflow"
            );
            return Err(CoreError::BillOverflow {
                name: product.name.clone(),
            });
        };

        product.quantity -= quantity;
        let line = LineItem {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
            cost,
            sold_out: product.is_sold_out(),
        };

        self.total = total;
        self.lines.push(line.clone());

        debug!(
            product_id = %line.product_id,
            name = %line.name,
            quantity,
            cost = %cost,
            running_total = %self.total,
            "line item accepted"
        );
        Ok(line)
    }

    /// The running bill.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Read access to the store mid-checkout.
    pub fn inventory(&self) -> &Inventory {
        self.inventory
    }

    /// Closes the checkout: purges sold-out records and produces the receipt.
    pub fn settle(self) -> Receipt {
        let removed = self.inventory.purge_sold_out();
        let receipt = Receipt {
            lines: self.lines,
            total: self.total,
            removed,
            remaining: self.inventory.len(),
            settled_at: Utc::now(),
        };

        info!(
            lines = receipt.lines.len(),
            total = %receipt.total,
            removed = receipt.removed.len(),
            remaining = receipt.remaining,
            "checkout settled"
        );
        receipt
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
