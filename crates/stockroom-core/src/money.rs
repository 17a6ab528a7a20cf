//! # Money Module
//!
//! Provides the `Money` type for prices, line costs and bill totals.
//!
//! ## Whole Rupees Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are entered as positive whole numbers of rupees.               │
//! │  Quantities are whole units.                                            │
//! │                                                                         │
//! │    price × quantity  ──►  always a whole number of rupees              │
//! │    Σ line costs      ──►  always a whole number of rupees              │
//! │                                                                         │
//! │  So the "rounded" bill is the integer itself: no floats anywhere.      │
//! │                                                                         │
//! │  Stored as u128: any u64 price × u64 quantity fits exactly.            │
//! │  Arithmetic is checked; callers decide what an overflow means.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_rupees(10);
//! let cost = price.checked_mul(50).unwrap();
//! assert_eq!(cost.rupees(), 500);
//! assert_eq!(cost.to_string(), "500 RS");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CURRENCY_SUFFIX;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole rupees.
///
/// ## Design Decisions
/// - **u64 in, u128 inside**: prices enter as u64, so a single line cost
///   never overflows
/// - **No operator impls**: every sum and product goes through a `checked_*`
///   method, so a wrong figure can never be printed silently
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u128);

impl Money {
    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: u64) -> Self {
        Money(rupees as u128)
    }

    /// Returns the amount in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> u128 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: lettuce 10 RS
    /// Quantity: 50
    ///      │
    ///      ▼
    /// checked_mul(50) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Cost: 500 RS
    /// ```
    ///
    /// `None` only when `self` already exceeds `u64::MAX`.
    #[inline]
    pub const fn checked_mul(self, qty: u64) -> Option<Self> {
        match self.0.checked_mul(qty as u128) {
            Some(value) => Some(Money(value)),
            None => None,
        }
    }

    /// Adds two amounts, `None` past `u128::MAX`.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(value) => Some(Money(value)),
            None => None,
        }
    }

    /// The amount rounded to the nearest whole rupee.
    ///
    /// Amounts are already whole, so this is the identity; it names the step
    /// the bill printout performs.
    #[inline]
    pub const fn rounded(&self) -> u128 {
        self.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `<n> RS`, the fixed unit suffix used on every printed amount.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, CURRENCY_SUFFIX)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
