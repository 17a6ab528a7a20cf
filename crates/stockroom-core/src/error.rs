//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Store / checkout rule violations               │
//! │  └── ValidationError  - Operator input that fails a rule               │
//! │                                                                         │
//! │  stockroom-cli errors (app crate)                                      │
//! │  └── CliError         - Console I/O failures, closed input             │
//! │                                                                         │
//! │  Neither CoreError nor ValidationError ever ends the session: the      │
//! │  console prints the message and re-prompts or returns to the menu.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every variant is exactly what the operator sees.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Store and checkout errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product carries the requested name (case-insensitive).
    #[error("Product not found!")]
    ProductNotFound(String),

    /// Requested more units than are on the shelf.
    ///
    /// ## User Workflow
    /// ```text
    /// Purchase garlic (qty: 25)
    ///      │
    ///      ▼
    /// Check stock: available=20
    ///      │
    ///      ▼
    /// InsufficientStock { name: "garlic", available: 20, requested: 25 }
    ///      │
    ///      ▼
    /// Console shows: "Insufficient stock for garlic. Available: 20"
    /// ```
    #[error("Insufficient stock for {name}. Available: {available}")]
    InsufficientStock {
        name: String,
        available: u64,
        requested: u64,
    },

    /// Restocking would push the quantity past `u64::MAX`.
    #[error("Quantity for {name} cannot grow past {max}")]
    QuantityOverflow { name: String, max: u64 },

    /// Adding a line cost would push the bill past what a `Money` can hold.
    #[error("Bill total too large to record for {name}")]
    BillOverflow { name: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Operator input validation errors.
///
/// `field` names the prompt the text was entered for; it is carried for
/// logging and left out of the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Blank (or whitespace-only) text.
    #[error("Input cannot be empty. Please try again.")]
    Required { field: &'static str },

    /// Descriptive text made only of digits.
    #[error("Input cannot be a number. Please enter text.")]
    NumericText { field: &'static str },

    /// Text that does not parse as a whole number.
    #[error("Invalid input. Please enter a whole number.")]
    NotANumber { field: &'static str, input: String },

    /// Zero or a negative whole number.
    #[error("Value must be a positive integer!")]
    MustBePositive { field: &'static str, value: i128 },

    /// A whole number too large to store.
    #[error("Value must be at most {max}.")]
    TooLarge { field: &'static str, max: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
