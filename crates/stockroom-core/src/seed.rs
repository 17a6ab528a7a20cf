//! # Seed Catalogue
//!
//! The ten products every session starts with.
//!
//! Each row is `(name, price in rupees, quantity, category)`. A restart always
//! comes back to exactly this list, in this order.

use crate::money::Money;
use crate::types::Product;

/// Launch stock, in display order.
pub const SEED_PRODUCTS: &[(&str, u64, u64, &str)] = &[
    ("lettuce", 10, 50, "Leafy green"),
    ("cabbage", 20, 100, "Cruciferous"),
    ("pumpkin", 30, 30, "Marrow"),
    ("cauliflower", 10, 25, "Cruciferous"),
    ("zucchini", 20, 50, "Marrow"),
    ("yam", 30, 50, "Root"),
    ("spinach", 10, 100, "Leafy green"),
    ("broccoli", 20, 75, "Cruciferous"),
    ("garlic", 30, 20, "Leafy green"),
    ("silverbeet", 10, 50, "Marrow"),
];

/// Builds fresh product records from [`SEED_PRODUCTS`].
pub fn seed_products() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|&(name, price, quantity, category)| {
            Product::new(name, Money::from_rupees(price), quantity, category)
        })
        .collect()
}
