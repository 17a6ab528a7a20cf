//! # Inventory Store
//!
//! The ordered, in-memory list of product records.
//!
//! ## Store Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Menu Action          Method                   Store Change             │
//! │  ───────────          ──────                   ────────────             │
//! │                                                                         │
//! │  Add product ───────► add() ─────────────────► products.push(p)        │
//! │                                                                         │
//! │  Remove product ────► remove_by_name() ──────► retain: drops ALL       │
//! │                                                 records with that name  │
//! │                                                                         │
//! │  Update quantity ───► restock() ─────────────► FIRST match: qty += n   │
//! │                                                                         │
//! │  Purchase ──────────► Checkout (checkout.rs) ► FIRST match: qty -= n   │
//! │                       purge_sold_out() ──────► drops every qty == 0    │
//! │                                                                         │
//! │  Display / filter ──► iter(), by_category() ─► (read only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is display order
//! - Names are not unique; single-record operations act on the first match
//!   while removal takes every match
//! - Lookups are linear scans; the store is small

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::seed::seed_products;
use crate::types::{NewProduct, Product};
use crate::validation::normalize_key;

/// The inventory store.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty store.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Creates a store holding the launch catalogue.
    pub fn seeded() -> Self {
        Inventory {
            products: seed_products(),
        }
    }

    /// Number of product records.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Appends a new product at the end of the store.
    ///
    /// Duplicate names are allowed.
    pub fn add(&mut self, new: NewProduct) -> &Product {
        let product = Product::from(new);
        info!(
            product_id = %product.id,
            name = %product.name,
            quantity = product.quantity,
            "product added"
        );
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    /// Removes every product whose name matches `name` case-insensitively.
    ///
    /// ## Returns
    /// How many records were removed (0 when nothing matched).
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let key = normalize_key(name);
        let before = self.products.len();
        self.products.retain(|p| !p.has_name(&key));
        let removed = before - self.products.len();

        info!(name = %key, removed, remaining = self.products.len(), "remove by name");
        removed
    }

    /// Adds `amount` units to the FIRST product named `name`.
    ///
    /// ## Errors
    /// - `ProductNotFound` if no record matches
    /// - `QuantityOverflow` if the new quantity would not fit
    pub fn restock(&mut self, name: &str, amount: u64) -> CoreResult<&Product> {
        let key = normalize_key(name);
        let product = self
            .find_first_mut(&key)
            .ok_or_else(|| CoreError::ProductNotFound(key.clone()))?;

        let Some(quantity) = product.quantity.checked_add(amount) else {
            return Err(CoreError::QuantityOverflow {
                name: product.name.clone(),
                max: u64::MAX,
            });
        };
        product.quantity = quantity;

        info!(
            product_id = %product.id,
            name = %product.name,
            quantity,
            "product restocked"
        );
        Ok(&*product)
    }

    /// Products whose category equals `category` case-insensitively, in
    /// store order. Exact match only.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        let key = normalize_key(category);
        self.products.iter().filter(|p| p.in_category(&key)).collect()
    }

    /// First product whose name equals the normalised `key`.
    pub fn find_first(&self, key: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.has_name(key))
    }

    pub(crate) fn find_first_mut(&mut self, key: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.has_name(key))
    }

    /// Drops every product with quantity zero.
    ///
    /// ## Returns
    /// The removed records, in the order they sat in the store.
    pub fn purge_sold_out(&mut self) -> Vec<Product> {
        let (sold_out, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.products)
            .into_iter()
            .partition(Product::is_sold_out);
        self.products = kept;

        for product in &sold_out {
            debug!(product_id = %product.id, name = %product.name, "purged sold-out product");
        }
        sold_out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use proptest::prelude::*;

    fn new_product(name: &str, price: u64, quantity: u64, category: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Money::from_rupees(price),
            quantity,
            category: category.to_string(),
        }
    }

    fn names(inventory: &Inventory) -> Vec<&str> {
        inventory.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut inventory = Inventory::seeded();
        let added = inventory.add(new_product("Kale", 15, 5, "Leafy green"));
        assert_eq!(added.name, "Kale");

        assert_eq!(inventory.len(), 11);
        let last = &inventory.products()[10];
        assert_eq!(last.name, "Kale");
        assert_eq!(last.price, Money::from_rupees(15));
        assert_eq!(last.quantity, 5);
        assert_eq!(last.category, "Leafy green");
    }

    #[test]
    fn test_add_allows_duplicate_names() {
        let mut inventory = Inventory::seeded();
        inventory.add(new_product("lettuce", 12, 3, "Leafy green"));
        assert_eq!(inventory.iter().filter(|p| p.has_name("lettuce")).count(), 2);
    }

    #[test]
    fn test_category_filter_is_exact_and_ordered() {
        let mut inventory = Inventory::seeded();
        inventory.add(new_product("Kale", 15, 5, "Leafy green"));

        let leafy: Vec<&str> = inventory
            .by_category("  leafy GREEN ")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(leafy, vec!["lettuce", "spinach", "garlic", "Kale"]);

        assert!(inventory.by_category("leafy").is_empty());
        assert!(inventory.by_category("").is_empty());
    }

    #[test]
    fn test_remove_by_name_takes_every_match() {
        let mut inventory = Inventory::seeded();
        inventory.add(new_product("LETTUCE", 12, 3, "Leafy green"));

        assert_eq!(inventory.remove_by_name(" Lettuce "), 2);
        assert_eq!(inventory.len(), 9);
        assert!(inventory.find_first("lettuce").is_none());
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let mut inventory = Inventory::seeded();
        let before = inventory.products().to_vec();

        assert_eq!(inventory.remove_by_name("kale"), 0);
        assert_eq!(inventory.products(), before.as_slice());
    }

    #[test]
    fn test_restock_updates_first_match_only() {
        let mut inventory = Inventory::seeded();
        inventory.add(new_product("lettuce", 12, 3, "Leafy green"));
        let first_id = inventory.products()[0].id;

        let updated = inventory.restock("LETTUCE", 5).unwrap();
        assert_eq!(updated.id, first_id);
        assert_eq!(updated.quantity, 55);
        assert_eq!(inventory.products()[10].quantity, 3);
    }

    #[test]
    fn test_restock_unknown_name() {
        let mut inventory = Inventory::seeded();
        let before = inventory.products().to_vec();

        let err = inventory.restock("kale", 5).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("kale".to_string()));
        assert_eq!(inventory.products(), before.as_slice());
    }

    #[test]
    fn test_restock_overflow_leaves_quantity() {
        let mut inventory = Inventory::new();
        inventory.add(new_product("salt", 1, u64::MAX, "Mineral"));

        let err = inventory.restock("salt", 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { .. }));
        assert_eq!(inventory.products()[0].quantity, u64::MAX);
    }

    #[test]
    fn test_purge_sold_out_keeps_order() {
        let mut inventory = Inventory::seeded();
        inventory.products[0].quantity = 0;
        inventory.products[8].quantity = 0;

        let purged = inventory.purge_sold_out();
        let purged_names: Vec<&str> = purged.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(purged_names, vec!["lettuce", "garlic"]);
        assert_eq!(
            names(&inventory),
            vec![
                "cabbage",
                "pumpkin",
                "cauliflower",
                "zucchini",
                "yam",
                "spinach",
                "broccoli",
                "silverbeet"
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Property tests
    // -------------------------------------------------------------------------

    fn arb_new_product() -> impl Strategy<Value = NewProduct> {
        (
            "[A-Za-z][A-Za-z ]{0,15}",
            1u64..10_000,
            1u64..10_000,
            "[A-Za-z][A-Za-z ]{0,15}",
        )
            .prop_map(|(name, price, quantity, category)| {
                new_product(&name, price, quantity, &category)
            })
    }

    proptest! {
        /// Property: every add grows the store by one and stores the inputs as given.
        #[test]
        fn add_grows_by_one(products in prop::collection::vec(arb_new_product(), 1..20)) {
            let mut inventory = Inventory::seeded();
            for (i, new) in products.iter().enumerate() {
                inventory.add(new.clone());
                prop_assert_eq!(inventory.len(), 10 + i + 1);

                let last = &inventory.products()[inventory.len() - 1];
                prop_assert_eq!(&last.name, &new.name);
                prop_assert_eq!(last.price, new.price);
                prop_assert_eq!(last.quantity, new.quantity);
                prop_assert_eq!(&last.category, &new.category);
            }
        }

        /// Property: remove drops exactly the matching records.
        #[test]
        fn remove_drops_all_matches(
            extra in prop::collection::vec(arb_new_product(), 0..10),
            pick in 0usize..10,
        ) {
            let mut inventory = Inventory::seeded();
            for new in extra {
                inventory.add(new);
            }
            let target = inventory.products()[pick].name.to_uppercase();
            let key = normalize_key(&target);
            let matches = inventory.iter().filter(|p| p.has_name(&key)).count();
            let before = inventory.len();

            prop_assert_eq!(inventory.remove_by_name(&target), matches);
            prop_assert_eq!(inventory.len(), before - matches);
            prop_assert!(inventory.find_first(&key).is_none());
        }

        /// Property: restock touches only the first match.
        #[test]
        fn restock_changes_one_record(pick in 0usize..10, amount in 1u64..1_000) {
            let mut inventory = Inventory::seeded();
            let before = inventory.products().to_vec();
            let name = before[pick].name.clone();

            inventory.restock(&name, amount).unwrap();

            for (i, (old, new)) in before.iter().zip(inventory.products()).enumerate() {
                if i == pick {
                    prop_assert_eq!(new.quantity, old.quantity + amount);
                } else {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }
}
