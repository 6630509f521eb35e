//! # Cart Math
//!
//! The pure shopping-cart model. The UI-facing wrapper (open/closed overlay
//! flag, shared ownership) lives in `maison-state`; this module is only the
//! collection and its invariants.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation               Cart Change           │
//! │  ───────────────          ─────────               ───────────           │
//! │                                                                         │
//! │  Click "Add to cart" ────► add(&product) ───────► merge or push        │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► set / remove         │
//! │                                                                         │
//! │  Click remove ───────────► remove(id) ──────────► retain(≠ id)         │
//! │                                                                         │
//! │  Checkout completes ─────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Totals are derived on every read; nothing here is cached.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one item per distinct product id (adding an already-present
//!   product increments its quantity instead of duplicating)
//! - Quantity of a present item is always >= 1; an update that would drive
//!   it to 0 or below removes the item instead
//! - Quantities are capped at [`MAX_ITEM_QUANTITY`](crate::MAX_ITEM_QUANTITY)
//!   as a sanity bound, and deliberately NOT clamped to `Product.stock`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, Product};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Snapshot Semantics
/// Everything except `quantity` is a frozen copy of the product at the time
/// it was added. If an administrator later changes the product's price, the
/// cart keeps displaying (and totaling) the price the shopper saw. This is a
/// known stale-price tradeoff, acceptable for a demo storefront.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id (reference to the catalog).
    pub product_id: u64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Image reference at time of adding (frozen).
    pub image: String,

    /// Category at time of adding (frozen).
    pub category: Category,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1 while the item exists.
    pub quantity: i64,

    /// When this item was added to cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a product, freezing its fields.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category,
            unit_price_cents: product.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, in insertion order.
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += 1 (saturating at the cap)
    /// - Product not in cart: new item with quantity 1, price frozen now
    ///
    /// ## Errors
    /// Fails only when a NEW distinct item would push the cart past
    /// `MAX_CART_ITEMS`; incrementing an existing item never fails.
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = (item.quantity + 1).min(MAX_ITEM_QUANTITY);
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(ValidationError::OutOfRange {
                field: "cart items",
                min: 0,
                max: MAX_CART_ITEMS as i64,
            }
            .into());
        }

        self.items.push(CartItem::from_product(product, 1));
        Ok(())
    }

    /// Sets the quantity of an item.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`remove`](Cart::remove)
    /// - Otherwise: quantity is set, clamped to the sanity cap
    /// - Product not in cart: no-op (idempotent with the removal path)
    pub fn update_quantity(&mut self, product_id: u64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity.min(MAX_ITEM_QUANTITY);
        }
    }

    /// Removes an item from the cart by product id. No-op when absent.
    pub fn remove(&mut self, product_id: u64) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all items (called after a successful checkout).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products in the cart.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Total unit count (sum of quantities, not distinct items).
    ///
    /// Recomputed on every read; never cached.
    pub fn count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total: Σ unit_price × quantity.
    ///
    /// Recomputed on every read; never cached.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn test_product(id: u64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price_cents,
            image: format!("/images/{}.jpg", id),
            category: Category::Dresses,
            rating: 5,
            stock: 10,
            sales: 0,
            visible: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 999); // $9.99

        cart.add(&product).unwrap();

        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), Money::from_cents(999));
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add(&product).unwrap();
        cart.add(&product).unwrap();
        cart.add(&product).unwrap();

        assert_eq!(cart.unique_items(), 1); // Still one unique item
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Money::from_cents(2997));
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 1000);

        cart.add(&product).unwrap();

        // Price change after add does not re-sync the cart.
        product.price_cents = 9999;
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 500);

        cart.add(&product).unwrap();
        cart.update_quantity(1, 4);

        assert_eq!(cart.count(), 4);
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = test_product(1, 500);

        cart.add(&product).unwrap();
        cart.update_quantity(1, 0);
        assert!(cart.is_empty());

        // Idempotent: a second removal-by-zero is a no-op.
        cart.update_quantity(1, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        let product = test_product(1, 500);

        cart.add(&product).unwrap();
        cart.update_quantity(1, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity(42, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_clamped_to_cap() {
        let mut cart = Cart::new();
        let product = test_product(1, 100);

        cart.add(&product).unwrap();
        cart.update_quantity(1, 5000);
        assert_eq!(cart.count(), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        let product = test_product(1, 500);

        cart.add(&product).unwrap();
        cart.remove(99);
        assert_eq!(cart.unique_items(), 1);
    }

    #[test]
    fn test_no_duplicate_product_ids() {
        let mut cart = Cart::new();
        let a = test_product(1, 100);
        let b = test_product(2, 200);

        cart.add(&a).unwrap();
        cart.add(&b).unwrap();
        cart.add(&a).unwrap();
        cart.update_quantity(2, 7);

        let mut ids: Vec<u64> = cart.items().iter().map(|i| i.product_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.unique_items());

        // count always equals the sum of quantities
        let sum: i64 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.count(), sum);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100)).unwrap();
        cart.add(&test_product(2, 200)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.count(), 0);
    }
}
