//! # Checkout Flow
//!
//! Stage machine walking an order from the details form to completion.
//!
//! ## Stages
//! ```text
//! begin(cart)        proceed_to_payment()   submit_payment()   place_order()
//!     │                      │                     │                 │
//!     ▼                      ▼                     ▼                 ▼
//!  Details ─────────────► Payment ──────────► Processing ──────► Complete
//! ```
//!
//! `place_order` is the only stage transition with side effects: it snapshots
//! the cart into an [`OrderSummary`], records a sale against the catalog for
//! every line, and clears the cart. Everything before it is form navigation.
//!
//! Transitions out of order fail with a `CHECKOUT_ERROR`; the flow stays in
//! its current stage.

use serde::Serialize;
use tracing::info;
use ts_rs::TS;

use maison_core::{Cart, CartItem};
use maison_store::CatalogStore;

use crate::cart::CartState;
use crate::error::UiError;

/// Where the shopper is in the checkout flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStage {
    #[default]
    Details,
    Payment,
    Processing,
    Complete,
}

/// Frozen copy of the cart at the moment the order was placed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<CartItem>,
    pub item_count: i64,
    pub total_cents: i64,
}

impl From<&Cart> for OrderSummary {
    fn from(cart: &Cart) -> Self {
        OrderSummary {
            items: cart.items().to_vec(),
            item_count: cart.count(),
            total_cents: cart.total().cents(),
        }
    }
}

/// A single checkout attempt.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    summary: Option<OrderSummary>,
}

impl CheckoutFlow {
    /// Starts a checkout for a non-empty cart.
    pub fn begin(cart_state: &CartState) -> Result<Self, UiError> {
        if cart_state.with_cart(|cart| cart.is_empty()) {
            return Err(UiError::checkout("Cannot check out an empty cart"));
        }
        Ok(CheckoutFlow::default())
    }

    /// The current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The placed order, available once the flow is complete.
    pub fn summary(&self) -> Option<&OrderSummary> {
        self.summary.as_ref()
    }

    /// Details form submitted; move to payment.
    pub fn proceed_to_payment(&mut self) -> Result<(), UiError> {
        self.transition(CheckoutStage::Details, CheckoutStage::Payment)
    }

    /// Payment form submitted; move to processing.
    pub fn submit_payment(&mut self) -> Result<(), UiError> {
        self.transition(CheckoutStage::Payment, CheckoutStage::Processing)
    }

    /// Finalizes the order: snapshots the cart, records the sales against
    /// the catalog, clears the cart and moves to `Complete`.
    ///
    /// A line whose product has since been removed from the catalog is
    /// skipped rather than failing the whole order; the cart held a snapshot
    /// and the shopper already paid for it.
    pub fn place_order(
        &mut self,
        cart_state: &CartState,
        catalog: &mut CatalogStore,
    ) -> Result<OrderSummary, UiError> {
        if self.stage != CheckoutStage::Processing {
            return Err(UiError::checkout(format!(
                "Cannot place an order from the {:?} stage",
                self.stage
            )));
        }

        let summary = cart_state.with_cart(|cart| OrderSummary::from(cart));
        for item in &summary.items {
            if catalog.get(item.product_id).is_none() {
                tracing::warn!(
                    product_id = item.product_id,
                    "Ordered product no longer in catalog; sale not recorded"
                );
                continue;
            }
            catalog.record_sale(item.product_id, item.quantity)?;
        }

        cart_state.with_cart_mut(|cart| cart.clear());
        self.stage = CheckoutStage::Complete;
        self.summary = Some(summary.clone());

        info!(
            items = summary.item_count,
            total_cents = summary.total_cents,
            "Order placed"
        );
        Ok(summary)
    }

    fn transition(&mut self, from: CheckoutStage, to: CheckoutStage) -> Result<(), UiError> {
        if self.stage != from {
            return Err(UiError::checkout(format!(
                "Expected the {:?} stage, currently in {:?}",
                from, self.stage
            )));
        }
        self.stage = to;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use maison_core::{Category, NewProduct};
    use maison_store::{MemoryBackend, Storage};

    fn catalog_with_product() -> (CatalogStore, u64) {
        let mut catalog = CatalogStore::load(Storage::new(MemoryBackend::default())).unwrap();
        let product = catalog
            .add(NewProduct {
                name: "Silk Scarf".to_string(),
                price_cents: 15_500,
                image: String::new(),
                category: Category::Accessories,
                stock: 10,
            })
            .unwrap();
        (catalog, product.id)
    }

    fn cart_with(catalog: &CatalogStore, id: u64, quantity: i64) -> CartState {
        let state = CartState::new();
        let product = catalog.get(id).unwrap().clone();
        state.with_cart_mut(|cart| {
            for _ in 0..quantity {
                cart.add(&product).unwrap();
            }
        });
        state
    }

    #[test]
    fn test_cannot_begin_with_empty_cart() {
        let err = CheckoutFlow::begin(&CartState::new()).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::CheckoutError);
    }

    #[test]
    fn test_full_flow_records_sales_and_clears_cart() {
        let (mut catalog, id) = catalog_with_product();
        let cart = cart_with(&catalog, id, 2);

        let mut flow = CheckoutFlow::begin(&cart).unwrap();
        flow.proceed_to_payment().unwrap();
        flow.submit_payment().unwrap();
        let summary = flow.place_order(&cart, &mut catalog).unwrap();

        assert_eq!(flow.stage(), CheckoutStage::Complete);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_cents, 31_000);
        assert_eq!(cart.count(), 0);

        let product = catalog.get(id).unwrap();
        assert_eq!(product.sales, 2);
        assert_eq!(product.stock, 8);
    }

    #[test]
    fn test_stages_cannot_be_skipped() {
        let (mut catalog, id) = catalog_with_product();
        let cart = cart_with(&catalog, id, 1);

        let mut flow = CheckoutFlow::begin(&cart).unwrap();
        assert!(flow.place_order(&cart, &mut catalog).is_err());
        assert!(flow.submit_payment().is_err());
        assert_eq!(flow.stage(), CheckoutStage::Details);

        // Cart untouched by the failed attempts.
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_removed_product_is_skipped() {
        let (mut catalog, id) = catalog_with_product();
        let cart = cart_with(&catalog, id, 1);
        catalog.remove(id).unwrap();

        let mut flow = CheckoutFlow::begin(&cart).unwrap();
        flow.proceed_to_payment().unwrap();
        flow.submit_payment().unwrap();
        let summary = flow.place_order(&cart, &mut catalog).unwrap();

        // The order still completes off the cart snapshot.
        assert_eq!(summary.item_count, 1);
        assert_eq!(cart.count(), 0);
    }
}
