//! # Cart State
//!
//! Thread-safe handle around the shopping cart, plus the drawer open/closed
//! flag the UI binds to.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI callbacks may access/modify the cart
//! 2. Only one callback should modify the cart at a time
//! 3. Callbacks can run concurrently
//!
//! The drawer flag is a plain `AtomicBool`; it never needs to be consistent
//! with the cart contents, so it does not share the lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use maison_core::{Cart, Money};

/// Shared cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    open: AtomicBool,
}

impl CartState {
    /// Creates an empty cart with the drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Total quantity across all lines.
    pub fn count(&self) -> i64 {
        self.with_cart(|cart| cart.count())
    }

    /// Sum of line totals.
    pub fn total(&self) -> Money {
        self.with_cart(|cart| cart.total())
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    /// Opens or closes the cart drawer. Purely presentational; the cart
    /// contents are untouched.
    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Relaxed);
    }

    /// Flips the drawer; returns the new state.
    pub fn toggle_open(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::Relaxed)
    }
}
