//! # maison-core: Pure Business Logic for the Maison Storefront
//!
//! This crate is the **heart** of the Maison demo boutique. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Maison Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (client-rendered)                      │   │
//! │  │    Shop page ──► Cart overlay ──► Checkout ──► Dashboards      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    maison-state (UI state)                      │   │
//! │  │    cart overlay, toast queue, sync code, checkout flow          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ maison-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ deriveView│  │   │
//! │  │   │   Role    │  │ Currency  │  │ CartItem  │  │ sort/filt │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  maison-store (Persistence Layer)               │   │
//! │  │          string-keyed JSON key-value store (local-storage)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, UserRecord, Role, Category)
//! - [`money`] - Money type with integer arithmetic plus currency formatting
//! - [`cart`] - Cart math (merge-by-id, derived totals)
//! - [`catalog`] - The filter/sort pipeline behind the shop page
//! - [`auth`] - Session shape and route authorization rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Derived, not cached**: totals and visible-product views are recomputed
//!    from source collections on every read so they can never drift
//!
//! ## Example Usage
//!
//! ```rust
//! use maison_core::money::{CurrencyConfig, Money};
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(249_900); // $2,499.00
//!
//! // Format using the active currency configuration
//! let usd = CurrencyConfig::default();
//! assert_eq!(usd.format(price), "$2,499.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use maison_core::Money` instead of
// `use maison_core::money::Money`

pub use auth::{allowed, authorize, home_route, Route, RouteAccess, RouteDecision, Session};
pub use cart::{Cart, CartItem};
pub use catalog::{derive_view, CatalogQuery, CategoryFilter, PriceRange, SortKey};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyConfig, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts in a storefront that never paginates the cart
/// overlay. Can be made configurable in future versions.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Quantities are deliberately NOT clamped to `Product.stock`: the cart
/// holds a snapshot and stock drifts after add; stock verification belongs
/// to a real checkout.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Length of a cross-device sync code (uppercase alphanumeric)
pub const SYNC_CODE_LEN: usize = 6;

/// Default lifetime of a toast notification, in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
