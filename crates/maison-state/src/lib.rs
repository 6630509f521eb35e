//! # Maison State
//!
//! UI-facing state layer for the Maison storefront. This crate holds the
//! ephemeral, per-session state the client-rendered UI binds to; everything
//! durable lives behind `maison-store`.
//!
//! ## State Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Maison UI State Layer                             │
//! │                                                                         │
//! │  UI Surface                State                    Backing             │
//! │  ──────────                ─────                    ───────             │
//! │                                                                         │
//! │  Cart drawer ────────────► CartState ─────────────► in-memory only      │
//! │                            (Arc<Mutex<Cart>>,                           │
//! │                             open/closed flag)                           │
//! │                                                                         │
//! │  Notifications ──────────► ToastQueue ────────────► in-memory only      │
//! │                            (auto-dismiss 3000ms)                        │
//! │                                                                         │
//! │  Device linking ─────────► SyncState ─────────────► in-memory only      │
//! │                            (6-char codes)                               │
//! │                                                                         │
//! │  Checkout flow ──────────► CheckoutFlow ──────────► CatalogStore        │
//! │                            (stage machine)          (records sales)     │
//! │                                                                         │
//! │  NOTE: The cart is deliberately NOT persisted. A refresh starts an      │
//! │        empty cart; only the catalog, users, wishlist, session and       │
//! │        preferences survive a restart.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod sync;
pub mod toast;

pub use cart::CartState;
pub use checkout::{CheckoutFlow, CheckoutStage, OrderSummary};
pub use error::{ErrorCode, UiError};
pub use sync::SyncState;
pub use toast::{Toast, ToastKind, ToastQueue};
