//! # Domain Types
//!
//! Core domain types used throughout the Maison storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   UserRecord    │   │    Session      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  (auth module)  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  role           │       │
//! │  │  name           │   │  email          │   │  email          │       │
//! │  │  price_cents    │   │  role           │   └─────────────────┘       │
//! │  │  category       │   │  status         │                             │
//! │  │  visible        │   │  last_login     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │      Role       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Gowns          │   │  Client         │                             │
//! │  │  Dresses        │   │  Staff          │                             │
//! │  │  Bridal         │   │  Admin          │                             │
//! │  │  Accessories    │   └─────────────────┘                             │
//! │  │  Footwear       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Product and user ids are monotonic integers assigned by their owning
//! store. Product id order correlates with creation order, which is what
//! the catalog's `Newest` sort relies on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. A closed set: the shop page's category filter and the
/// admin product form both enumerate exactly these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Gowns,
    Dresses,
    Bridal,
    Accessories,
    Footwear,
}

impl Category {
    /// Display label shown on the shop page and matched by catalog search.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Gowns => "Gowns",
            Category::Dresses => "Dresses",
            Category::Bridal => "Bridal",
            Category::Accessories => "Accessories",
            Category::Footwear => "Footwear",
        }
    }

    /// All categories, in the order the UI lists them.
    pub const fn all() -> &'static [Category] {
        &[
            Category::Gowns,
            Category::Dresses,
            Category::Bridal,
            Category::Accessories,
            Category::Footwear,
        ]
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// `visible` gates whether the product appears in the public shop; the admin
/// dashboard always sees the full collection.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, monotonic (id order = creation order).
    pub id: u64,

    /// Display name shown on the shop page.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image reference (URI).
    pub image: String,

    /// Product category.
    pub category: Category,

    /// Star rating, 0-5. New products default to 5.
    pub rating: u8,

    /// Units in stock. Non-negative.
    pub stock: i64,

    /// Units sold historically. Drives the best-selling sort.
    pub sales: i64,

    /// Whether the product is shown in the public catalog.
    pub visible: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Payload for creating a product. The catalog store assigns the id and
/// defaults `rating = 5`, `sales = 0`, `visible = true`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
    pub image: String,
    pub category: Category,
    pub stock: i64,
}

/// Partial update for a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub rating: Option<u8>,
    pub stock: Option<i64>,
    pub visible: Option<bool>,
}

// =============================================================================
// Role
// =============================================================================

/// Account role. A closed enumeration: route and menu visibility are pure
/// functions of this value, never string-array membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Staff,
    Admin,
}

impl Role {
    /// Stable string form, used for the persisted `userRole` value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Parses the persisted string form.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "client" => Some(Role::Client),
            "staff" => Some(Role::Staff),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

// =============================================================================
// User Record
// =============================================================================

/// A managed user record, distinct from the authenticated session.
///
/// ## Invariant
/// The collection always contains at least one record with `role == Admin`;
/// the user store rejects a delete that would violate this.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRecord {
    /// Unique identifier, monotonic.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Email address. Not validated for deliverability, only for shape.
    pub email: String,

    /// Account role.
    pub role: Role,

    /// Free-form status label shown on the admin dashboard ("Active", ...).
    pub status: String,

    /// Display string for the last sign-in ("Never" until recorded).
    pub last_login: String,
}

/// Payload for creating a user record. The store assigns the id and
/// defaults `status = "Active"`, `last_login = "Never"`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// Unit Tests
// =============================================================================
