//! # User Store
//!
//! Owns the managed user-record collection (the admin dashboard's user
//! table), distinct from the authenticated session.
//!
//! ## The Admin Floor
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  remove(id)                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  target exists? ── no ──► NotFound, collection untouched               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  target.role == Admin AND admin count == 1?   (counted BEFORE removal) │
//! │      │                                                                  │
//! │      ├── yes ──► LastAdmin, collection untouched                       │
//! │      │                                                                  │
//! │      └── no ───► remove + persist                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;

use maison_core::{validation, CoreError, NewUser, Role, UserRecord};

use crate::error::{StoreError, StoreResult};
use crate::storage::{keys, Storage};

/// Store for managed user records.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<UserRecord>,
    next_id: u64,
    storage: Storage,
}

impl UserStore {
    /// Loads the user collection from storage (empty when the key is absent).
    pub fn load(storage: Storage) -> StoreResult<Self> {
        let users: Vec<UserRecord> = storage.get_json(keys::USERS)?.unwrap_or_default();
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;

        debug!(count = users.len(), "Users loaded");
        Ok(UserStore {
            users,
            next_id,
            storage,
        })
    }

    /// Full collection, insertion order.
    pub fn list(&self) -> &[UserRecord] {
        &self.users
    }

    /// Looks up a user record by id.
    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Number of admin-role records currently in the collection.
    pub fn admin_count(&self) -> usize {
        self.users.iter().filter(|u| u.role == Role::Admin).count()
    }

    /// Creates a user record.
    ///
    /// ## Defaults
    /// - fresh monotonic id
    /// - `status = "Active"`, `last_login = "Never"`
    pub fn add(&mut self, new: NewUser) -> StoreResult<UserRecord> {
        validation::validate_display_name(&new.name)?;
        validation::validate_email(&new.email)?;

        let user = UserRecord {
            id: self.next_id,
            name: new.name,
            email: new.email,
            role: new.role,
            status: "Active".to_string(),
            last_login: "Never".to_string(),
        };
        self.next_id += 1;
        self.users.push(user.clone());
        self.persist()?;

        debug!(id = user.id, role = %user.role.as_str(), "User added");
        Ok(user)
    }

    /// Removes a user record, enforcing the admin floor.
    ///
    /// ## Errors
    /// - `NotFound` when the id is absent
    /// - `LastAdmin` when the target is the sole remaining admin record;
    ///   the collection is unchanged (size and contents identical)
    pub fn remove(&mut self, id: u64) -> StoreResult<()> {
        let target = self
            .get(id)
            .ok_or(CoreError::NotFound { entity: "User", id })?;

        // Count taken before removal: the floor is "at least one admin".
        if target.role == Role::Admin && self.admin_count() == 1 {
            return Err(StoreError::Domain(CoreError::LastAdmin));
        }

        self.users.retain(|u| u.id != id);
        self.persist()?;
        debug!(id, "User removed");
        Ok(())
    }

    /// Changes a user's role, enforcing the admin floor on demotion.
    pub fn set_role(&mut self, id: u64, role: Role) -> StoreResult<()> {
        let target = self
            .get(id)
            .ok_or(CoreError::NotFound { entity: "User", id })?;

        // Demoting the sole admin violates the same floor as removing them.
        if target.role == Role::Admin && role != Role::Admin && self.admin_count() == 1 {
            return Err(StoreError::Domain(CoreError::LastAdmin));
        }

        if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
            user.role = role;
        }
        self.persist()?;
        debug!(id, role = %role.as_str(), "User role changed");
        Ok(())
    }

    /// Stamps a user's `last_login` with the current time.
    ///
    /// Called by the sign-in flow when a managed record matches the
    /// session's email; a display string, not an audit trail.
    pub fn record_login(&mut self, id: u64) -> StoreResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(CoreError::NotFound { entity: "User", id })?;

        user.last_login = Utc::now().format("%Y-%m-%d %H:%M").to_string();
        self.persist()?;
        Ok(())
    }

    /// Persists the full collection after every accepted mutation.
    fn persist(&self) -> StoreResult<()> {
        self.storage.set_json(keys::USERS, &self.users)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
