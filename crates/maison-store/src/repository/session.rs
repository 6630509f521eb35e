//! # Session Store
//!
//! Owns the optional signed-in session and its persisted form.
//!
//! ## Persisted Shape
//! Three independent keys, matching what the storefront reads on boot:
//! `userRole` (role string), `userEmail` (email string), `isLoggedIn`
//! (`"true"` while a session exists). Logout removes all three.
//!
//! The session is restored on construction; a partial or unparsable triple
//! (e.g. a role string from a newer build) restores to signed-out rather
//! than erroring.

use tracing::{debug, info};

use maison_core::{Role, Session};

use crate::error::StoreResult;
use crate::storage::{keys, Storage};

/// Store for the authenticated session.
#[derive(Debug)]
pub struct SessionStore {
    current: Option<Session>,
    storage: Storage,
}

impl SessionStore {
    /// Loads the session from storage, treating anything short of a
    /// complete, parsable triple as signed-out.
    pub fn load(storage: Storage) -> StoreResult<Self> {
        let logged_in: Option<String> = storage.get_json(keys::IS_LOGGED_IN)?;
        let role: Option<String> = storage.get_json(keys::USER_ROLE)?;
        let email: Option<String> = storage.get_json(keys::USER_EMAIL)?;

        let current = match (logged_in.as_deref(), role, email) {
            (Some("true"), Some(role), Some(email)) => {
                Role::parse(&role).map(|role| Session { role, email })
            }
            _ => None,
        };

        debug!(signed_in = current.is_some(), "Session loaded");
        Ok(SessionStore { current, storage })
    }

    /// The current session, if signed in.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Signs in and persists the session.
    pub fn login(&mut self, role: Role, email: impl Into<String>) -> StoreResult<()> {
        let email = email.into();

        self.storage.set_json(keys::USER_ROLE, &role.as_str())?;
        self.storage.set_json(keys::USER_EMAIL, &email)?;
        self.storage.set_json(keys::IS_LOGGED_IN, &"true")?;

        info!(role = role.as_str(), "Signed in");
        self.current = Some(Session { role, email });
        Ok(())
    }

    /// Signs out, clearing the session and its persisted form.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.storage.remove(keys::USER_ROLE)?;
        self.storage.remove(keys::USER_EMAIL)?;
        self.storage.remove(keys::IS_LOGGED_IN)?;

        info!("Signed out");
        self.current = None;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
