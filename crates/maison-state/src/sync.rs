//! # Device Sync Codes
//!
//! Short pairing codes for linking a second device to the storefront
//! session. A code is 6 uppercase alphanumeric characters, e.g. `K7Q2XN`.
//!
//! Acceptance is a length check only: the pairing exchange happens out of
//! band, so the receiving side just confirms the code shape before marking
//! the device linked.

use rand::Rng;
use tracing::debug;

use maison_core::SYNC_CODE_LEN;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Device-linking state for the current session.
#[derive(Debug, Default)]
pub struct SyncState {
    code: Option<String>,
    linked: bool,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh pairing code, replacing any previous one.
    pub fn generate_code(&mut self) -> &str {
        let mut rng = rand::rng();
        let code: String = (0..SYNC_CODE_LEN)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        debug!("Generated sync code");
        self.code = Some(code);
        self.linked = false;
        self.code.as_deref().unwrap_or_default()
    }

    /// The outstanding pairing code, if one has been generated.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Accepts a code typed on the other device. Returns whether the device
    /// is now linked; anything that is not exactly the code length is
    /// rejected without changing state.
    pub fn accept_code(&mut self, code: &str) -> bool {
        if code.chars().count() != SYNC_CODE_LEN {
            return false;
        }
        self.linked = true;
        true
    }

    /// Whether a device has been linked this session.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Clears the code and the linked flag.
    pub fn reset(&mut self) {
        self.code = None;
        self.linked = false;
    }
}
