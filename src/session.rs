//! Sessions
//!
//! The per-visitor session contract consumed by the applicator, plus an
//! in-memory implementation for tests and hosts without a session layer.
//!
//! The pending coupon lives in a single fixed slot ([`COUPON_SLOT`]) and
//! moves through exactly two states: empty → pending on a valid capture,
//! pending → empty on the checkout commit. No locking is added around the
//! slot; concurrent requests from the same visitor are serialized (or
//! last-write-wins) by the host's session layer.

use rustc_hash::FxHashMap;

/// Session key holding the pending, not-yet-applied coupon code.
pub const COUPON_SLOT: &str = "coupon_code";

/// Per-visitor session store contract.
pub trait SessionStore {
    /// Read a session value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a session value.
    fn set(&mut self, key: &str, value: String);

    /// Remove a session value.
    fn unset(&mut self, key: &str);

    /// Whether a visitor session has been established.
    fn has_session(&self) -> bool;

    /// Establish the visitor session (e.g. issue the session cookie).
    fn start_session(&mut self);
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    values: FxHashMap<String, String>,
    started: bool,
}

impl MemorySession {
    /// Create an empty, not-yet-started session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`SessionStore::start_session`] has been called.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn unset(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn has_session(&self) -> bool {
        self.started
    }

    fn start_session(&mut self) {
        self.started = true;
    }
}
