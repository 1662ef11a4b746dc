// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Operator sign-in.
//!
//! A single shared password gates the editor. The signed-in flag is kept in
//! the key-value store so it survives restarts. This is a convenience gate,
//! not a security boundary.

use crate::io::storage::{KeyValueStore, AUTH_KEY};
use std::rc::Rc;

/// Password check plus the persisted signed-in flag.
pub struct AuthGate {
    backend: Rc<dyn KeyValueStore>,
    secret: String,
}

impl AuthGate {
    pub fn new(backend: Rc<dyn KeyValueStore>, secret: impl Into<String>) -> Self {
        Self {
            backend,
            secret: secret.into(),
        }
    }

    /// True only when the stored flag is exactly `"true"`.
    pub fn is_authenticated(&self) -> bool {
        match self.backend.get(AUTH_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::error!("Failed to read sign-in state: {}", e);
                false
            }
        }
    }

    /// Compare `password` with the secret and record a successful sign-in.
    /// Wrong passwords may be retried freely.
    pub fn login(&self, password: &str) -> bool {
        if password != self.secret {
            log::info!("Rejected sign-in attempt");
            return false;
        }
        if let Err(e) = self.backend.set(AUTH_KEY, "true") {
            log::error!("Failed to persist sign-in: {}", e);
        }
        log::info!("Operator signed in");
        true
    }

    pub fn logout(&self) {
        if let Err(e) = self.backend.remove(AUTH_KEY) {
            log::error!("Failed to clear sign-in: {}", e);
        }
        log::info!("Operator signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStore;

    fn gate() -> (Rc<MemoryStore>, AuthGate) {
        let backend = Rc::new(MemoryStore::new());
        let gate = AuthGate::new(backend.clone(), "admin");
        (backend, gate)
    }

    #[test]
    fn test_login_requires_exact_match() {
        let (_, gate) = gate();
        assert!(!gate.is_authenticated());
        assert!(!gate.login("Admin"));
        assert!(!gate.login("admin "));
        assert!(!gate.is_authenticated());

        assert!(gate.login("admin"));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_flag_persists_and_logout_clears() {
        let (backend, gate) = gate();
        gate.login("admin");
        assert_eq!(backend.get(AUTH_KEY).unwrap().as_deref(), Some("true"));

        let again = AuthGate::new(backend.clone(), "admin");
        assert!(again.is_authenticated());

        again.logout();
        assert!(!gate.is_authenticated());
        assert_eq!(backend.get(AUTH_KEY).unwrap(), None);
    }

    #[test]
    fn test_other_flag_values_are_signed_out() {
        let (backend, gate) = gate();
        backend.set(AUTH_KEY, "TRUE").unwrap();
        assert!(!gate.is_authenticated());
        backend.set(AUTH_KEY, "1").unwrap();
        assert!(!gate.is_authenticated());
    }
}
