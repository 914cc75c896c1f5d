//! Session credential sources.
//!
//! The host may refresh its session payload at any time, so callers read the credential at
//! request-construction time instead of caching it.

use std::{cell::RefCell, rc::Rc};

/// Supplies the host's current session credential (the launch `initData` payload).
pub trait SessionCredentialSource {
    /// Returns the current credential, or `None` when the session is unauthenticated.
    fn session_credential(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Credential source for hosts without a session; every request goes out unauthenticated.
pub struct NoSessionCredential;

impl SessionCredentialSource for NoSessionCredential {
    fn session_credential(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory credential source whose value can be swapped at runtime.
pub struct MemorySessionCredential {
    inner: Rc<RefCell<Option<String>>>,
}

impl MemorySessionCredential {
    /// Creates a source holding `credential`.
    pub fn new(credential: impl Into<String>) -> Self {
        let source = Self::default();
        source.set(credential);
        source
    }

    /// Replaces the current credential.
    pub fn set(&self, credential: impl Into<String>) {
        *self.inner.borrow_mut() = Some(credential.into());
    }

    /// Drops the current credential.
    pub fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}

impl SessionCredentialSource for MemorySessionCredential {
    fn session_credential(&self) -> Option<String> {
        self.inner
            .borrow()
            .as_ref()
            .filter(|value| !value.is_empty())
            .cloned()
    }
}
