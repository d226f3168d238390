//! Session token storage shared by every outbound request.

use std::sync::Mutex;

/// Holds the bearer token attached to outbound requests.
///
/// A 401 from the backend invalidates the session through
/// [`invalidate`](SessionStore::invalidate); the presentation layer watches
/// [`is_valid`](SessionStore::is_valid) to route back to the login surface.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn store(&self, token: String);
    fn invalidate(&self);

    fn is_valid(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory session store, one per signed-in admin.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    fn store(&self, token: String) {
        *self.lock() = Some(token);
    }

    fn invalidate(&self) {
        *self.lock() = None;
    }
}
