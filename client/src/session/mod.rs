//! # Session State
//!
//! The session token decides whether the user is logged in: a stored token means
//! authenticated, no token means not. The [`Session`] handle is injected into the API
//! client and shared by all of its clones; resource calls only ever read it.
//!
//! ```rust
//! use expense_client::session::Session;
//!
//! let session = Session::in_memory();
//! assert!(!session.is_authenticated());
//!
//! session.store_token("eyJhbGciOiJIUzI1NiJ9.payload.sig").unwrap();
//! assert!(session.is_authenticated());
//!
//! session.clear().unwrap();
//! assert_eq!(session.token().unwrap(), None);
//! ```

pub mod store;

use std::fmt;
use std::sync::Arc;

use crate::core::error::Result;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore, TOKEN_KEY};

/// Shared handle to the stored session token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Wrap any store.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    /// In-memory session that starts out logged in.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(MemorySessionStore::with_token(token))
    }

    /// Current token, if any.
    pub fn token(&self) -> Result<Option<String>> {
        self.store.load()
    }

    /// Whether a token is stored. A store that cannot be read counts as logged out.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    /// Replace the stored token.
    pub fn store_token(&self, token: &str) -> Result<()> {
        self.store.save(token)
    }

    /// Forget the stored token.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the token itself
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
