//! The session manager: one [`Session`] per player, keyed by a random id.
//!
//! This is what a multi-user host (a web server, a chat bot) keeps around
//! in place of a cookie-backed session store. Each session owns its own
//! game; sessions never share state.
//!
//! # Concurrency note
//!
//! `SessionManager` is a plain `HashMap`, not a concurrent one. It is
//! meant to be owned by a single task and put behind a mutex or a channel
//! at a higher level if the host needs that.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use wordguess_core::GameConfig;

use crate::{Session, SessionError};

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// Opaque session identifier: 32 lowercase hex characters (128 bits).
///
/// Hard to guess, so it can double as the session cookie value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SessionManager
// ---------------------------------------------------------------------------

/// Tracks every open session.
///
/// ## Lifecycle
///
/// ```text
/// open() ──→ get_mut() → create / guess ... ──→ close()
///   │
///   ▼
/// [placeholder game] ──(create)──→ [game in play] ──(create)──→ [new game]
/// ```
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, Session>,

    /// Rules handed to every new session.
    config: GameConfig,
}

impl SessionManager {
    pub fn new(config: GameConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    /// Opens a new session holding the placeholder game and returns its id.
    pub fn open(&mut self) -> SessionId {
        let mut id = generate_id();
        while self.sessions.contains_key(&id) {
            id = generate_id();
        }

        self.sessions.insert(id.clone(), Session::new(self.config));
        info!(session_id = %id, "session opened");
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Looks up a session for mutation (starting a game, guessing).
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if no session has this id.
    pub fn get_mut(&mut self, id: &SessionId) -> Result<&mut Session, SessionError> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.clone()))
    }

    /// Closes a session and hands back its final state.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if no session has this id.
    pub fn close(&mut self, id: &SessionId) -> Result<Session, SessionError> {
        let session = self
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.clone()))?;

        info!(session_id = %id, status = %session.status(), "session closed");
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// 16 random bytes as 32 hex characters.
fn generate_id() -> SessionId {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    SessionId(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

// =========================================================================
// Tests
// =========================================================================
