//! Error types for the session layer.

use crate::SessionId;

/// Errors that can occur while managing sessions or picking words.
///
/// Guess errors are not in here on purpose: a bad guess is turned into a
/// [`Flash`](crate::Flash) by the session and never escapes as an error.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session exists with this id.
    /// Either it was never opened or it has already been closed.
    #[error("session {0} not found")]
    NotFound(SessionId),

    /// A [`WordList`](crate::WordList) was asked for a word but holds none.
    #[error("word list is empty")]
    EmptyWordList,

    /// A host-provided word source failed (remote service down, etc.).
    #[error("word source failed: {0}")]
    WordSource(String),
}
