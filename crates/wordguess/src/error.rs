//! Unified error type for Wordguess.

use wordguess_core::GuessError;
use wordguess_session::SessionError;

/// Top-level error that wraps the per-crate errors.
///
/// `#[from]` on each variant generates the `From` impls, so `?` converts
/// sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WordguessError {
    /// A guess was rejected by the engine.
    ///
    /// [`play`](crate::play) and [`Session`](wordguess_session::Session)
    /// turn rejected guesses into flash messages, so this only shows up in
    /// hosts that call [`Game::guess`](wordguess_core::Game::guess)
    /// directly:
    ///
    /// ```rust
    /// use wordguess::prelude::*;
    ///
    /// fn apply(game: &mut Game, input: &str) -> Result<bool, WordguessError> {
    ///     Ok(game.guess(Some(input))?)
    /// }
    ///
    /// let mut game = Game::new("cat");
    /// assert!(apply(&mut game, "c").unwrap());
    /// assert!(matches!(apply(&mut game, "7"), Err(WordguessError::Guess(_))));
    /// ```
    #[error(transparent)]
    Guess(#[from] GuessError),

    /// A session-level error (unknown session, word source failure).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Reading player input or writing output failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
