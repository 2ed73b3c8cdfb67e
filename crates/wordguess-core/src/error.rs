//! Error types for the engine.

/// Errors that can occur while playing a game.
///
/// There is exactly one recoverable condition: a guess that isn't a single
/// ASCII letter. It never damages the game; the state is left untouched and
/// the caller simply asks the player again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// The guess was missing, empty, longer than one character, or not an
    /// ASCII letter (`a`–`z`, `A`–`Z`).
    #[error("Invalid guess.")]
    InvalidGuess,
}
