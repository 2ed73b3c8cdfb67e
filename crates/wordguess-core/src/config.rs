//! Game configuration and outcome state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Configuration for a game instance.
///
/// The defaults are the classic rules: seven wrong guesses lose the game and
/// unrevealed positions show as `-`. Front ends can override either field;
/// `#[serde(default)]` lets a stored config omit fields it doesn't change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of distinct wrong guesses at which the game is lost.
    pub max_wrong_guesses: usize,

    /// Character shown in place of an unrevealed position.
    pub placeholder: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: 7,
            placeholder: '-',
        }
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Where a game stands.
///
/// There is no stored "game over" flag. The status is derived from the
/// guess sets every time it is asked for, in this order:
///
/// ```text
/// every position revealed?        → Win
/// wrong guesses ≥ threshold?      → Lose
/// otherwise                       → Play
/// ```
///
/// Win is checked first, so if both conditions were ever true at once the
/// player wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Win,
    Lose,
    Play,
}

impl GameStatus {
    /// Returns `true` once the game has been won or lost.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Play => write!(f, "play"),
        }
    }
}
