//! # Wordguess
//!
//! A single-player word-guessing game engine.
//!
//! The workspace is split in layers, and this crate ties them together:
//!
//! - [`wordguess_core`]: the rules ([`Game`], [`GameStatus`])
//! - [`wordguess_session`]: sessions, word sources, flash messages, pages
//! - this crate: one error type ([`WordguessError`]) and a line-based
//!   [`play`] loop for terminal front ends
//!
//! ## Quick Start
//!
//! ```rust
//! use wordguess::prelude::*;
//!
//! let mut game = Game::new("banana");
//! game.guess(Some("b"))?;
//! assert_eq!(game.word_with_guesses(), "b-----");
//! assert_eq!(game.check_win_or_lose(), GameStatus::Play);
//! # Ok::<(), GuessError>(())
//! ```

mod error;
mod terminal;

pub use error::WordguessError;
pub use terminal::{play, render};

/// Everything a front end usually needs, in one import.
pub mod prelude {
    pub use crate::{WordguessError, play, render};
    pub use wordguess_core::{Game, GameConfig, GameStatus, GuessError, Letter};
    pub use wordguess_session::{
        FixedWord, Flash, Page, Session, SessionError, SessionId,
        SessionManager, WordList, WordSource,
    };
}
