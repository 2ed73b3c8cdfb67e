//! Game-state engine for Wordguess.
//!
//! This crate holds the rules of the game and nothing else: no I/O, no
//! sessions, no rendering. A caller constructs a [`Game`] with a secret
//! word, feeds it guesses, and asks it how things stand:
//!
//! - **Guessing** ([`Game::guess`]): validates the input, lower-cases it,
//!   and records it as a correct or wrong guess (repeats are a no-op).
//! - **Reveal** ([`Game::word_with_guesses`]): the secret word with
//!   unguessed positions replaced by a placeholder.
//! - **Status** ([`Game::check_win_or_lose`]): [`GameStatus::Win`],
//!   [`GameStatus::Lose`], or [`GameStatus::Play`], recomputed on every call.
//!
//! # How it fits in the stack
//!
//! ```text
//! Front end (terminal, web)      ← renders pages, reads input
//!     ↕
//! Session layer                   ← owns one Game per session, maps results to messages
//!     ↕
//! Engine (this crate)             ← rules, invariants, win/lose
//! ```

mod config;
mod error;
mod game;
mod letter;

pub use config::{GameConfig, GameStatus};
pub use error::GuessError;
pub use game::Game;
pub use letter::Letter;
