//! A single player's session: the current game plus the routing rules a
//! front end follows.
//!
//! A session always holds exactly one [`Game`]. Before the player starts
//! one it holds the placeholder game (empty word). Starting a new game
//! replaces the old one outright and keeps no history.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
use wordguess_core::{Game, GameConfig, GameStatus};

use crate::{SessionError, WordSource};

// ---------------------------------------------------------------------------
// Flash
// ---------------------------------------------------------------------------

/// A one-shot message for the player after a guess.
///
/// A fresh guess (right or wrong) produces no flash; the updated word and
/// guess lists speak for themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flash {
    /// The input wasn't a single letter.
    InvalidGuess,

    /// The letter had already been guessed.
    AlreadyUsed,
}

impl Flash {
    /// The text shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidGuess => "Invalid guess.",
            Self::AlreadyUsed => "You have already used that letter.",
        }
    }
}

impl fmt::Display for Flash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// The views a front end can show.
///
/// A front end asks for a page with [`Session::visit`] and gets back the
/// page it should actually render. The redirects are:
///
/// ```text
/// New   → New
/// Show  → Win or Lose once the game is over, otherwise Show
/// Win   → Win only if the game is won, otherwise Show (then as above)
/// Lose  → Lose only if the game is lost, otherwise Show (then as above)
/// ```
///
/// So a player can't reach the win page of a game still in play, and a
/// finished game never shows the guessing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Start-a-new-game form.
    New,
    /// The game in progress: reveal, guesses, guess form.
    Show,
    Win,
    Lose,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Show => write!(f, "show"),
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One player's session.
///
/// Owns its game exclusively. All mutation goes through
/// [`create`](Self::create) and [`guess`](Self::guess).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: Game,

    /// Rules applied to every game this session starts.
    config: GameConfig,
}

impl Session {
    /// Creates a session holding the placeholder game.
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::with_config("", config),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts a new game, replacing the current one.
    ///
    /// Uses `word` when the player supplied one, otherwise asks `source`.
    ///
    /// # Errors
    /// Propagates the word source's error. The current game is kept.
    pub fn create<W>(
        &mut self,
        word: Option<&str>,
        source: &mut W,
    ) -> Result<&Game, SessionError>
    where
        W: WordSource + ?Sized,
    {
        let word = match word {
            Some(word) => word.to_owned(),
            None => source
                .next_word()
                .inspect_err(|err| warn!(%err, "word source failed"))?,
        };

        self.game = Game::with_config(word, self.config);
        info!(
            letters = self.game.word().chars().count(),
            "new game started"
        );
        Ok(&self.game)
    }

    /// Submits raw form input as a guess.
    ///
    /// Only the first character of the input is used, so `"apple"` guesses
    /// `a`. Missing or empty input is an invalid guess.
    ///
    /// Returns the flash to show, if any. The game is unchanged when a
    /// flash is returned.
    pub fn guess(&mut self, input: Option<&str>) -> Option<Flash> {
        // `first` borrows `buf`; a closure can't hand that borrow out, so
        // this stays a match rather than `Option::map`.
        let mut buf = [0u8; 4];
        let first = match input.and_then(|s| s.chars().next()) {
            Some(c) => Some(&*c.encode_utf8(&mut buf)),
            None => None,
        };

        match self.game.guess(first) {
            Ok(true) => {
                debug!(status = %self.game.check_win_or_lose(), "guess accepted");
                None
            }
            Ok(false) => Some(Flash::AlreadyUsed),
            Err(_) => Some(Flash::InvalidGuess),
        }
    }

    /// Current status of the held game.
    pub fn status(&self) -> GameStatus {
        self.game.check_win_or_lose()
    }

    /// Resolves a page request into the page that should be rendered.
    ///
    /// Follows redirects until a page accepts the request; see [`Page`].
    pub fn visit(&self, requested: Page) -> Page {
        let status = self.status();
        let mut page = requested;

        loop {
            let next = match (page, status) {
                (Page::New, _) => return Page::New,
                (Page::Show, GameStatus::Win) => Page::Win,
                (Page::Show, GameStatus::Lose) => Page::Lose,
                (Page::Show, GameStatus::Play) => return Page::Show,
                (Page::Win, GameStatus::Win) => return Page::Win,
                (Page::Lose, GameStatus::Lose) => return Page::Lose,
                (Page::Win | Page::Lose, _) => Page::Show,
            };
            trace!(from = %page, to = %next, "redirect");
            page = next;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
