//! The game itself: secret word, guess sets, reveal, and status.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GameConfig, GameStatus, GuessError, Letter};

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// One game of Wordguess.
///
/// Holds the secret word and two sets of lowercase letters:
///
/// - `correct_guesses`: guessed letters that occur in the word
/// - `wrong_guesses`: guessed letters that don't
///
/// The sets are disjoint and only ever grow; the word never changes. The
/// only mutating method is [`guess`](Self::guess) (and its infallible
/// sibling [`guess_letter`](Self::guess_letter)), which is what keeps those
/// invariants true.
///
/// An empty word is allowed. It stands for "no game yet" and counts as
/// already won, because there is nothing left to reveal.
///
/// The state is serializable so a host can keep it in whatever session
/// storage it uses. Deserialization re-checks the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    word: String,
    correct_guesses: BTreeSet<char>,
    wrong_guesses: BTreeSet<char>,
    config: GameConfig,
}

impl Game {
    /// Creates a game with the default rules and no guesses.
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_config(word, GameConfig::default())
    }

    /// Creates a game with custom rules and no guesses.
    pub fn with_config(word: impl Into<String>, config: GameConfig) -> Self {
        Self {
            word: word.into(),
            correct_guesses: BTreeSet::new(),
            wrong_guesses: BTreeSet::new(),
            config,
        }
    }

    /// The secret word, in the case it was given.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn correct_guesses(&self) -> &BTreeSet<char> {
        &self.correct_guesses
    }

    pub fn wrong_guesses(&self) -> &BTreeSet<char> {
        &self.wrong_guesses
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Wrong guesses left before the game is lost.
    pub fn guesses_remaining(&self) -> usize {
        self.config
            .max_wrong_guesses
            .saturating_sub(self.wrong_guesses.len())
    }

    /// Returns `true` if `letter` was already guessed, right or wrong.
    pub fn has_guessed(&self, letter: Letter) -> bool {
        let c = letter.as_char();
        self.correct_guesses.contains(&c) || self.wrong_guesses.contains(&c)
    }

    /// Processes one guess from raw player input.
    ///
    /// Returns `Ok(true)` when the letter was new and has been recorded,
    /// `Ok(false)` when it had already been guessed (nothing changes).
    ///
    /// # Errors
    /// Returns [`GuessError::InvalidGuess`] unless `input` is exactly one
    /// ASCII letter. The game is left untouched.
    pub fn guess(&mut self, input: Option<&str>) -> Result<bool, GuessError> {
        let letter = Letter::parse(input).inspect_err(|_| {
            debug!(?input, "rejected invalid guess");
        })?;
        Ok(self.guess_letter(letter))
    }

    /// Processes one already-validated guess.
    ///
    /// Same contract as [`guess`](Self::guess) minus the validation.
    pub fn guess_letter(&mut self, letter: Letter) -> bool {
        if self.has_guessed(letter) {
            debug!(%letter, "repeated guess ignored");
            return false;
        }

        let c = letter.as_char();
        if self.word_contains(c) {
            self.correct_guesses.insert(c);
            debug!(%letter, "correct guess");
        } else {
            self.wrong_guesses.insert(c);
            debug!(
                %letter,
                wrong = self.wrong_guesses.len(),
                "wrong guess"
            );
        }

        true
    }

    /// The word with every unrevealed position replaced by the placeholder.
    ///
    /// A position is revealed when its lowercase form is in
    /// `correct_guesses`. Guesses are letters only, so digits, punctuation
    /// or spaces inside the word always stay hidden.
    ///
    /// ```
    /// use wordguess_core::Game;
    ///
    /// let mut game = Game::new("banana");
    /// game.guess(Some("b")).unwrap();
    /// game.guess(Some("n")).unwrap();
    /// assert_eq!(game.word_with_guesses(), "b-n-n-");
    /// ```
    pub fn word_with_guesses(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.is_revealed(c) {
                    c
                } else {
                    self.config.placeholder
                }
            })
            .collect()
    }

    /// Computes the current status. Pure; call it as often as needed.
    pub fn check_win_or_lose(&self) -> GameStatus {
        // Every position revealed, i.e. no placeholder in the reveal.
        if self.word.chars().all(|c| self.is_revealed(c)) {
            GameStatus::Win
        } else if self.wrong_guesses.len() >= self.config.max_wrong_guesses {
            GameStatus::Lose
        } else {
            GameStatus::Play
        }
    }

    fn is_revealed(&self, c: char) -> bool {
        self.correct_guesses.contains(&c.to_ascii_lowercase())
    }

    fn word_contains(&self, c: char) -> bool {
        self.word.chars().any(|w| w.to_ascii_lowercase() == c)
    }
}

impl Default for Game {
    /// The placeholder game: empty word, nothing guessed.
    fn default() -> Self {
        Self::new("")
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Unchecked mirror of [`Game`] used only as a deserialization target.
#[derive(Deserialize)]
struct GameSnapshot {
    word: String,
    #[serde(default)]
    correct_guesses: BTreeSet<char>,
    #[serde(default)]
    wrong_guesses: BTreeSet<char>,
    #[serde(default)]
    config: GameConfig,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = String;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = Game {
            word: snapshot.word,
            correct_guesses: BTreeSet::new(),
            wrong_guesses: BTreeSet::new(),
            config: snapshot.config,
        };

        for &c in &snapshot.correct_guesses {
            if !c.is_ascii_lowercase() || !game.word_contains(c) {
                return Err(format!("'{c}' is not a correct guess for this word"));
            }
        }
        for &c in &snapshot.wrong_guesses {
            if !c.is_ascii_lowercase() || game.word_contains(c) {
                return Err(format!("'{c}' is not a wrong guess for this word"));
            }
        }

        Ok(Game {
            correct_guesses: snapshot.correct_guesses,
            wrong_guesses: snapshot.wrong_guesses,
            ..game
        })
    }
}
