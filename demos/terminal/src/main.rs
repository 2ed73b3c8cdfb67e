use std::io;

use tracing_subscriber::EnvFilter;
use wordguess::prelude::*;

// ---------------------------------------------------------------------------
// Word list
// ---------------------------------------------------------------------------

const WORDS: &[&str] = &[
    "banana", "garply", "hangman", "keyboard", "lantern", "morning",
    "network", "puzzle", "quartz", "rhythm", "socket", "terminal",
    "umbrella", "vintage", "whisper", "zephyr",
];

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Reads the game rules from the environment.
///
/// `WORDGUESS_MAX_WRONG` overrides the loss threshold; anything that isn't
/// a positive number is ignored with a warning.
fn config_from_env() -> GameConfig {
    config_from(std::env::var("WORDGUESS_MAX_WRONG").ok().as_deref())
}

fn config_from(max_wrong: Option<&str>) -> GameConfig {
    let mut config = GameConfig::default();
    if let Some(raw) = max_wrong {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.max_wrong_guesses = n,
            _ => tracing::warn!(value = %raw, "ignoring invalid WORDGUESS_MAX_WRONG"),
        }
    }
    config
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// `word-guesser [WORD]` plays one game on stdin/stdout. Without a word
/// argument the secret word is drawn from the built-in list.
fn main() -> Result<(), WordguessError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let word = std::env::args().nth(1);
    let mut session = Session::new(config_from_env());
    session.create(word.as_deref(), &mut WordList::new(WORDS.iter().copied()))?;

    let page = play(&mut session, io::stdin().lock(), io::stdout().lock())?;
    tracing::debug!(%page, "game finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_unset_uses_default() {
        assert_eq!(config_from(None), GameConfig::default());
    }

    #[test]
    fn test_config_from_positive_number() {
        assert_eq!(config_from(Some("3")).max_wrong_guesses, 3);
        assert_eq!(config_from(Some(" 10\n")).max_wrong_guesses, 10);
    }

    #[test]
    fn test_config_from_rejects_zero_and_junk() {
        for raw in ["0", "-2", "seven", ""] {
            assert_eq!(config_from(Some(raw)), GameConfig::default(), "{raw:?}");
        }
    }
}
