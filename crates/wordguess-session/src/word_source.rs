//! Hook for supplying secret words.
//!
//! The session layer doesn't decide WHICH word gets played. It asks a
//! [`WordSource`], and the host decides what that is: a fixed word for
//! tests, a random pick from a list, or a call out to some word service.
//!
//! Two sources ship with the crate:
//! - [`FixedWord`]: always the same word
//! - [`WordList`]: a uniformly random word from a list
//!
//! Any `FnMut() -> Result<String, SessionError>` closure is a source too,
//! which is the easy way to plug in something custom.

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::SessionError;

/// Supplies the secret word for a new game.
pub trait WordSource {
    /// Returns the next secret word.
    ///
    /// # Errors
    /// Whatever the source considers a failure, such as an empty list, an
    /// unreachable service, etc.
    fn next_word(&mut self) -> Result<String, SessionError>;
}

impl<F> WordSource for F
where
    F: FnMut() -> Result<String, SessionError>,
{
    fn next_word(&mut self) -> Result<String, SessionError> {
        self()
    }
}

// ---------------------------------------------------------------------------
// FixedWord
// ---------------------------------------------------------------------------

/// A source that always returns the same word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWord(pub String);

impl FixedWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedWord {
    fn next_word(&mut self) -> Result<String, SessionError> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// A source that picks a word uniformly at random from a list.
///
/// Generic over the RNG so tests can pass a seeded one; the default is the
/// thread-local RNG.
#[derive(Debug, Clone)]
pub struct WordList<R = ThreadRng> {
    words: Vec<String>,
    rng: R,
}

impl WordList {
    /// Creates a list backed by the thread-local RNG.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(words, rand::rng())
    }
}

impl<R: Rng> WordList<R> {
    /// Creates a list backed by the given RNG.
    pub fn with_rng<I, S>(words: I, rng: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            rng,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for WordList<R> {
    fn next_word(&mut self) -> Result<String, SessionError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SessionError::EmptyWordList)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_fixed_word_always_same() {
        let mut source = FixedWord::new("garply");
        assert_eq!(source.next_word().unwrap(), "garply");
        assert_eq!(source.next_word().unwrap(), "garply");
    }

    #[test]
    fn test_word_list_picks_from_list() {
        let words = ["apple", "banana", "cherry"];
        let mut source = WordList::with_rng(words, StdRng::seed_from_u64(7));

        for _ in 0..50 {
            let word = source.next_word().unwrap();
            assert!(words.contains(&word.as_str()), "unexpected {word}");
        }
    }

    #[test]
    fn test_word_list_eventually_picks_every_word() {
        let words = ["apple", "banana", "cherry"];
        let mut source = WordList::with_rng(words, StdRng::seed_from_u64(42));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.next_word().unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_word_list_empty_errors() {
        let mut source = WordList::new(Vec::<String>::new());
        assert!(source.is_empty());
        assert!(matches!(source.next_word(), Err(SessionError::EmptyWordList)));
    }

    #[test]
    fn test_closure_is_word_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            Ok::<_, SessionError>(format!("word{calls}"))
        };
        assert_eq!(source.next_word().unwrap(), "word1");
        assert_eq!(source.next_word().unwrap(), "word2");
    }
}
