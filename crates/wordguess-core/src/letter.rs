//! A validated, normalized guess.
//!
//! Everything that reaches the guess sets goes through [`Letter`], so the
//! sets can only ever hold lowercase ASCII letters.

use std::fmt;
use std::str::FromStr;

use crate::GuessError;

/// A single lowercase ASCII letter.
///
/// Newtype over `char`: the only ways to build one are [`Letter::parse`],
/// `TryFrom<char>` and `FromStr`, and all of them reject anything that
/// isn't `a`–`z` or `A`–`Z`. Upper-case input is folded to lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Validates raw player input.
    ///
    /// `None` models a missing form field. The input must contain exactly
    /// one character, and that character must be an ASCII letter.
    ///
    /// # Errors
    /// Returns [`GuessError::InvalidGuess`] for missing, empty,
    /// multi-character, or non-letter input.
    pub fn parse(input: Option<&str>) -> Result<Self, GuessError> {
        let input = input.ok_or(GuessError::InvalidGuess)?;
        let mut chars = input.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(GuessError::InvalidGuess),
        }
    }

    /// Returns the normalized (lowercase) character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase()))
        } else {
            Err(GuessError::InvalidGuess)
        }
    }
}

impl FromStr for Letter {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase_letter_ok() {
        assert_eq!(Letter::parse(Some("q")).map(Letter::as_char), Ok('q'));
    }

    #[test]
    fn test_parse_uppercase_letter_normalizes() {
        assert_eq!(Letter::parse(Some("Q")).map(Letter::as_char), Ok('q'));
    }

    #[test]
    fn test_parse_missing_input_rejected() {
        assert_eq!(Letter::parse(None), Err(GuessError::InvalidGuess));
    }

    #[test]
    fn test_parse_rejects_everything_but_one_ascii_letter() {
        for input in ["", "ab", "5", "%", " ", "\n", "é", "a ", " a", "ß"] {
            assert_eq!(
                Letter::parse(Some(input)),
                Err(GuessError::InvalidGuess),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let letter: Letter = "K".parse().expect("valid letter");
        assert_eq!(letter.to_string(), "k");
        assert_eq!(char::from(letter), 'k');
    }

    #[test]
    fn test_try_from_char_rejects_digit() {
        assert!(Letter::try_from('7').is_err());
    }
}
