//! Puzzle value types: the hidden phrase and its category.
//!
//! A [`Phrase`] is validated once at construction and never changes for the
//! lifetime of a round. Spaces are separators: never hidden, never guessable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::{SessionError, SessionResult};

/// Currency amount. Whole units, never negative.
pub type Currency = u64;

/// Marks an unfilled guessable position in the guess-mode buffer.
pub const PLACEHOLDER: char = '_';

/// Word separator. Always visible.
pub const SPACE: char = ' ';

/// The target phrase, stored as individual characters.
///
/// Serializes as a plain string; deserializing runs the same validation as
/// [`Phrase::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phrase {
    chars: Vec<char>,
}

impl Phrase {
    /// Validate and wrap a phrase.
    ///
    /// ```
    /// use phrase_puzzle::core::{Phrase, SessionError};
    ///
    /// let phrase = Phrase::new("hello world").unwrap();
    /// assert_eq!(phrase.len(), 11);
    /// assert!(phrase.is_space_at(5));
    ///
    /// assert_eq!(Phrase::new(""), Err(SessionError::EmptyPhrase));
    /// assert_eq!(Phrase::new("   "), Err(SessionError::NoGuessableCharacters));
    /// ```
    pub fn new(text: impl AsRef<str>) -> SessionResult<Self> {
        let chars: Vec<char> = text.as_ref().chars().collect();

        if chars.is_empty() {
            return Err(SessionError::EmptyPhrase);
        }
        if chars.contains(&PLACEHOLDER) {
            return Err(SessionError::PlaceholderInPhrase);
        }
        if chars.iter().all(|&c| c == SPACE) {
            return Err(SessionError::NoGuessableCharacters);
        }

        Ok(Self { chars })
    }

    /// Number of characters, spaces included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty phrases are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`, if in range.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Is the character at `index` a space?
    #[must_use]
    pub fn is_space_at(&self, index: usize) -> bool {
        self.char_at(index) == Some(SPACE)
    }

    /// Distinct non-space characters, in sorted order.
    #[must_use]
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.chars.iter().copied().filter(|&c| c != SPACE).collect()
    }

    /// Indices where `letter` occurs.
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == letter)
            .map(|(i, _)| i)
    }

}

impl TryFrom<String> for Phrase {
    type Error = SessionError;

    fn try_from(text: String) -> SessionResult<Self> {
        Self::new(text)
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.chars.into_iter().collect()
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A phrase together with its display category.
///
/// The engine never interprets the category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub phrase: Phrase,
    pub category: String,
}

impl Puzzle {
    /// Create a puzzle, validating the phrase.
    pub fn new(phrase: impl AsRef<str>, category: impl Into<String>) -> SessionResult<Self> {
        Ok(Self {
            phrase: Phrase::new(phrase)?,
            category: category.into(),
        })
    }
}
