//! Word lists cycled by the typewriter.

use thiserror::Error;

use crate::ParseOutcome;

/// Word substituted when the configured list is missing, empty, or malformed.
pub const DEFAULT_WORD: &str = "Web Developer";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is not a JSON array of strings: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("word list is empty")]
    Empty,
}

/// Ordered, cyclic list of words.
///
/// Invariant: never empty. Existence of a value is the proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self(words))
    }

    /// Parse a JSON-encoded array of strings, e.g. `["Rust", "Go"]`.
    pub fn parse(raw: &str) -> Result<Self, WordListError> {
        let words: Vec<String> = serde_json::from_str(raw)?;
        Self::new(words)
    }

    /// Parse the word-list metadata attached to a render target.
    ///
    /// An absent attribute is treated as an empty list. Any failure yields the
    /// one-element default list.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> ParseOutcome<Self, WordListError> {
        match Self::parse(raw.unwrap_or("[]")) {
            Ok(list) => ParseOutcome::Parsed(list),
            Err(reason) => ParseOutcome::Defaulted {
                value: Self::default(),
                reason,
            },
        }
    }

    /// Number of words; always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Word at `index`, wrapping past the end.
    #[must_use]
    pub fn word(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self(vec![DEFAULT_WORD.to_string()])
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = WordListError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
