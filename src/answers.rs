//! The answer store: an ordered mapping from question name to its typed value.
//!
//! Answers accumulate as the answering loop commits one question at a time.
//! Insertion order is the order the questions were answered in, and a key is
//! never overwritten once set.

use crate::error::{GantryError, Result};

/// A committed answer value, one of the three question value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free-text answer.
    Text(String),
    /// Single-choice answer as a zero-based option index.
    Choice(usize),
    /// Yes/no answer.
    Bool(bool),
}

impl Answer {
    /// Canonical display form of the value.
    ///
    /// Identity for text, one-based numeral for a choice, `y`/`n` for a bool.
    /// This is the form substituted into transformed template sources.
    pub fn printed(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Choice(index) => (index + 1).to_string(),
            Self::Bool(true) => "y".to_string(),
            Self::Bool(false) => "n".to_string(),
        }
    }

    /// Get as text if this is a `Text` answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the zero-based index if this is a `Choice` answer.
    pub fn as_choice(&self) -> Option<usize> {
        match self {
            Self::Choice(index) => Some(*index),
            _ => None,
        }
    }

    /// Get as bool if this is a `Bool` answer.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Ordered mapping from question name to committed [`Answer`].
///
/// Grows monotonically; committing the same name twice is an error.
#[derive(Debug, Default)]
pub struct Answers {
    entries: Vec<(String, Answer)>,
}

impl Answers {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a value under a question name.
    pub fn commit(&mut self, name: &str, answer: Answer) -> Result<()> {
        if self.contains(name) {
            return Err(GantryError::AnswerAlreadyCommitted {
                name: name.to_string(),
            });
        }
        self.entries.push((name.to_string(), answer));
        Ok(())
    }

    /// Look up an answer by question name.
    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, answer)| answer)
    }

    /// Whether a question has been answered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Iterate entries in commit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries
            .iter()
            .map(|(name, answer)| (name.as_str(), answer))
    }

    /// Number of committed answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no answers have been committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
