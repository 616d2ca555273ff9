use std::{collections::HashSet, path::Path};

use crate::error::{Error, Result};

/// Words that never count toward similarity on their own.
const DEFAULT_WORDS: &[&str] = &[
    "the", "is", "in", "it", "and", "to", "of", "a", "that", "i", "you",
    "he", "she", "they", "we", "be", "have", "has", "with", "for", "on",
    "at", "by", "this", "from", "or", "as", "an", "if",
];

/// A caller-supplied stop-word set. Membership is case-insensitive; words
/// are stored lowercased.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

impl StopWordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// An empty set: every fragment counts toward similarity.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Load a stop-word file, one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "cannot read stop-word file {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::new(contents.lines().map(str::trim).filter(|line| {
            !line.is_empty() && !line.starts_with('#')
        })))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True when every whitespace-separated word of `text` is a stop word.
    ///
    /// A text with no words at all (empty or whitespace-only) counts as
    /// all-stop-words, so callers discard it rather than score it.
    pub fn all_stop_words(&self, text: &str) -> bool {
        text.split_whitespace().all(|word| self.contains(word))
    }
}
