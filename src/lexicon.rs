//! Turning raw text into builder input.
//!
//! The builder wants strictly ascending words over `a`-`z`. Word lists found in
//! the wild are neither sorted nor clean, so they go through
//! [`prepare_words`] first: tokens are split on whitespace, lowercased,
//! filtered by alphabet and length, deduplicated and sorted.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use log::debug;

use crate::dawg::builder::is_comment;

/// Filtering rules applied while preparing a word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexiconOptions {
    /// Shortest word kept.
    pub min_len: usize,
    /// Longest word kept.
    pub max_len: usize,
}

impl Default for LexiconOptions {
    fn default() -> Self {
        LexiconOptions {
            min_len: 1,
            max_len: 32,
        }
    }
}

impl LexiconOptions {
    /// True if an already lowercased token is kept.
    pub fn accepts(&self, word: &str) -> bool {
        (self.min_len..=self.max_len).contains(&word.len())
            && word.bytes().all(|b| b.is_ascii_lowercase())
    }
}

/// Prepares the words of `text` for the builder.
///
/// Lines whose first non-blank character is `#` are skipped whole, so words
/// that follow the `#` on the same line are dropped too. A `#` later in a
/// line only spoils the token it is part of. The result is sorted and free of
/// duplicates.
///
/// # Examples
///
/// ```
/// use packed_dawg::lexicon::{prepare_words, LexiconOptions};
///
/// let words = prepare_words("Dog cat\ncat CATS don't", &LexiconOptions::default());
/// assert_eq!(words, ["cat", "cats", "dog"]);
/// ```
pub fn prepare_words(text: &str, options: &LexiconOptions) -> Vec<String> {
    let mut seen = 0usize;
    let words: BTreeSet<String> = text
        .lines()
        .filter(|line| !is_comment(line))
        .flat_map(str::split_whitespace)
        .inspect(|_| seen += 1)
        .map(str::to_lowercase)
        .filter(|word| options.accepts(word))
        .collect();
    debug!("kept {} distinct words out of {} tokens", words.len(), seen);
    words.into_iter().collect()
}

/// Reads a file and prepares its words. See [`prepare_words`].
pub fn read_words(path: impl AsRef<Path>, options: &LexiconOptions) -> io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(prepare_words(&text, options))
}
