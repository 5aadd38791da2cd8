//! Tokenization for tag construction.

use crate::error::Result;
use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// This is a simple split with no punctuation handling; punctuation stays
/// attached to words. Empty fragments produced by runs of whitespace are
/// discarded.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("A lone drifter, stranded.").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["A", "lone", "drifter,", "stranded."]);
///
/// let tokens = tokenizer.tokenize("foo   bar\nbaz").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["foo", "bar", "baz"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}
