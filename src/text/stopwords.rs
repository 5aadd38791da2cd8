//! Stop word filtering for vocabulary construction.
//!
//! Common English function words carry no discriminating signal between item
//! profiles and are excluded from the vocabulary before feature selection.
//! The built-in list is English-only; corpora in other languages are filtered
//! only by accident, never by design.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! let tokens = vec!["the", "last", "stand"];
//! let kept = filter.filter(&tokens).expect("filter should succeed");
//! assert_eq!(kept, vec!["last", "stand"]);
//! ```

use std::collections::HashSet;

use crate::error::Result;

/// Built-in English stop words, alphabetized.
///
/// Covers articles, pronouns, prepositions, conjunctions, auxiliary verbs,
/// question words, and a handful of near-content-free common verbs.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a",
    "about",
    "above",
    "across",
    "after",
    "again",
    "against",
    "all",
    "also",
    "am",
    "among",
    "an",
    "and",
    "another",
    "any",
    "are",
    "around",
    "as",
    "at",
    "back",
    "be",
    "because",
    "been",
    "before",
    "behind",
    "being",
    "below",
    "beneath",
    "beside",
    "between",
    "beyond",
    "both",
    "but",
    "by",
    "can",
    "could",
    "did",
    "do",
    "does",
    "doing",
    "down",
    "during",
    "each",
    "even",
    "ever",
    "every",
    "few",
    "for",
    "from",
    "get",
    "give",
    "go",
    "got",
    "had",
    "has",
    "have",
    "having",
    "he",
    "her",
    "here",
    "hers",
    "herself",
    "him",
    "himself",
    "his",
    "how",
    "i",
    "if",
    "in",
    "inside",
    "into",
    "is",
    "it",
    "its",
    "itself",
    "just",
    "made",
    "make",
    "may",
    "me",
    "might",
    "more",
    "most",
    "much",
    "must",
    "my",
    "myself",
    "near",
    "neither",
    "no",
    "none",
    "not",
    "now",
    "of",
    "off",
    "on",
    "only",
    "onto",
    "or",
    "other",
    "ought",
    "our",
    "ours",
    "ourselves",
    "out",
    "outside",
    "over",
    "own",
    "same",
    "say",
    "see",
    "several",
    "shall",
    "she",
    "should",
    "since",
    "so",
    "some",
    "such",
    "take",
    "than",
    "that",
    "the",
    "their",
    "theirs",
    "them",
    "themselves",
    "then",
    "there",
    "these",
    "they",
    "this",
    "those",
    "though",
    "through",
    "throughout",
    "to",
    "too",
    "toward",
    "under",
    "underneath",
    "unless",
    "until",
    "up",
    "upon",
    "very",
    "was",
    "way",
    "we",
    "were",
    "what",
    "when",
    "where",
    "which",
    "while",
    "who",
    "whom",
    "whose",
    "why",
    "will",
    "with",
    "within",
    "without",
    "would",
    "you",
    "your",
    "yours",
    "yourself",
    "yourselves",
];

/// Stop word filter backed by a `HashSet` for O(1) membership checks.
///
/// Matching is case-insensitive; words are stored lowercase.
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from a custom word collection.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        Self { stop_words }
    }

    /// Create a filter with the built-in English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Remove stop words from a token list, preserving order and case of the
    /// surviving tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if filtering fails.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(|token| token.as_ref().to_string())
            .filter(|token| !self.is_stop_word(token))
            .collect())
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
