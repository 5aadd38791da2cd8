//! Text processing for item profiles.
//!
//! Every stage the tag pipeline needs to turn an item's metadata blob into a
//! comparable numeric vector lives here:
//!
//! - [`tokenize`]: whitespace tokenization
//! - [`stem`]: Porter-style suffix stripping
//! - [`stopwords`]: English stop word filtering
//! - [`vectorize`]: bag-of-words count vectorization
//! - [`similarity`]: cosine similarity and the pairwise similarity matrix
//!
//! All stages are deterministic: identical input always yields identical
//! output, so vector positions are reproducible across runs.

pub mod similarity;
pub mod stem;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use stem::{PorterStemmer, Stemmer};
pub use stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use tokenize::WhitespaceTokenizer;
pub use vectorize::CountVectorizer;

use crate::error::Result;

/// Trait for tokenization strategies.
///
/// Tokenizers split text into a sequence of string tokens.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("space war alien").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["space", "war", "alien"]);
/// ```
pub trait Tokenizer {
    /// Split text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
