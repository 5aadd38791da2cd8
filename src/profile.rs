//! Tag profile construction.
//!
//! Each item's heterogeneous attributes are flattened into one normalized
//! "tags" text field: synopsis tokens first, then genres, keywords, cast,
//! and directors, joined by single spaces and stemmed token by token.
//! Construction is a pure function of the item's attributes — deterministic,
//! order-preserving, no locale dependence — so feature positions derived
//! from it are reproducible.

use crate::catalog::CatalogItem;
use crate::error::Result;
use crate::text::{PorterStemmer, Stemmer, Tokenizer, WhitespaceTokenizer};

/// Builds the per-item tag string fed to the vectorizer.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::CatalogItem;
/// use recomendar::profile::TagBuilder;
///
/// let item = CatalogItem {
///     id: 1,
///     title: "Star Clash".to_string(),
///     overview: "A space war erupts".to_string(),
///     genres: vec!["ScienceFiction".to_string()],
///     keywords: vec![],
///     cast: vec![],
///     directors: vec![],
/// };
///
/// let builder = TagBuilder::new();
/// let tags = builder.build(&item).expect("build should succeed");
/// assert_eq!(tags, "a space war erupt sciencefict");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagBuilder {
    tokenizer: WhitespaceTokenizer,
    stemmer: PorterStemmer,
}

impl TagBuilder {
    /// Create a new tag builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: WhitespaceTokenizer::new(),
            stemmer: PorterStemmer::new(),
        }
    }

    /// Concatenate the item's attributes into one unstemmed token sequence:
    /// overview tokens, genres, keywords, cast, directors, in that fixed
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn raw_tokens(&self, item: &CatalogItem) -> Result<Vec<String>> {
        let mut tokens = self.tokenizer.tokenize(&item.overview)?;
        tokens.extend(item.genres.iter().cloned());
        tokens.extend(item.keywords.iter().cloned());
        tokens.extend(item.cast.iter().cloned());
        tokens.extend(item.directors.iter().cloned());
        Ok(tokens)
    }

    /// Build the item's final tag string: raw tokens stemmed in place and
    /// joined with single spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization or stemming fails.
    pub fn build(&self, item: &CatalogItem) -> Result<String> {
        let tokens = self.raw_tokens(item)?;
        let stemmed = self.stemmer.stem_tokens(&tokens)?;
        Ok(stemmed.join(" "))
    }

    /// Build tag strings for a whole slice of items, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any item fails to build.
    pub fn build_all(&self, items: &[CatalogItem]) -> Result<Vec<String>> {
        items.iter().map(|item| self.build(item)).collect()
    }
}
