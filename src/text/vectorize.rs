//! Bag-of-words vectorization of tag strings.
//!
//! [`CountVectorizer`] learns a bounded vocabulary from a corpus of tag
//! strings and maps every document into a count vector over that shared
//! feature space. Vocabulary and matrix are produced together so they can
//! never disagree; a new corpus means a fresh fit, never reuse.

use std::collections::HashMap;

use log::debug;

use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;

/// Count vectorizer that converts tag strings to a token count matrix.
///
/// Vocabulary selection is deterministic: tokens are ranked by total corpus
/// frequency, ties broken alphabetically, then truncated to `max_features`.
///
/// # Examples
///
/// ```
/// use recomendar::text::CountVectorizer;
///
/// let docs = vec!["space war alien", "space battle alien"];
///
/// let mut vectorizer = CountVectorizer::new().with_max_features(100);
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    tokenizer: WhitespaceTokenizer,
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    max_features: Option<usize>,
    stop_words: Option<StopWordsFilter>,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer` with no vocabulary bound and no stop
    /// word filtering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: WhitespaceTokenizer::new(),
            vocabulary: HashMap::new(),
            lowercase: true,
            max_features: None,
            stop_words: None,
        }
    }

    /// Exclude the built-in English stop words from the vocabulary.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Exclude a custom stop word list from the vocabulary.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Set whether tokens are lowercased before counting (default: true).
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Cap the vocabulary at the `max_features` most frequent tokens.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Tokenize one document the way both fit and transform see it.
    fn prepare_tokens(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect())
    }

    /// Learn the vocabulary from documents.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::EmptyCorpus`] if `documents` is empty.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecomendarError::EmptyCorpus);
        }

        let mut term_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            for token in self.prepare_tokens(doc.as_ref())? {
                *term_freq.entry(token).or_insert(0) += 1;
            }
        }

        // Rank by frequency, ties alphabetical, so feature indices are
        // reproducible across runs
        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        if let Some(max_features) = self.max_features {
            ranked.truncate(max_features);
        }

        self.vocabulary = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (token, _))| (token, idx))
            .collect();

        debug!(
            "fit vocabulary of {} tokens from {} documents",
            self.vocabulary.len(),
            documents.len()
        );
        Ok(())
    }

    /// Transform documents to a count matrix using the learned vocabulary.
    ///
    /// Documents containing no vocabulary token map to an all-zero row;
    /// that is valid output, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or the vocabulary has not
    /// been fit.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if documents.is_empty() {
            return Err(RecomendarError::EmptyCorpus);
        }
        if self.vocabulary.is_empty() {
            return Err(RecomendarError::Other(
                "Vocabulary is empty. Call fit() first".to_string(),
            ));
        }

        let vocab_size = self.vocabulary.len();
        let mut counts = Matrix::zeros(documents.len(), vocab_size);

        for (doc_idx, doc) in documents.iter().enumerate() {
            for token in self.prepare_tokens(doc.as_ref())? {
                if let Some(&feature_idx) = self.vocabulary.get(&token) {
                    let current = counts.get(doc_idx, feature_idx);
                    counts.set(doc_idx, feature_idx, current + 1.0);
                }
            }
        }

        Ok(counts)
    }

    /// Learn the vocabulary and produce the count matrix in one pass.
    ///
    /// This is the pipeline entry point: matrix and vocabulary come from the
    /// same corpus and stay consistent by construction.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::EmptyCorpus`] if `documents` is empty.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The learned vocabulary (token → feature index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Number of features in the learned vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
