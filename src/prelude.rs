//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::catalog::{CatalogItem, Corpus, RawRecord};
pub use crate::error::{RecomendarError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::profile::TagBuilder;
pub use crate::recommend::{Recommendation, Recommender, Snapshot, SnapshotConfig};
pub use crate::text::{
    cosine_similarity, CountVectorizer, PorterStemmer, SimilarityMatrix, Stemmer, StopWordsFilter,
    Tokenizer, WhitespaceTokenizer,
};
