//! Snapshot construction and similarity retrieval.
//!
//! The whole pipeline — normalize → build tags → stem → vectorize → compute
//! similarity — runs to completion inside [`Snapshot::build`], producing one
//! immutable bundle of corpus, vocabulary, feature matrix, and similarity
//! matrix. Queries only ever read a finished snapshot; a corpus change means
//! building a fresh snapshot and swapping it in atomically via
//! [`Recommender::rebuild`]. Readers see the old complete snapshot or the
//! new complete snapshot, never a partially rebuilt one.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::RawRecord;
//! use recomendar::recommend::{Recommender, Snapshot, SnapshotConfig};
//!
//! fn record(id: u64, title: &str, overview: &str) -> RawRecord {
//!     RawRecord {
//!         id,
//!         title: title.to_string(),
//!         overview: Some(overview.to_string()),
//!         genres: r#"[{"id": 1, "name": "Drama"}]"#.to_string(),
//!         keywords: "[]".to_string(),
//!         cast: "[]".to_string(),
//!         crew: "[]".to_string(),
//!     }
//! }
//!
//! let records = vec![
//!     record(1, "Star Clash", "space war among alien fleets"),
//!     record(2, "Void Battle", "space battle with alien ships"),
//!     record(3, "June Wedding", "romance drama about a wedding"),
//! ];
//!
//! let snapshot = Snapshot::build(records, &SnapshotConfig::default()).expect("build should succeed");
//! let recommender = Recommender::new(snapshot);
//!
//! let hits = recommender.recommend("Star Clash").expect("title exists");
//! assert_eq!(hits[0].title, "Void Battle");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, Corpus, RawRecord};
use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::profile::TagBuilder;
use crate::text::{CountVectorizer, SimilarityMatrix};

/// Number of neighbors returned by the default query operations.
pub const DEFAULT_TOP_K: usize = 5;

/// Default vocabulary bound for snapshot construction.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Pipeline configuration for snapshot construction.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Maximum vocabulary size for the vectorizer.
    pub max_features: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl SnapshotConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vocabulary bound.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }
}

/// One ranked neighbor returned by a recommendation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique id of the recommended item.
    pub id: u64,
    /// Display title of the recommended item.
    pub title: String,
    /// Cosine similarity to the query item, in [0, 1].
    pub score: f64,
}

/// Immutable result of one full pipeline run.
///
/// Owns the corpus, the vocabulary it was vectorized against, the count
/// feature matrix, and the pairwise similarity matrix — all built together
/// from the same input so they cannot disagree. Never mutated after
/// construction.
#[derive(Debug)]
pub struct Snapshot {
    corpus: Corpus,
    vocabulary: HashMap<String, usize>,
    features: Matrix<f64>,
    similarity: SimilarityMatrix,
}

impl Snapshot {
    /// Run the full pipeline over raw records.
    ///
    /// Records that fail normalization are dropped (logged, not fatal);
    /// vocabulary and feature matrix are fit together, then every pairwise
    /// similarity is computed eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::EmptyCorpus`] if no record survives
    /// normalization, or any error from the downstream pipeline stages.
    pub fn build<I>(records: I, config: &SnapshotConfig) -> Result<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let corpus = Corpus::from_records(records)?;
        let tags = TagBuilder::new().build_all(corpus.items())?;

        let mut vectorizer = CountVectorizer::new()
            .with_max_features(config.max_features)
            .with_stop_words_english();
        let features = vectorizer.fit_transform(&tags)?;
        let similarity = SimilarityMatrix::from_features(&features)?;

        info!(
            "snapshot built: {} items, {} features",
            corpus.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self {
            corpus,
            vocabulary: vectorizer.vocabulary().clone(),
            features,
            similarity,
        })
    }

    /// The corpus this snapshot was built from.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The vocabulary (token → feature index) of this snapshot.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// The count feature matrix (one row per item).
    #[must_use]
    pub fn features(&self) -> &Matrix<f64> {
        &self.features
    }

    /// The pairwise similarity matrix.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Rank every other item by similarity to the item at `index` and return
    /// the top `k`.
    ///
    /// Sorting is stable with ties broken by corpus order; the query item is
    /// excluded. Returns `min(k, corpus_size - 1)` entries.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn neighbors(&self, index: usize, k: usize) -> Vec<Recommendation> {
        let row = self.similarity.row(index);
        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(k);

        ranked
            .into_iter()
            .map(|(other, score)| {
                let item: &CatalogItem = &self.corpus.items()[other];
                Recommendation {
                    id: item.id,
                    title: item.title.clone(),
                    score,
                }
            })
            .collect()
    }

    /// Top [`DEFAULT_TOP_K`] neighbors of the first item whose title matches
    /// `title` exactly.
    ///
    /// Title matching is case-sensitive with no fuzzy fallback; duplicate
    /// titles resolve to the first occurrence in corpus order. Prefer
    /// [`Snapshot::recommend_by_id`] when ids are available.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::TitleNotFound`] if no title matches.
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        self.recommend_top_k(title, DEFAULT_TOP_K)
    }

    /// Like [`Snapshot::recommend`] with a caller-chosen result bound.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::TitleNotFound`] if no title matches.
    pub fn recommend_top_k(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let index = self
            .corpus
            .position_of_title(title)
            .ok_or_else(|| RecomendarError::TitleNotFound {
                title: title.to_string(),
            })?;
        Ok(self.neighbors(index, k))
    }

    /// Top [`DEFAULT_TOP_K`] neighbors of the item with the given id.
    ///
    /// Ids are unique, so this avoids the duplicate-title ambiguity of the
    /// title-keyed operation.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::ItemNotFound`] if the id is absent.
    pub fn recommend_by_id(&self, id: u64) -> Result<Vec<Recommendation>> {
        let index = self
            .corpus
            .position_of_id(id)
            .ok_or(RecomendarError::ItemNotFound { id })?;
        Ok(self.neighbors(index, DEFAULT_TOP_K))
    }
}

/// Serves recommendation queries against an atomically swappable snapshot.
///
/// Queries clone the inner `Arc` and read a consistent snapshot with no
/// further coordination, so they may run in parallel. [`Recommender::rebuild`]
/// constructs the replacement snapshot off to the side and swaps it in under
/// a short write lock.
#[derive(Debug)]
pub struct Recommender {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl Recommender {
    /// Wrap a built snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Build a snapshot from raw records and wrap it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Snapshot::build`].
    pub fn from_records<I>(records: I, config: &SnapshotConfig) -> Result<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        Ok(Self::new(Snapshot::build(records, config)?))
    }

    /// The current snapshot. The returned handle stays valid across
    /// rebuilds; it simply keeps observing the snapshot it was taken from.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Rebuild the snapshot from new records and swap it in atomically.
    ///
    /// The pipeline runs to completion before the swap; on error the
    /// previous snapshot stays in place untouched.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Snapshot::build`].
    pub fn rebuild<I>(&self, records: I, config: &SnapshotConfig) -> Result<()>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let next = Arc::new(Snapshot::build(records, config)?);
        match self.snapshot.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
        Ok(())
    }

    /// See [`Snapshot::recommend`].
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::TitleNotFound`] if no title matches.
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        self.snapshot().recommend(title)
    }

    /// See [`Snapshot::recommend_top_k`].
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::TitleNotFound`] if no title matches.
    pub fn recommend_top_k(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        self.snapshot().recommend_top_k(title, k)
    }

    /// See [`Snapshot::recommend_by_id`].
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::ItemNotFound`] if the id is absent.
    pub fn recommend_by_id(&self, id: u64) -> Result<Vec<Recommendation>> {
        self.snapshot().recommend_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str, overview: &str) -> RawRecord {
        RawRecord {
            id,
            title: title.to_string(),
            overview: Some(overview.to_string()),
            genres: "[]".to_string(),
            keywords: "[]".to_string(),
            cast: "[]".to_string(),
            crew: "[]".to_string(),
        }
    }

    fn space_corpus() -> Vec<RawRecord> {
        vec![
            record(1, "Star Clash", "space war alien"),
            record(2, "Void Battle", "space battle alien"),
            record(3, "June Wedding", "romance drama wedding"),
        ]
    }

    #[test]
    fn test_build_produces_consistent_shapes() {
        let snapshot =
            Snapshot::build(space_corpus(), &SnapshotConfig::default()).expect("should build");
        let n = snapshot.corpus().len();
        assert_eq!(n, 3);
        assert_eq!(snapshot.features().n_rows(), n);
        assert_eq!(snapshot.features().n_cols(), snapshot.vocabulary().len());
        assert_eq!(snapshot.similarity().len(), n);
    }

    #[test]
    fn test_recommend_ranks_overlapping_item_first() {
        let snapshot =
            Snapshot::build(space_corpus(), &SnapshotConfig::default()).expect("should build");
        let hits = snapshot.recommend("Star Clash").expect("title exists");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Void Battle");
        assert_eq!(hits[1].title, "June Wedding");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_recommend_never_returns_query_item() {
        let snapshot =
            Snapshot::build(space_corpus(), &SnapshotConfig::default()).expect("should build");
        let hits = snapshot.recommend("Star Clash").expect("title exists");
        assert!(hits.iter().all(|r| r.id != 1));
    }

    #[test]
    fn test_recommend_caps_at_top_k() {
        let records: Vec<RawRecord> = (0..9)
            .map(|i| record(i, &format!("Item {i}"), "shared tokens everywhere"))
            .collect();
        let snapshot =
            Snapshot::build(records, &SnapshotConfig::default()).expect("should build");
        let hits = snapshot.recommend("Item 0").expect("title exists");
        assert_eq!(hits.len(), DEFAULT_TOP_K);
    }

    #[test]
    fn test_recommend_ties_follow_corpus_order() {
        let records: Vec<RawRecord> = (0..4)
            .map(|i| record(i, &format!("Item {i}"), "identical overview text"))
            .collect();
        let snapshot =
            Snapshot::build(records, &SnapshotConfig::default()).expect("should build");
        let hits = snapshot.recommend("Item 0").expect("title exists");
        let ids: Vec<u64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_recommend_unknown_title_is_not_found() {
        let snapshot =
            Snapshot::build(space_corpus(), &SnapshotConfig::default()).expect("should build");
        let err = snapshot.recommend("No Such Film").expect_err("should fail");
        assert!(matches!(err, RecomendarError::TitleNotFound { .. }));
    }

    #[test]
    fn test_recommend_by_id() {
        let snapshot =
            Snapshot::build(space_corpus(), &SnapshotConfig::default()).expect("should build");
        let hits = snapshot.recommend_by_id(1).expect("id exists");
        assert_eq!(hits[0].id, 2);

        let err = snapshot.recommend_by_id(99).expect_err("should fail");
        assert!(matches!(err, RecomendarError::ItemNotFound { id: 99 }));
    }

    #[test]
    fn test_recommend_top_k_custom_bound() {
        let snapshot =
            Snapshot::build(space_corpus(), &SnapshotConfig::default()).expect("should build");
        let hits = snapshot
            .recommend_top_k("Star Clash", 1)
            .expect("title exists");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Void Battle");
    }

    #[test]
    fn test_rebuild_swaps_snapshot() {
        let recommender = Recommender::from_records(space_corpus(), &SnapshotConfig::default())
            .expect("should build");
        let before = recommender.snapshot();
        assert_eq!(before.corpus().len(), 3);

        let smaller = vec![
            record(10, "Solo Flight", "lone pilot crossing"),
            record(11, "Night Drift", "lone pilot landing"),
        ];
        recommender
            .rebuild(smaller, &SnapshotConfig::default())
            .expect("rebuild should succeed");

        // old handle keeps observing the snapshot it was taken from
        assert_eq!(before.corpus().len(), 3);
        assert_eq!(recommender.snapshot().corpus().len(), 2);
        let hits = recommender.recommend("Solo Flight").expect("title exists");
        assert_eq!(hits[0].title, "Night Drift");
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_snapshot() {
        let recommender = Recommender::from_records(space_corpus(), &SnapshotConfig::default())
            .expect("should build");
        let mut bad = record(20, "Broken", "text");
        bad.overview = None;
        let result = recommender.rebuild(vec![bad], &SnapshotConfig::default());
        assert!(matches!(result, Err(RecomendarError::EmptyCorpus)));
        assert_eq!(recommender.snapshot().corpus().len(), 3);
    }

    #[test]
    fn test_parallel_queries_share_snapshot() {
        let recommender = std::sync::Arc::new(
            Recommender::from_records(space_corpus(), &SnapshotConfig::default())
                .expect("should build"),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recommender = std::sync::Arc::clone(&recommender);
                std::thread::spawn(move || {
                    recommender.recommend("Star Clash").expect("title exists")
                })
            })
            .collect();

        for handle in handles {
            let hits = handle.join().expect("thread should not panic");
            assert_eq!(hits[0].title, "Void Battle");
        }
    }
}
