//! Cosine similarity and the pairwise similarity matrix.
//!
//! Cosine similarity measures token-overlap orientation, not magnitude: for
//! non-negative count vectors the score ranges over [0, 1]. A zero vector
//! (no overlap with the vocabulary) is defined to have similarity 0 against
//! everything, itself included, matching the limit as the magnitude goes to
//! zero and avoiding division by zero.

use log::info;

use crate::error::{RecomendarError, Result};
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// # Errors
///
/// Returns an error if the vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use recomendar::primitives::Vector;
/// use recomendar::text::cosine_similarity;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 0.0]);
/// let b = Vector::from_slice(&[1.0, 2.0, 0.0]);
/// let sim = cosine_similarity(&a, &b).expect("cosine similarity should succeed");
/// assert!((sim - 1.0).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecomendarError::dimension_mismatch("len", a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(RecomendarError::Other(
            "Vectors cannot be empty".to_string(),
        ));
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(a.dot(b)? / (norm_a * norm_b))
}

/// Dense symmetric matrix of pairwise cosine similarities.
///
/// Cell (i, j) holds the similarity between item i and item j in corpus
/// order. The diagonal is 1 for items with a non-zero feature vector and 0
/// for all-zero rows. The matrix is computed eagerly for all pairs and never
/// mutated afterwards; a corpus change means a full recompute.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: Matrix<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities from a feature matrix.
    ///
    /// Exploits symmetry: each unordered pair is computed once and mirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature matrix is malformed.
    pub fn from_features(features: &Matrix<f64>) -> Result<Self> {
        let n = features.n_rows();
        info!("computing {n}x{n} pairwise similarity matrix");

        let norms: Vec<f64> = (0..n)
            .map(|i| {
                features
                    .row_slice(i)
                    .iter()
                    .map(|x| x * x)
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        let mut scores = Matrix::zeros(n, n);
        for i in 0..n {
            if norms[i] > 0.0 {
                scores.set(i, i, 1.0);
            }
            for j in (i + 1)..n {
                let sim = if norms[i] == 0.0 || norms[j] == 0.0 {
                    0.0
                } else {
                    let dot: f64 = features
                        .row_slice(i)
                        .iter()
                        .zip(features.row_slice(j))
                        .map(|(x, y)| x * y)
                        .sum();
                    dot / (norms[i] * norms[j])
                };
                scores.set(i, j, sim);
                scores.set(j, i, sim);
            }
        }

        Ok(Self { scores })
    }

    /// Number of items covered by the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.n_rows()
    }

    /// Check if the matrix covers no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.n_rows() == 0
    }

    /// Similarity between items i and j.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores.get(i, j)
    }

    /// Full similarity row for item i, in corpus order.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        self.scores.row_slice(i)
    }
}
