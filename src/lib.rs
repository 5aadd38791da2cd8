//! Recomendar: content-based item recommendation in pure Rust.
//!
//! Recomendar turns heterogeneous item metadata (synopsis, genres, keywords,
//! cast, director) into a single normalized tag profile per item, embeds all
//! items into a shared bag-of-words feature space, computes pairwise cosine
//! similarity, and retrieves the top-K nearest items to a query.
//!
//! The pipeline is deterministic end to end and runs offline: a
//! [`recommend::Snapshot`] is built once per corpus and queried immutably;
//! corpus changes mean a full rebuild with an atomic swap, never an in-place
//! update.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! fn record(id: u64, title: &str, overview: &str, genre: &str) -> RawRecord {
//!     RawRecord {
//!         id,
//!         title: title.to_string(),
//!         overview: Some(overview.to_string()),
//!         genres: format!(r#"[{{"id": 1, "name": "{genre}"}}]"#),
//!         keywords: "[]".to_string(),
//!         cast: "[]".to_string(),
//!         crew: "[]".to_string(),
//!     }
//! }
//!
//! let records = vec![
//!     record(1, "Star Clash", "space war among alien fleets", "ScienceFiction"),
//!     record(2, "Void Battle", "space battle with alien ships", "ScienceFiction"),
//!     record(3, "June Wedding", "romance drama about a wedding", "Romance"),
//! ];
//!
//! let recommender = Recommender::from_records(records, &SnapshotConfig::default()).unwrap();
//! let hits = recommender.recommend("Star Clash").unwrap();
//! assert_eq!(hits[0].title, "Void Battle");
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: raw records, attribute normalization, corpus construction
//! - [`profile`]: per-item tag string construction
//! - [`text`]: tokenization, stemming, stop words, vectorization, similarity
//! - [`recommend`]: pipeline snapshots and query serving
//! - [`search`]: remote catalog boundary (interface only)
//! - [`primitives`]: Vector and Matrix numeric containers
//!
//! # Known limitations
//!
//! Stemming and stop word filtering are English-specific. Tokens from other
//! languages pass through unstemmed and unfiltered, silently reducing recall
//! on multilingual corpora.

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod profile;
pub mod recommend;
pub mod search;
pub mod text;

pub use error::{RecomendarError, Result};
pub use primitives::{Matrix, Vector};
