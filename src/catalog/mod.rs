//! Catalog records and attribute normalization.
//!
//! The record loader (an external collaborator) supplies [`RawRecord`]s with
//! structured attribute fields serialized as JSON, already joined across any
//! source tables on a shared item id. This module extracts flat string lists
//! from those fields and assembles the [`Corpus`]: the ordered subset of
//! records that normalized completely.
//!
//! Records that fail normalization are dropped, not fatal; an input where
//! every record fails is an [`RecomendarError::EmptyCorpus`] error.

use log::{info, warn};
use serde::Deserialize;

use crate::error::{RecomendarError, Result};

/// Number of top-billed cast names kept per item.
pub const CAST_LIMIT: usize = 3;

/// Crew role that qualifies an entry for the `directors` attribute.
pub const DIRECTOR_ROLE: &str = "Director";

/// Raw item record as supplied by the record loader.
///
/// The four structured attribute fields hold serialized JSON arrays in the
/// shape the raw dataset ships them: `genres`/`keywords` as
/// `[{"id": …, "name": …}, …]`, `cast` as an ordered array of credited
/// people, `crew` as `[{"name": …, "job": …}, …]`.
///
/// Derives `Deserialize` so any serde-compatible loader (CSV, JSON lines)
/// can produce it; the crate itself never reads files.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Unique, stable item identifier.
    pub id: u64,
    /// Display title; the lookup key for queries, not guaranteed unique.
    pub title: String,
    /// Free-text synopsis. `None` marks an incomplete record.
    pub overview: Option<String>,
    /// JSON array of named genre entities.
    pub genres: String,
    /// JSON array of named keyword entities.
    pub keywords: String,
    /// JSON array of credited cast, in billing order.
    pub cast: String,
    /// JSON array of crew entries with their role.
    pub crew: String,
}

#[derive(Debug, Deserialize)]
struct NamedEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CrewEntry {
    name: String,
    job: String,
}

/// A catalog item whose attributes all normalized successfully.
///
/// Multi-word entity names are collapsed to single tokens
/// ("Science Fiction" → "ScienceFiction") so they survive downstream
/// whitespace tokenization as one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// Unique, stable item identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Free-text synopsis, untouched.
    pub overview: String,
    /// Genre names in source order, whitespace collapsed.
    pub genres: Vec<String>,
    /// Keyword names in source order, whitespace collapsed.
    pub keywords: Vec<String>,
    /// First [`CAST_LIMIT`] credited names, whitespace collapsed.
    pub cast: Vec<String>,
    /// Names of crew entries holding the [`DIRECTOR_ROLE`] role, in order.
    pub directors: Vec<String>,
}

/// Collapse internal whitespace so a multi-word name becomes one token.
fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect()
}

fn parse_names(id: u64, field: &str, raw: &str) -> Result<Vec<String>> {
    let entities: Vec<NamedEntity> = serde_json::from_str(raw)
        .map_err(|e| RecomendarError::malformed_record(id, format!("{field}: {e}")))?;
    Ok(entities
        .into_iter()
        .map(|entity| collapse_whitespace(&entity.name))
        .collect())
}

/// Normalize one raw record into a [`CatalogItem`].
///
/// Extraction rules: `genres`/`keywords` take every entity's name in source
/// order; `cast` keeps only the first [`CAST_LIMIT`] names; `crew` keeps only
/// entries whose role equals [`DIRECTOR_ROLE`] (zero, one, or more qualify).
///
/// # Errors
///
/// Returns [`RecomendarError::MalformedRecord`] if the overview is missing or
/// any structured field fails to parse. The corpus builder absorbs this by
/// dropping the record.
pub fn normalize(record: &RawRecord) -> Result<CatalogItem> {
    let overview = record
        .overview
        .as_deref()
        .ok_or_else(|| RecomendarError::malformed_record(record.id, "missing overview"))?;

    let genres = parse_names(record.id, "genres", &record.genres)?;
    let keywords = parse_names(record.id, "keywords", &record.keywords)?;

    let mut cast = parse_names(record.id, "cast", &record.cast)?;
    cast.truncate(CAST_LIMIT);

    let crew: Vec<CrewEntry> = serde_json::from_str(&record.crew)
        .map_err(|e| RecomendarError::malformed_record(record.id, format!("crew: {e}")))?;
    let directors = crew
        .into_iter()
        .filter(|entry| entry.job == DIRECTOR_ROLE)
        .map(|entry| collapse_whitespace(&entry.name))
        .collect();

    Ok(CatalogItem {
        id: record.id,
        title: record.title.clone(),
        overview: overview.to_string(),
        genres,
        keywords,
        cast,
        directors,
    })
}

/// The ordered set of items surviving normalization.
#[derive(Debug, Clone)]
pub struct Corpus {
    items: Vec<CatalogItem>,
}

impl Corpus {
    /// Build a corpus from raw records, dropping records that fail to
    /// normalize.
    ///
    /// Drops are logged, not propagated; order of surviving records is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::EmptyCorpus`] if no record survives.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut items = Vec::new();
        let mut dropped = 0usize;

        for record in records {
            match normalize(&record) {
                Ok(item) => items.push(item),
                Err(err) => {
                    dropped += 1;
                    warn!("dropping record: {err}");
                }
            }
        }

        if items.is_empty() {
            return Err(RecomendarError::EmptyCorpus);
        }

        info!("corpus built: {} items kept, {dropped} dropped", items.len());
        Ok(Self { items })
    }

    /// The surviving items, in stable order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the corpus has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the first item whose title matches exactly
    /// (case-sensitive). Duplicate titles resolve to the first occurrence in
    /// corpus order.
    #[must_use]
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }

    /// Position of the item with the given id.
    #[must_use]
    pub fn position_of_id(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
