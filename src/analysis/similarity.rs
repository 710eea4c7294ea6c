//! Word-similarity search over review bodies.
//!
//! A record matches when at least one of its tokens scores at or above the
//! configured threshold against the query word under `strsim`'s
//! Jaro-Winkler similarity. The search returns matching record indices in
//! collection order together with the distinct similar words found, which
//! the shell displays alongside the filtered view.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::corpus::ReviewCollection;

use super::tokens::tokenize;

/// Default Jaro-Winkler similarity cutoff for a token to count as a match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.84;

/// Errors raised while validating a similarity query.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    /// The query word was empty or whitespace-only.
    #[error("search query must not be blank")]
    BlankQuery,

    /// The configured threshold was outside the similarity range.
    #[error("similarity threshold {value} is outside the range 0.0 to 1.0")]
    InvalidThreshold {
        /// The out-of-range threshold value.
        value: f64,
    },
}

/// A validated similarity query: a lowercase word plus a cutoff score.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityQuery {
    word: String,
    threshold: f64,
}

impl SimilarityQuery {
    /// Validates and normalises a query word and threshold.
    ///
    /// The word is trimmed and lowercased so that matching is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BlankQuery`] for an empty or whitespace-only
    /// word, and [`SearchError::InvalidThreshold`] when `threshold` falls
    /// outside `0.0..=1.0`.
    pub fn new(word: &str, threshold: f64) -> Result<Self, SearchError> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(SearchError::BlankQuery);
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SearchError::InvalidThreshold { value: threshold });
        }

        Ok(Self {
            word: trimmed.to_lowercase(),
            threshold,
        })
    }

    /// Returns the normalised query word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the similarity cutoff.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns whether a single token counts as similar to the query.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        strsim::jaro_winkler(&self.word, token) >= self.threshold
    }
}

/// The result of a similarity search over a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Indices of matching records, in collection order.
    pub indices: Vec<usize>,
    /// Distinct similar words found across matching records, sorted.
    pub matched_words: Vec<String>,
}

impl SearchOutcome {
    /// Returns whether no record matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Scans the collection for records containing words similar to the query.
///
/// A query word unknown to the corpus simply yields an empty outcome; the
/// caller treats that as "no matches", not a failure.
#[must_use]
pub fn search_similar(collection: &ReviewCollection, query: &SimilarityQuery) -> SearchOutcome {
    let mut indices = Vec::new();
    let mut matched_words = BTreeSet::new();

    for (index, record) in collection.records().iter().enumerate() {
        let mut record_matched = false;
        for token in tokenize(&record.body) {
            if query.matches_token(&token) {
                record_matched = true;
                matched_words.insert(token);
            }
        }
        if record_matched {
            indices.push(index);
        }
    }

    SearchOutcome {
        indices,
        matched_words: matched_words.into_iter().collect(),
    }
}
