//! Test helpers for constructing review fixtures.
//!
//! This module provides builder functions for creating [`ReviewRecord`] and
//! [`ReviewCollection`] instances in tests, reducing boilerplate and keeping
//! fixtures consistent across test modules. It is compiled for unit tests
//! and, behind the `test-support` feature, for integration tests.

use super::model::{ReviewCollection, ReviewRecord, Sentiment};

/// Constructs a minimal review with only body and sentiment set.
#[must_use]
pub fn minimal_review(body: &str, sentiment: Sentiment) -> ReviewRecord {
    ReviewRecord {
        body: body.to_owned(),
        sentiment,
        title: None,
        rating: None,
        product_id: None,
        date: None,
    }
}

/// Constructs a review with a title alongside body and sentiment.
#[must_use]
pub fn titled_review(title: &str, body: &str, sentiment: Sentiment) -> ReviewRecord {
    ReviewRecord {
        title: Some(title.to_owned()),
        ..minimal_review(body, sentiment)
    }
}

/// Builds a collection from `(body, sentiment)` pairs with no source paths.
#[must_use]
pub fn collection_from_pairs(pairs: &[(&str, Sentiment)]) -> ReviewCollection {
    let records = pairs
        .iter()
        .map(|(body, sentiment)| minimal_review(body, *sentiment))
        .collect();
    ReviewCollection::new(records, Vec::new())
}

/// Returns the two-record example collection used across filter tests:
/// one positive "great product" and one negative "terrible".
#[must_use]
pub fn example_collection() -> ReviewCollection {
    collection_from_pairs(&[
        ("great product", Sentiment::Positive),
        ("terrible", Sentiment::Negative),
    ])
}
