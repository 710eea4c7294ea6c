//! Domain models for product reviews and their sentiment labels.
//!
//! A [`ReviewCollection`] is the unit the rest of the application works on:
//! filters, similarity search, word clouds, and exports all consume the
//! ordered records it holds. Records never change order after loading, so a
//! record's position doubles as its stable identifier within a session.

use std::fmt;
use std::str::FromStr;

use camino::Utf8PathBuf;

use super::error::LoadError;

/// Sentiment polarity assigned to a review by the source data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// The review praises the product.
    Positive,
    /// The review criticises the product.
    Negative,
}

impl Sentiment {
    /// Returns the lowercase label used in data files and on screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// Parses a label cell into a sentiment.
    ///
    /// Accepts the textual labels `positive` and `negative` in any ASCII
    /// casing, alongside the numeric encoding used by the common review
    /// corpora where `2` marks praise and `1` marks criticism. Surrounding
    /// whitespace is ignored. Returns `None` for anything else, including
    /// empty cells.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("positive") || trimmed == "2" {
            Some(Self::Positive)
        } else if trimmed.eq_ignore_ascii_case("negative") || trimmed == "1" {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Returns the opposite polarity.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sentiment {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| LoadError::Configuration {
            message: format!("unrecognised sentiment '{s}'; expected 'positive' or 'negative'"),
        })
    }
}

/// A single product review parsed from a delimited input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    /// Full review text shown in the detail pane and scanned by search.
    pub body: String,
    /// Polarity label attached to the review.
    pub sentiment: Sentiment,
    /// Short review title, when the source file provides one.
    pub title: Option<String>,
    /// Star rating between one and five, when present.
    pub rating: Option<u8>,
    /// Identifier of the reviewed product, when present.
    pub product_id: Option<String>,
    /// Review date exactly as recorded in the source file, when present.
    pub date: Option<String>,
}

impl ReviewRecord {
    /// Returns the title when present, falling back to a leading slice of
    /// the body so lists always have something to show.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.body)
    }
}

/// An ordered collection of reviews loaded from one or more input files.
///
/// Records keep the order of the source files and of the rows within each
/// file, so the first data row of the first file is record zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCollection {
    records: Vec<ReviewRecord>,
    sources: Vec<Utf8PathBuf>,
}

impl ReviewCollection {
    /// Creates a collection from already-parsed records and their sources.
    #[must_use]
    pub const fn new(records: Vec<ReviewRecord>, sources: Vec<Utf8PathBuf>) -> Self {
        Self { records, sources }
    }

    /// Returns the loaded records in source order.
    #[must_use]
    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Consumes the collection, returning the records.
    #[must_use]
    pub fn into_records(self) -> Vec<ReviewRecord> {
        self.records
    }

    /// Returns the paths the collection was loaded from, in load order.
    #[must_use]
    pub fn sources(&self) -> &[Utf8PathBuf] {
        &self.sources
    }

    /// Returns the number of loaded reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the collection holds no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts the records carrying the given sentiment.
    #[must_use]
    pub fn count_with_sentiment(&self, sentiment: Sentiment) -> usize {
        self.records
            .iter()
            .filter(|record| record.sentiment == sentiment)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("positive", Some(Sentiment::Positive))]
    #[case("POSITIVE", Some(Sentiment::Positive))]
    #[case("  Positive  ", Some(Sentiment::Positive))]
    #[case("2", Some(Sentiment::Positive))]
    #[case("negative", Some(Sentiment::Negative))]
    #[case("NeGaTiVe", Some(Sentiment::Negative))]
    #[case("1", Some(Sentiment::Negative))]
    #[case("", None)]
    #[case("neutral", None)]
    #[case("3", None)]
    #[case("pos", None)]
    fn from_label_accepts_words_and_numeric_codes(
        #[case] raw: &str,
        #[case] expected: Option<Sentiment>,
    ) {
        assert_eq!(Sentiment::from_label(raw), expected);
    }

    #[rstest]
    fn from_str_rejects_unknown_labels_with_configuration_error() {
        let error = "meh".parse::<Sentiment>().unwrap_err();
        assert!(error.to_string().contains("unrecognised sentiment 'meh'"));
    }

    #[rstest]
    fn display_matches_label() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::Negative.to_string(), "negative");
    }

    #[rstest]
    fn opposite_swaps_polarity() {
        assert_eq!(Sentiment::Positive.opposite(), Sentiment::Negative);
        assert_eq!(Sentiment::Negative.opposite(), Sentiment::Positive);
    }

    #[rstest]
    fn display_title_falls_back_to_body() {
        let titled = ReviewRecord {
            body: "Long body".to_owned(),
            sentiment: Sentiment::Positive,
            title: Some("Great blender".to_owned()),
            rating: None,
            product_id: None,
            date: None,
        };
        assert_eq!(titled.display_title(), "Great blender");

        let untitled = ReviewRecord {
            title: None,
            ..titled.clone()
        };
        assert_eq!(untitled.display_title(), "Long body");
    }

    #[rstest]
    fn count_with_sentiment_partitions_records() {
        let records = vec![
            review(Sentiment::Positive),
            review(Sentiment::Negative),
            review(Sentiment::Positive),
        ];
        let collection = ReviewCollection::new(records, Vec::new());
        assert_eq!(collection.count_with_sentiment(Sentiment::Positive), 2);
        assert_eq!(collection.count_with_sentiment(Sentiment::Negative), 1);
        assert_eq!(collection.len(), 3);
        assert!(!collection.is_empty());
    }

    fn review(sentiment: Sentiment) -> ReviewRecord {
        ReviewRecord {
            body: "body".to_owned(),
            sentiment,
            title: None,
            rating: None,
            product_id: None,
            date: None,
        }
    }
}
