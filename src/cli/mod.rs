//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`summary`]: load the corpus and print per-sentiment counts
//! - [`export_reviews`]: one-shot spreadsheet export
//! - [`word_cloud`]: one-shot word cloud PNG
//! - [`browse`]: interactive TUI browser
//!
//! Output formatting utilities are in [`output`].

use thiserror::Error;

use crate::artefact::ArtefactWriteError;
use crate::cloud::RenderError;
use crate::config::RevueConfig;
use crate::corpus::{LoadError, ReviewCollection, load_collection};
use crate::export::ExportError;
use crate::telemetry::{TelemetryEvent, TelemetrySink, timed};

pub mod browse;
pub mod export_reviews;
pub mod output;
pub mod summary;
pub mod word_cloud;

/// Errors surfaced by the CLI operation modes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or configuration failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Spreadsheet export failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Word cloud rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An artefact could not be written.
    #[error(transparent)]
    Artefact(#[from] ArtefactWriteError),

    /// Writing to stdout failed.
    #[error("failed to write output: {message}")]
    Io {
        /// Underlying failure detail.
        message: String,
    },

    /// The terminal interface failed to start or run.
    #[error("terminal interface error: {message}")]
    Tui {
        /// Underlying failure detail.
        message: String,
    },
}

/// Loads the configured inputs, timing the load and recording its size.
pub(crate) fn load_configured_collection(
    config: &RevueConfig,
    sink: &dyn TelemetrySink,
) -> Result<ReviewCollection, CliError> {
    let inputs = config.require_inputs()?;
    let schema = config.column_schema();

    let collection = timed(sink, "load_collection", || {
        load_collection(inputs, &schema)
    })?;
    sink.record(TelemetryEvent::CollectionLoaded {
        records: collection.len(),
        sources: collection
            .sources()
            .iter()
            .map(ToString::to_string)
            .collect(),
    });
    Ok(collection)
}

/// Applies the configured one-shot sentiment filter to a loaded collection.
///
/// Returns the records that pass the filter; with no filter configured,
/// all records pass.
pub(crate) fn apply_sentiment_filter(
    config: &RevueConfig,
    collection: ReviewCollection,
) -> Result<Vec<crate::corpus::ReviewRecord>, CliError> {
    let filter = config.sentiment_filter()?;
    let records = collection.into_records();
    Ok(match filter {
        None => records,
        Some(sentiment) => records
            .into_iter()
            .filter(|record| record.sentiment == sentiment)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use crate::config::RevueConfig;
    use crate::corpus::Sentiment;
    use crate::corpus::test_support::example_collection;
    use crate::telemetry::NoopTelemetrySink;

    use super::*;

    #[test]
    fn missing_inputs_surface_as_a_load_error() {
        let config = RevueConfig::default();
        let result = load_configured_collection(&config, &NoopTelemetrySink);
        assert!(matches!(result, Err(CliError::Load(LoadError::NoInputs))));
    }

    #[test]
    fn sentiment_filter_keeps_only_matching_records() {
        let config = RevueConfig {
            sentiment: Some("negative".to_owned()),
            ..RevueConfig::default()
        };

        let records = apply_sentiment_filter(&config, example_collection())
            .expect("filter should apply");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records.first().map(|record| record.sentiment),
            Some(Sentiment::Negative)
        );
    }

    #[test]
    fn positive_filter_keeps_exactly_the_positive_record() {
        let config = RevueConfig {
            sentiment: Some("positive".to_owned()),
            ..RevueConfig::default()
        };

        let records = apply_sentiment_filter(&config, example_collection())
            .expect("filter should apply");

        assert_eq!(records.len(), 1);
        assert_eq!(records.first().map(|record| record.body.as_str()), Some("great product"));
    }

    #[test]
    fn filtering_an_already_filtered_view_is_the_identity() {
        let config = RevueConfig {
            sentiment: Some("positive".to_owned()),
            ..RevueConfig::default()
        };

        let once = apply_sentiment_filter(&config, example_collection())
            .expect("first filter should apply");
        let twice = apply_sentiment_filter(
            &config,
            crate::corpus::ReviewCollection::new(once.clone(), Vec::new()),
        )
        .expect("second filter should apply");

        assert_eq!(once, twice);
    }

    #[test]
    fn no_filter_passes_everything_through() {
        let config = RevueConfig::default();
        let records = apply_sentiment_filter(&config, example_collection())
            .expect("no filter should pass");
        assert_eq!(records.len(), 2);
    }
}
