//! One-shot word cloud mode: load, filter, render, and write a PNG.

use crate::analysis::StopwordSet;
use crate::artefact::write_bytes;
use crate::cloud::render_cloud_png;
use crate::config::RevueConfig;
use crate::telemetry::{TelemetryEvent, timed};

use super::{CliError, apply_sentiment_filter, load_configured_collection, output};

/// Runs the word cloud mode.
///
/// Loads the corpus, applies the configured sentiment filter, renders a word
/// cloud of the surviving review bodies, and writes it to the configured
/// destination.
///
/// # Errors
///
/// Returns an error when loading fails, no non-stopword words remain to
/// draw, rendering fails, or the PNG cannot be written.
pub fn run(config: &RevueConfig) -> Result<(), CliError> {
    let sink = config.telemetry_sink();
    let collection = load_configured_collection(config, sink.as_ref())?;
    let records = apply_sentiment_filter(config, collection)?;

    let stopwords = StopwordSet::for_language(config.stopword_language.as_deref());
    let options = config.cloud_options();
    let destination = config.cloud_destination();

    let png = timed(sink.as_ref(), "render_cloud_png", || {
        render_cloud_png(
            records.iter().map(|record| record.body.as_str()),
            &stopwords,
            &options,
        )
    })?;
    write_bytes(&destination, &png, "word cloud")?;
    sink.record(TelemetryEvent::ArtefactWritten {
        kind: "word_cloud".to_owned(),
        path: destination.to_string(),
    });

    output::write_line(&format!(
        "Word cloud of {} reviews written to {destination}",
        records.len()
    ))
}
