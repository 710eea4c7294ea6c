//! One-shot export mode: load, filter, and write a spreadsheet.

use crate::config::RevueConfig;
use crate::export::{ExportedReview, export_collection};
use crate::telemetry::{TelemetryEvent, timed};

use super::{CliError, apply_sentiment_filter, load_configured_collection, output};

/// Runs the export mode.
///
/// Loads the corpus, applies the configured sentiment filter, and writes the
/// surviving reviews to the configured destination, splitting into part
/// files past the row cap.
///
/// # Errors
///
/// Returns an error when loading fails, the export format or destination is
/// invalid, or a file cannot be written.
pub fn run(config: &RevueConfig) -> Result<(), CliError> {
    let sink = config.telemetry_sink();
    let collection = load_configured_collection(config, sink.as_ref())?;
    let records = apply_sentiment_filter(config, collection)?;

    let format = config.resolve_export_format()?;
    let destination = config.export_destination(format);
    let rows: Vec<ExportedReview> = records.iter().map(ExportedReview::from).collect();

    let written = timed(sink.as_ref(), "export_collection", || {
        export_collection(&rows, &destination, format, config.export_row_cap)
    })?;
    for path in &written {
        sink.record(TelemetryEvent::ArtefactWritten {
            kind: "spreadsheet".to_owned(),
            path: path.to_string(),
        });
    }

    let names: Vec<String> = written.iter().map(ToString::to_string).collect();
    output::write_line(&format!(
        "Exported {} reviews to {}",
        rows.len(),
        names.join(", ")
    ))
}
