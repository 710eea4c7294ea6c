//! Summary mode: load the corpus and print per-sentiment counts.

use crate::config::RevueConfig;

use super::{CliError, load_configured_collection, output};

/// Runs the summary mode.
///
/// # Errors
///
/// Returns an error when no inputs are configured, a file cannot be read or
/// parsed, or stdout cannot be written.
pub fn run(config: &RevueConfig) -> Result<(), CliError> {
    let sink = config.telemetry_sink();
    let collection = load_configured_collection(config, sink.as_ref())?;
    output::write_summary(&collection)
}
