//! Browse mode: the interactive terminal review browser.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that allows users to navigate, filter and search reviews, and
//! trigger exports and word clouds without leaving the browser.

use std::io::{self, Write};

use bubbletea_rs::Program;

use crate::config::RevueConfig;
use crate::tui::{BrowserApp, SessionContext, set_initial_records, set_session_context};

use super::{CliError, load_configured_collection};

/// Runs the interactive browse mode.
///
/// # Errors
///
/// Returns an error if:
/// - No inputs are configured or a file cannot be read or parsed
/// - The export format is invalid
/// - The TUI fails to initialise or run
pub async fn run(config: &RevueConfig) -> Result<(), CliError> {
    let sink = config.telemetry_sink();
    let collection = load_configured_collection(config, sink.as_ref())?;

    let export_format = config.resolve_export_format()?;
    let context = SessionContext {
        inputs: config.require_inputs()?.to_vec(),
        schema: config.column_schema(),
        similarity_threshold: config.similarity_threshold,
        stopword_language: config.stopword_language.clone(),
        cloud_options: config.cloud_options(),
        cloud_destination: config.cloud_destination(),
        export_format,
        export_destination: config.export_destination(export_format),
        export_row_cap: config.export_row_cap,
    };

    // Store data in global state for Model::init() to retrieve. If already
    // set (e.g. re-running the browser in the same process) this is a no-op
    // and the existing data remains.
    let _ = set_initial_records(collection.into_records());
    let _ = set_session_context(context);

    run_tui().await.map_err(|error| CliError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `BrowserApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // BrowserApp::init() will retrieve data from module-level storage.
    let program = Program::<BrowserApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_app_can_be_created_empty() {
        let app = BrowserApp::empty();
        assert_eq!(app.filtered_count(), 0);
    }
}
