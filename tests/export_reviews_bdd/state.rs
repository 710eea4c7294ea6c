//! Scenario state for the export BDD tests.

use camino::Utf8PathBuf;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;

use revue::export::{ExportError, ExportedReview};

/// Scenario state for spreadsheet export tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ExportState {
    pub(crate) dir: Slot<TempDir>,
    pub(crate) rows: Slot<Vec<ExportedReview>>,
    pub(crate) written: Slot<Vec<Utf8PathBuf>>,
    pub(crate) error: Slot<ExportError>,
}

/// Returns a destination path inside the scenario's temp directory,
/// creating the directory on first use.
pub(crate) fn destination_path(
    state: &ExportState,
    name: &str,
) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
    if state.dir.with_ref(|_| ()).is_none() {
        state.dir.set(TempDir::new()?);
    }

    let path = state
        .dir
        .with_ref(|dir| {
            Utf8PathBuf::from_path_buf(dir.path().join(name))
                .map_err(|_| "temp path is not UTF-8".to_owned())
        })
        .ok_or("temp dir not initialised")??;
    Ok(path)
}
