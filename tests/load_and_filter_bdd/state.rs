//! Scenario state for the load-and-filter BDD tests.

use camino::Utf8PathBuf;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;

use revue::corpus::{LoadError, ReviewCollection};

/// Scenario state for loading review files.
#[derive(ScenarioState, Default)]
pub(crate) struct LoadState {
    pub(crate) dir: Slot<TempDir>,
    pub(crate) inputs: Slot<Vec<Utf8PathBuf>>,
    pub(crate) collection: Slot<ReviewCollection>,
    pub(crate) error: Slot<LoadError>,
}

/// Writes `content` as a CSV file in the scenario's temp directory and
/// records the path in the input list.
pub(crate) fn add_input_file(
    state: &LoadState,
    name: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
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

    std::fs::write(&path, content)?;

    let mut inputs = state.inputs.take().unwrap_or_default();
    inputs.push(path);
    state.inputs.set(inputs);
    Ok(())
}
