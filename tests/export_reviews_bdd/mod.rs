//! Support modules for the export BDD tests.

pub(crate) mod state;

pub(crate) use state::{ExportState, destination_path};
