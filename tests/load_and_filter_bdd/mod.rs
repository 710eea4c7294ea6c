//! Support modules for the load-and-filter BDD tests.

pub(crate) mod state;

pub(crate) use state::{LoadState, add_input_file};
