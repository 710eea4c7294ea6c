//! Revue library crate for browsing and analysing product reviews.
//!
//! The library loads labelled product reviews from delimited files, filters
//! them by sentiment, searches them for similar words, renders word cloud
//! images, and exports filtered views to spreadsheets. An interactive
//! terminal browser in [`tui`] drives the same operations from a keyboard.

pub mod analysis;
pub mod artefact;
pub mod cli;
pub mod cloud;
pub mod config;
pub mod corpus;
pub mod export;
pub mod telemetry;
pub mod tui;

pub use cli::CliError;
pub use config::{OperationMode, RevueConfig};
pub use corpus::{ColumnSchema, LoadError, ReviewCollection, ReviewRecord, Sentiment};
pub use export::{ExportError, ExportFormat};
