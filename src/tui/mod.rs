//! Terminal User Interface for browsing and filtering product reviews.
//!
//! This module provides an interactive TUI for navigating reviews, filtering
//! by sentiment, searching for similar words, and triggering one-off exports
//! and word clouds, using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::BrowserApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter, cursor and prompt state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, module-level storage carries the initial data. Call
//! [`set_initial_records`] before starting the program, and
//! `BrowserApp::init()` will retrieve it.
//!
//! Likewise, [`set_session_context`] must be called to enable reload,
//! export and word cloud actions from inside the browser; it stores the
//! resolved input paths, column schema and artefact settings.

use std::sync::OnceLock;

use camino::Utf8PathBuf;

use crate::cloud::CloudOptions;
use crate::corpus::{ColumnSchema, ReviewRecord};
use crate::export::ExportFormat;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::BrowserApp;

/// Global storage for initial review data.
///
/// This is set before the TUI program starts and read by
/// `BrowserApp::init()`.
static INITIAL_RECORDS: OnceLock<Vec<ReviewRecord>> = OnceLock::new();

/// Global storage for the session context used by in-browser actions.
static SESSION_CONTEXT: OnceLock<SessionContext> = OnceLock::new();

/// Resolved settings the browser needs for reload, search and artefacts.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Review input files, in load order.
    pub inputs: Vec<Utf8PathBuf>,
    /// Column schema the inputs were loaded with.
    pub schema: ColumnSchema,
    /// Jaro-Winkler cutoff for similarity search.
    pub similarity_threshold: f64,
    /// Stopword list language for word clouds.
    pub stopword_language: Option<String>,
    /// Word cloud canvas and word limit settings.
    pub cloud_options: CloudOptions,
    /// Destination path for word cloud PNGs.
    pub cloud_destination: Utf8PathBuf,
    /// Spreadsheet export format.
    pub export_format: ExportFormat,
    /// Destination path for spreadsheet exports.
    pub export_destination: Utf8PathBuf,
    /// Maximum rows per exported file before splitting.
    pub export_row_cap: usize,
}

/// Sets the initial records for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Returns
/// `true` if the records were set, `false` if they were already set.
pub fn set_initial_records(records: Vec<ReviewRecord>) -> bool {
    INITIAL_RECORDS.set(records).is_ok()
}

/// Sets the session context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to enable
/// reload, export and word cloud actions. Returns `true` if the context was
/// set, `false` if it was already set.
pub fn set_session_context(context: SessionContext) -> bool {
    SESSION_CONTEXT.set(context).is_ok()
}

/// Gets a clone of the initial records from storage.
///
/// Called internally by `BrowserApp::init()`. Returns the stored records or
/// an empty vector if not set. Clones because `OnceLock` does not support
/// taking the value out.
pub(crate) fn get_initial_records() -> Vec<ReviewRecord> {
    INITIAL_RECORDS.get().cloned().unwrap_or_default()
}

/// Returns the session context, if one was set before the program started.
pub(crate) fn session_context() -> Option<&'static SessionContext> {
    SESSION_CONTEXT.get()
}
