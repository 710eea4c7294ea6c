//! Search, reload and artefact handlers for the review browser.
//!
//! Similarity search runs synchronously in the update loop: the corpus is
//! already in memory and a scan is cheap. Reload, export and word cloud
//! actions run as bubbletea-rs commands so the interface stays responsive
//! while files are read or written.

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::analysis::{
    DEFAULT_SIMILARITY_THRESHOLD, SimilarityQuery, StopwordSet, search_similar,
};
use crate::artefact::write_bytes;
use crate::cloud::render_cloud_png;
use crate::corpus::{ReviewCollection, ReviewRecord, load_collection};
use crate::export::{ExportedReview, export_collection};
use crate::tui::messages::AppMsg;
use crate::tui::state::{ReviewFilter, SearchPromptState};

use super::BrowserApp;

/// Shown when an action needs the session context but none was configured.
const NO_CONTEXT_MESSAGE: &str = "session context not configured";

/// Number of similar words listed in the search status message.
const STATUS_WORD_LIMIT: usize = 5;

impl BrowserApp {
    /// Dispatches search prompt messages to their handlers.
    pub(super) fn handle_search_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSearchPrompt => {
                self.search_prompt = Some(SearchPromptState::new());
                self.status = None;
                self.error = None;
            }
            AppMsg::SearchInput(ch) => {
                if let Some(prompt) = self.search_prompt.as_mut() {
                    prompt.push_char(*ch);
                }
            }
            AppMsg::SearchBackspace => {
                if let Some(prompt) = self.search_prompt.as_mut() {
                    prompt.backspace();
                }
            }
            AppMsg::SearchSubmit => self.handle_search_submit(),
            AppMsg::SearchCancel => {
                self.search_prompt = None;
            }
            _ => {
                debug_assert!(false, "non-search message routed to handle_search_msg");
            }
        }
        None
    }

    /// Runs the similarity search with the prompt's query word.
    ///
    /// A blank query just closes the prompt. A query with no matches leaves
    /// the current filter in place and reports it, matching the behaviour of
    /// the one-shot search: an unknown word is not an error.
    fn handle_search_submit(&mut self) {
        let Some(prompt) = self.search_prompt.take() else {
            return;
        };
        if prompt.is_blank() {
            return;
        }

        let threshold = crate::tui::session_context()
            .map_or(DEFAULT_SIMILARITY_THRESHOLD, |ctx| ctx.similarity_threshold);
        let query = match SimilarityQuery::new(prompt.text(), threshold) {
            Ok(query) => query,
            Err(error) => {
                self.error = Some(error.to_string());
                return;
            }
        };

        // Borrow the records through a collection without cloning them.
        let records = std::mem::take(&mut self.records);
        let collection = ReviewCollection::new(records, Vec::new());
        let outcome = search_similar(&collection, &query);
        self.records = collection.into_records();

        if outcome.is_empty() {
            self.status = Some(format!("No words similar to '{}' found", query.word()));
            return;
        }

        self.status = Some(similar_words_status(&outcome.matched_words));
        let filter = ReviewFilter::SimilarTo {
            word: query.word().to_owned(),
            indices: outcome.indices,
            matched_words: outcome.matched_words,
        };
        self.handle_set_filter(&filter);
    }

    /// Handles a reload request by re-reading the input files.
    pub(super) fn handle_reload_requested(&mut self) -> Option<Cmd> {
        // Don't start a new reload while one is running
        if self.loading {
            return None;
        }
        let Some(context) = crate::tui::session_context() else {
            self.error = Some(NO_CONTEXT_MESSAGE.to_owned());
            return None;
        };

        self.loading = true;
        self.error = None;

        let inputs = context.inputs.clone();
        let schema = context.schema.clone();
        Some(Box::pin(async move {
            let msg = match load_collection(&inputs, &schema) {
                Ok(collection) => AppMsg::ReloadComplete(collection.into_records()),
                Err(error) => AppMsg::ReloadFailed(error.to_string()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Applies reloaded records, keeping the active filter.
    pub(super) fn handle_reload_complete(&mut self, records: &[ReviewRecord]) -> Option<Cmd> {
        self.records = records.to_vec();
        // Similarity indices refer to the old records, so drop that filter.
        if matches!(
            self.filter_state.active_filter,
            ReviewFilter::SimilarTo { .. }
        ) {
            self.filter_state.active_filter = ReviewFilter::All;
        }
        self.rebuild_filter_cache();
        self.filter_state.clamp_cursor(self.filtered_count());
        self.adjust_scroll_to_cursor();
        self.loading = false;
        self.error = None;
        self.status = Some(format!("Reloaded {} reviews", self.records.len()));
        None
    }

    /// Records a failed async action and clears the loading flag.
    pub(super) fn handle_action_failed(&mut self, message: &str) -> Option<Cmd> {
        self.loading = false;
        self.error = Some(message.to_owned());
        None
    }

    /// Handles an export request for the currently visible reviews.
    pub(super) fn handle_export_requested(&mut self) -> Option<Cmd> {
        let Some(context) = crate::tui::session_context() else {
            self.error = Some(NO_CONTEXT_MESSAGE.to_owned());
            return None;
        };

        let rows: Vec<ExportedReview> = self
            .visible_records()
            .iter()
            .map(ExportedReview::from)
            .collect();
        let destination = context.export_destination.clone();
        let format = context.export_format;
        let row_cap = context.export_row_cap;
        self.status = Some("Exporting...".to_owned());

        Some(Box::pin(async move {
            let row_count = rows.len();
            let msg = match export_collection(&rows, &destination, format, row_cap) {
                Ok(files) => AppMsg::ExportComplete {
                    files: files.into_iter().map(Into::into).collect(),
                    rows: row_count,
                },
                Err(error) => AppMsg::ExportFailed(error.to_string()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    pub(super) fn handle_export_complete(&mut self, files: &[String], rows: usize) -> Option<Cmd> {
        self.status = Some(format!(
            "Exported {rows} reviews to {}",
            files.join(", ")
        ));
        None
    }

    /// Handles a word cloud request for the currently visible reviews.
    pub(super) fn handle_cloud_requested(&mut self) -> Option<Cmd> {
        let Some(context) = crate::tui::session_context() else {
            self.error = Some(NO_CONTEXT_MESSAGE.to_owned());
            return None;
        };

        let bodies: Vec<String> = self
            .visible_records()
            .into_iter()
            .map(|record| record.body)
            .collect();
        let options = context.cloud_options;
        let language = context.stopword_language.clone();
        let destination = context.cloud_destination.clone();
        self.status = Some("Rendering word cloud...".to_owned());

        Some(Box::pin(async move {
            let stopwords = StopwordSet::for_language(language.as_deref());
            let result = render_cloud_png(bodies.iter().map(String::as_str), &stopwords, &options)
                .map_err(|error| error.to_string())
                .and_then(|png| {
                    write_bytes(&destination, &png, "word cloud")
                        .map_err(|error| error.to_string())
                });
            let msg = match result {
                Ok(()) => AppMsg::CloudComplete {
                    path: destination.into(),
                },
                Err(message) => AppMsg::CloudFailed(message),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    pub(super) fn handle_cloud_complete(&mut self, path: &str) -> Option<Cmd> {
        self.status = Some(format!("Word cloud written to {path}"));
        None
    }
}

/// Builds the status line listing the first few similar words found.
fn similar_words_status(matched_words: &[String]) -> String {
    let shown: Vec<&str> = matched_words
        .iter()
        .take(STATUS_WORD_LIMIT)
        .map(String::as_str)
        .collect();
    let suffix = if matched_words.len() > STATUS_WORD_LIMIT {
        ", ..."
    } else {
        ""
    };
    format!("Similar words: {}{suffix}", shown.join(", "))
}
