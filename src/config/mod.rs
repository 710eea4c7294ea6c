//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.revue.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVUE_*`
//! 4. **Command-line arguments** – `--inputs`/`-i`, `--export`/`-e`, etc.
//!
//! # Configuration File
//!
//! Place `.revue.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! inputs = ["a.csv", "b.csv"]
//! text_column = "text"
//! label_column = "polarity"
//! similarity_threshold = 0.84
//! export_output = "reviews.xlsx"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_SIMILARITY_THRESHOLD;
use crate::cloud::{CanvasSpec, CloudOptions};
use crate::corpus::{ColumnSchema, LoadError, Sentiment};
use crate::export::{ExportError, ExportFormat};
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Load the corpus and print per-label counts.
    Summary,
    /// Load, optionally filter by label, and write a spreadsheet.
    Export,
    /// Load, optionally filter by label, and write a word cloud PNG.
    WordCloud,
    /// Interactive terminal browser.
    Browse,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use revue::RevueConfig;
///
/// let config = RevueConfig::load().expect("failed to load configuration");
/// let inputs = config.require_inputs().expect("input files required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVUE",
    discovery(
        dotfile_name = ".revue.toml",
        config_file_name = "revue.toml",
        app_name = "revue"
    )
)]
pub struct RevueConfig {
    /// Review input files, concatenated in argument order.
    ///
    /// Can be provided via:
    /// - CLI: `--inputs <PATH>...` or `-i <PATH>`
    /// - Environment: `REVUE_INPUTS`
    /// - Config file: `inputs = ["a.csv"]`
    #[ortho_config(cli_short = 'i', merge_strategy = "replace")]
    pub inputs: Vec<Utf8PathBuf>,

    /// Name of the column holding the review body. Defaults to `text`.
    #[ortho_config()]
    pub text_column: Option<String>,

    /// Name of the column holding the sentiment label. Defaults to
    /// `polarity`.
    #[ortho_config()]
    pub label_column: Option<String>,

    /// Name of the optional review title column. Defaults to `title`.
    #[ortho_config(cli_short = 'I')]
    pub title_column: Option<String>,

    /// Name of the optional star rating column. Defaults to `rating`.
    #[ortho_config()]
    pub rating_column: Option<String>,

    /// Name of the optional product identifier column. Defaults to
    /// `product_id`.
    #[ortho_config()]
    pub product_column: Option<String>,

    /// Name of the optional review date column. Defaults to `date`.
    #[ortho_config()]
    pub date_column: Option<String>,

    /// Sentiment label applied before one-shot export and word cloud
    /// modes: `positive` or `negative`. No filter when unset.
    #[ortho_config(cli_short = 's')]
    pub sentiment: Option<String>,

    /// Jaro-Winkler similarity cutoff for search, between 0 and 1.
    ///
    /// Defaults to 0.84.
    #[ortho_config()]
    pub similarity_threshold: f64,

    /// Stopword list language for the word cloud. Defaults to `english`.
    #[ortho_config(cli_short = 'P')]
    pub stopword_language: Option<String>,

    /// Number of most frequent words the cloud draws. Defaults to 20.
    #[ortho_config()]
    pub cloud_words: usize,

    /// Word cloud canvas width in pixels. Defaults to 800.
    #[ortho_config()]
    pub cloud_width: u32,

    /// Word cloud canvas height in pixels. Defaults to 500.
    #[ortho_config()]
    pub cloud_height: u32,

    /// Destination path for the word cloud PNG.
    ///
    /// Defaults to `word_cloud.png` in the current directory.
    #[ortho_config(cli_short = 'O')]
    pub cloud_output: Option<Utf8PathBuf>,

    /// Destination path for spreadsheet exports.
    ///
    /// Defaults to `reviews.<ext>` in the current directory, where the
    /// extension follows the export format.
    #[ortho_config(cli_short = 'o')]
    pub export_output: Option<Utf8PathBuf>,

    /// Spreadsheet format: `xlsx` (default) or `csv`.
    #[ortho_config(cli_short = 'x')]
    pub export_format: Option<String>,

    /// Maximum rows per exported file before splitting into parts.
    ///
    /// Defaults to 250 000, comfortably below Excel's sheet limit.
    #[ortho_config(cli_short = 'E')]
    pub export_row_cap: usize,

    /// Runs a one-shot spreadsheet export and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--export` / `-e`
    /// - Config file: `export = true`
    #[ortho_config(cli_short = 'e')]
    pub export: bool,

    /// Renders a one-shot word cloud and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--cloud` / `-w`
    /// - Config file: `cloud = true`
    #[ortho_config(cli_short = 'w')]
    pub cloud: bool,

    /// Launches the interactive terminal browser.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Emits telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

const DEFAULT_CLOUD_WORDS: usize = 20;
const DEFAULT_EXPORT_ROW_CAP: usize = 250_000;
const DEFAULT_EXPORT_STEM: &str = "reviews";
const DEFAULT_CLOUD_OUTPUT: &str = "word_cloud.png";

impl Default for RevueConfig {
    fn default() -> Self {
        let canvas = CanvasSpec::default();
        Self {
            inputs: Vec::new(),
            text_column: None,
            label_column: None,
            title_column: None,
            rating_column: None,
            product_column: None,
            date_column: None,
            sentiment: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            stopword_language: None,
            cloud_words: DEFAULT_CLOUD_WORDS,
            cloud_width: canvas.width,
            cloud_height: canvas.height,
            cloud_output: None,
            export_output: None,
            export_format: None,
            export_row_cap: DEFAULT_EXPORT_ROW_CAP,
            export: false,
            cloud: false,
            tui: false,
            telemetry: false,
        }
    }
}

impl RevueConfig {
    /// Returns the input paths or an error when none are configured.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoInputs`] when no input file is configured.
    pub fn require_inputs(&self) -> Result<&[Utf8PathBuf], LoadError> {
        if self.inputs.is_empty() {
            return Err(LoadError::NoInputs);
        }
        Ok(&self.inputs)
    }

    /// Builds the column schema from configured names and defaults.
    #[must_use]
    pub fn column_schema(&self) -> ColumnSchema {
        let defaults = ColumnSchema::default();
        let pick = |configured: &Option<String>, default: String| {
            configured.clone().unwrap_or(default)
        };
        ColumnSchema {
            text: pick(&self.text_column, defaults.text),
            label: pick(&self.label_column, defaults.label),
            title: pick(&self.title_column, defaults.title),
            rating: pick(&self.rating_column, defaults.rating),
            product_id: pick(&self.product_column, defaults.product_id),
            date: pick(&self.date_column, defaults.date),
        }
    }

    /// Parses the configured one-shot sentiment filter, if any.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Configuration`] when the configured label is
    /// neither `positive` nor `negative`.
    pub fn sentiment_filter(&self) -> Result<Option<Sentiment>, LoadError> {
        self.sentiment
            .as_deref()
            .map(str::parse::<Sentiment>)
            .transpose()
    }

    /// Parses the configured export format, defaulting to xlsx.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`] for an unknown format
    /// name.
    pub fn resolve_export_format(&self) -> Result<ExportFormat, ExportError> {
        self.export_format
            .as_deref()
            .map_or(Ok(ExportFormat::default()), str::parse)
    }

    /// Returns the export destination, deriving the default file name from
    /// the format when none is configured.
    #[must_use]
    pub fn export_destination(&self, format: ExportFormat) -> Utf8PathBuf {
        self.export_output.clone().unwrap_or_else(|| {
            Utf8PathBuf::from(format!("{DEFAULT_EXPORT_STEM}.{}", format.extension()))
        })
    }

    /// Returns the word cloud destination path.
    #[must_use]
    pub fn cloud_destination(&self) -> Utf8PathBuf {
        self.cloud_output
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CLOUD_OUTPUT))
    }

    /// Builds the word cloud pipeline options.
    #[must_use]
    pub const fn cloud_options(&self) -> CloudOptions {
        let defaults = CanvasSpec {
            width: self.cloud_width,
            height: self.cloud_height,
            min_font_size: 14,
            max_font_size: 64,
        };
        CloudOptions {
            canvas: defaults,
            max_words: self.cloud_words,
        }
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Browse` when the TUI flag is set, otherwise `Export` or
    /// `WordCloud` when the corresponding one-shot flag is set, and
    /// `Summary` when no mode flag is present.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::Browse
        } else if self.export {
            OperationMode::Export
        } else if self.cloud {
            OperationMode::WordCloud
        } else {
            OperationMode::Summary
        }
    }

    /// Builds the telemetry sink selected by configuration.
    #[must_use]
    pub fn telemetry_sink(&self) -> Box<dyn TelemetrySink> {
        if self.telemetry {
            Box::new(StderrJsonlTelemetrySink)
        } else {
            Box::new(NoopTelemetrySink)
        }
    }
}

#[cfg(test)]
mod tests;
