//! Spreadsheet export of the currently filtered view.
//!
//! Exports are one-way, read-only snapshots: records are projected into a
//! flat row shape, serialised to bytes in memory, and written through the
//! capability-scoped artefact writer. Collections larger than the per-file
//! row cap split into numbered part files so no sheet exceeds what Excel
//! can open.
//!
//! # Modules
//!
//! - [`model`]: [`ExportedReview`] row projection and [`ExportFormat`]
//! - [`xlsx`]: Excel workbook serialisation
//! - [`csv`]: CSV serialisation
//! - [`error`]: [`ExportError`] taxonomy

pub mod csv;
pub mod error;
pub mod model;
pub mod xlsx;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::artefact::write_bytes;

pub use error::ExportError;
pub use model::{ExportFormat, ExportedReview};

/// Writes the given rows to `destination` in the requested format.
///
/// When the row count exceeds `row_cap`, the export splits into part files
/// named `<stem>_part<N>.<ext>` starting at 1; otherwise the destination
/// name is used verbatim. Returns the paths written, in order. An empty
/// view still produces one file holding only the header row.
///
/// # Errors
///
/// Returns [`ExportError::ZeroRowCap`] when `row_cap` is zero,
/// [`ExportError::InvalidDestination`] when the destination cannot name a
/// file, [`ExportError::Serialise`] on serialisation failure, and
/// [`ExportError::Io`] when a write fails.
pub fn export_collection(
    reviews: &[ExportedReview],
    destination: &Utf8Path,
    format: ExportFormat,
    row_cap: usize,
) -> Result<Vec<Utf8PathBuf>, ExportError> {
    if row_cap == 0 {
        return Err(ExportError::ZeroRowCap);
    }

    let mut written = Vec::new();
    if reviews.len() <= row_cap {
        write_part(reviews, destination, format)?;
        written.push(destination.to_path_buf());
    } else {
        for (index, chunk) in reviews.chunks(row_cap).enumerate() {
            let part_path = part_file_name(destination, format, index.saturating_add(1))?;
            write_part(chunk, &part_path, format)?;
            written.push(part_path);
        }
    }

    debug!(
        files = written.len(),
        rows = reviews.len(),
        format = %format,
        "export written"
    );
    Ok(written)
}

fn write_part(
    reviews: &[ExportedReview],
    destination: &Utf8Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let bytes = match format {
        ExportFormat::Xlsx => xlsx::workbook_bytes(reviews)?,
        ExportFormat::Csv => csv::csv_bytes(reviews)?,
    };
    write_bytes(destination, &bytes, "spreadsheet")?;
    Ok(())
}

/// Derives the Nth part file name from the configured destination.
///
/// The configured extension is replaced with the format's own so a
/// destination of `reviews.xlsx` exported as CSV yields `reviews_part1.csv`.
fn part_file_name(
    destination: &Utf8Path,
    format: ExportFormat,
    part: usize,
) -> Result<Utf8PathBuf, ExportError> {
    let stem = destination
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ExportError::InvalidDestination {
            path: destination.to_string(),
            message: "destination has no file name".to_owned(),
        })?;

    let file_name = format!("{stem}_part{part}.{}", format.extension());
    Ok(destination.with_file_name(file_name))
}
