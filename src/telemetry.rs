//! Application telemetry events and sinks.
//!
//! Revue is a local-first tool, but lightweight telemetry still earns its
//! keep: per-operation timings mirror what the interactive shell shows the
//! user, and artefact events record what was written where.

use std::io;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by revue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a corpus load with its size and sources.
    CollectionLoaded {
        /// Number of records loaded.
        records: usize,
        /// Source file paths, in load order.
        sources: Vec<String>,
    },
    /// Records how long a user-visible operation took.
    OperationTimed {
        /// Operation name, for example `load_collection`.
        operation: String,
        /// Wall-clock duration in milliseconds.
        duration_ms: u64,
    },
    /// Records a written artefact such as a spreadsheet or word cloud.
    ArtefactWritten {
        /// Artefact kind, for example `spreadsheet` or `word_cloud`.
        kind: String,
        /// Destination path.
        path: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Runs `operation`, emitting an [`TelemetryEvent::OperationTimed`] event
/// with its wall-clock duration.
pub fn timed<T>(sink: &dyn TelemetrySink, operation: &str, run: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = run();
    sink.record(TelemetryEvent::OperationTimed {
        operation: operation.to_owned(),
        duration_ms: elapsed_ms(start),
    });
    result
}

/// Returns the milliseconds elapsed since `start`.
#[must_use]
pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
