//! Transcript sink adapters.
//!
//! Both sinks are best-effort: a line that cannot be written is dropped
//! with a `tracing` warning and the turn continues unaffected.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::foundation::Timestamp;
use crate::ports::TranscriptSink;

/// Appends timestamped transcript lines to a log file.
#[derive(Debug)]
pub struct FileTranscriptSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileTranscriptSink {
    /// Opens (or creates) the log file in append mode.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be opened;
    /// callers typically fall back to another sink in that case.
    pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// The path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptSink for FileTranscriptSink {
    fn record(&self, line: &str) {
        // A poisoned lock still holds a usable file handle.
        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(file, "{} | {}", Timestamp::now(), line) {
            tracing::warn!(path = %self.path.display(), %err, "transcript write failed");
        }
    }
}

/// Forwards transcript lines to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTranscriptSink;

impl TranscriptSink for TracingTranscriptSink {
    fn record(&self, line: &str) {
        tracing::info!(target: "transcript", "{line}");
    }
}
