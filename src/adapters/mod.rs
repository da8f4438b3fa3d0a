//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `transcript` - Transcript sinks (append-only file, tracing)

mod transcript;

pub use transcript::{FileTranscriptSink, TracingTranscriptSink};
