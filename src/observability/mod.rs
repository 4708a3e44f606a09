//! OpenTelemetry tracing with file-based OTLP export.
//!
//! Spans recorded with the `tracing` macros anywhere in the crate are
//! bridged into OpenTelemetry and written as OTLP JSON lines to a rotating
//! file in the plugin's data directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → TraceFileExporter → rotating file
//! ```
//!
//! - **Location**: `~/.local/share/zellij/transaction-processor/transaction-processor-otlp.json`
//! - **Rotation**: at 10 MB, keeping 3 timestamped backups
//! - **Level**: `trace_level` plugin option, default `info`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Span exporter and tracer provider
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Size-rotated trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_filter};

/// `service.name` resource attribute and instrumentation scope name.
pub const SERVICE_NAME: &str = "TransactionProcessor";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "transaction-processor-otlp.json";
