//! Tracing subscriber setup.

use super::{tracer, SERVICE_NAME, TRACE_FILE_NAME};
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `trace_level` is not configured.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Returns the filter directive for the configured trace level.
///
/// Blank values count as unset.
///
/// # Example
///
/// ```rust
/// use transaction_processor::observability::trace_filter;
/// use transaction_processor::Config;
///
/// assert_eq!(trace_filter(&Config::default()), "info");
/// ```
#[must_use]
pub fn trace_filter(config: &Config) -> String {
    config
        .trace_level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_TRACE_LEVEL)
        .to_string()
}

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// Creates the data directory if needed. Calling this more than once is
/// harmless; only the first subscriber is installed.
///
/// # Errors
///
/// Returns [`ProcessorError::Io`](crate::ProcessorError::Io) if the data
/// directory cannot be created. The plugin keeps working without traces.
pub fn init_tracing(config: &Config) -> Result<()> {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(trace_filter(config)))
        .with(otel_layer)
        .try_init()
        .is_ok();

    tracing::info!(installed, level = %trace_filter(config), "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_wins_over_default() {
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        assert_eq!(trace_filter(&config), "debug");
    }

    #[test]
    fn blank_level_falls_back_to_info() {
        let config = Config {
            trace_level: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(trace_filter(&config), "info");
    }
}
