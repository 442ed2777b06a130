//! Logging Infrastructure
//!
//! Structured logging for development (text) and production (JSON lines),
//! plus optional OpenTelemetry span export over OTLP/HTTP.
//!
//! Spans from `#[instrument]` and the request trace layer are exported when
//! a traces endpoint is configured. Events inside a span become span events;
//! everything still goes to the fmt output.

use std::path::Path;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LOG_FILE_PREFIX: &str = "cafe-server";
const SERVICE_NAME: &str = "cafe-server";
const TRACES_PATH: &str = "/v1/traces";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Providers that must be flushed before the process exits
pub struct TelemetryProviders {
    pub tracer_provider: Option<SdkTracerProvider>,
}

impl TelemetryProviders {
    /// Flush pending spans and stop the exporter
    pub fn shutdown(self) {
        let Some(provider) = self.tracer_provider else {
            return;
        };
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Failed to flush trace exporter");
        }
    }
}

/// Initialize the logger with optional JSON format, file output and OTLP
/// trace export
///
/// `RUST_LOG` wins over `log_level` when set. Calling this twice is a no-op.
/// An exporter that fails to build is logged and skipped.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
    traces_endpoint: Option<&str>,
) -> TelemetryProviders {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_dir = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .and_then(|p| p.to_str());

    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(json, file_dir)];

    let (tracer_provider, exporter_error) = match traces_endpoint.map(init_tracer) {
        Some(Ok(provider)) => {
            opentelemetry::global::set_tracer_provider(provider.clone());
            layers.push(
                tracing_opentelemetry::layer()
                    .with_tracer(provider.tracer(SERVICE_NAME))
                    .boxed(),
            );
            (Some(provider), None)
        }
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    // try_init: tests and embedders may already have a subscriber
    if tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logger already initialized");
    }

    if let Some(e) = exporter_error {
        tracing::warn!(error = %e, "Trace exporter disabled");
    } else if let Some(endpoint) = traces_endpoint.filter(|_| tracer_provider.is_some()) {
        tracing::info!(endpoint = %traces_url(endpoint), "Exporting traces over OTLP/HTTP");
    }

    TelemetryProviders { tracer_provider }
}

fn fmt_layer(json: bool, file_dir: Option<&str>) -> BoxedLayer {
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match (file_dir, json) {
        (Some(dir), true) => base
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .boxed(),
        (Some(dir), false) => base
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .boxed(),
        (None, true) => base.json().boxed(),
        (None, false) => base.boxed(),
    }
}

fn init_tracer(endpoint: &str) -> anyhow::Result<SdkTracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(traces_url(endpoint))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_resource(Resource::builder().with_service_name(SERVICE_NAME).build())
        .with_batch_exporter(exporter)
        .build())
}

/// Full OTLP/HTTP traces URL for a collector address.
///
/// `collector:4318` becomes `http://collector:4318/v1/traces`. An explicit
/// scheme or path is kept as given.
pub fn traces_url(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    let (scheme, rest) = match endpoint.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("http", endpoint),
    };

    if rest.contains('/') {
        format!("{scheme}://{rest}")
    } else {
        format!("{scheme}://{rest}{TRACES_PATH}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traces_url_adds_scheme_and_path() {
        assert_eq!(
            traces_url("collector:4318"),
            "http://collector:4318/v1/traces"
        );
        assert_eq!(
            traces_url("https://otel.example.com"),
            "https://otel.example.com/v1/traces"
        );
    }

    #[test]
    fn test_traces_url_keeps_explicit_path() {
        assert_eq!(
            traces_url("http://localhost:4318/custom/traces/"),
            "http://localhost:4318/custom/traces"
        );
        assert_eq!(
            traces_url("localhost:4318/v1/traces"),
            "http://localhost:4318/v1/traces"
        );
    }

    #[test]
    fn test_no_endpoint_means_no_tracer() {
        let providers = init_logger_with_file(Some("warn"), false, None, None);
        assert!(providers.tracer_provider.is_none());
        providers.shutdown();
    }
}
