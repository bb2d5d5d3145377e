//! Tracing setup shared by linkhop binaries.
//!
//! [`init`] installs a global `tracing` subscriber made of:
//! - an `EnvFilter` driven by `RUST_LOG` (falling back to the configured directive)
//! - a text or JSON `fmt` layer
//! - an OpenTelemetry layer exporting spans over OTLP/gRPC, when an endpoint is set
//!
//! `log` records from dependencies are bridged into `tracing`.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};
use typed_builder::TypedBuilder;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),
    #[error("failed to set global subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),
}

/// Output format of the `fmt` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetryConfig {
    /// Reported as the OpenTelemetry `service.name`.
    #[builder(setter(into))]
    pub service_name: String,

    #[builder(default)]
    pub log_format: LogFormat,

    /// OTLP/gRPC collector endpoint, e.g. `http://localhost:4317`.
    #[builder(default)]
    pub otlp_endpoint: Option<String>,

    /// Filter directive used when `RUST_LOG` is unset.
    #[builder(default = "info".to_string(), setter(into))]
    pub default_directive: String,
}

/// Flushes and shuts down span export when dropped.
#[must_use = "dropping the guard stops span export"]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down tracer provider: {e}");
            }
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber. Call once, early in `main`.
pub fn init(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_directive))?;

    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
    layers.push(match config.log_format {
        LogFormat::Text => fmt::layer().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    });

    let provider = match &config.otlp_endpoint {
        Some(endpoint) => {
            let provider = tracer_provider(&config.service_name, endpoint)?;
            let tracer = provider.tracer(config.service_name.clone());
            layers.push(tracing_opentelemetry::layer().with_tracer(tracer).boxed());
            Some(provider)
        }
        None => None,
    };

    let subscriber = Registry::default().with(layers).with(filter);
    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;

    Ok(TelemetryGuard { provider })
}

fn tracer_provider(
    service_name: &str,
    endpoint: &str,
) -> Result<SdkTracerProvider, TelemetryError> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_string())
                .build(),
        )
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TelemetryConfig::builder().service_name("gateway").build();
        assert_eq!(config.service_name, "gateway");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.otlp_endpoint, None);
        assert_eq!(config.default_directive, "info");
    }

    #[test]
    fn config_custom() {
        let config = TelemetryConfig::builder()
            .service_name("gateway")
            .log_format(LogFormat::Json)
            .otlp_endpoint(Some("http://localhost:4317".to_string()))
            .default_directive("linkhop=debug")
            .build();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.otlp_endpoint.as_deref(),
            Some("http://localhost:4317")
        );
        assert_eq!(config.default_directive, "linkhop=debug");
    }

    #[test]
    fn guard_without_provider_drops_cleanly() {
        drop(TelemetryGuard { provider: None });
    }
}
