mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use linkhop_gateway::{App, AppState};
use linkhop_storage::{InMemoryRepository, RedisRepository, Repository};
use linkhop_telemetry::TelemetryConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

const SERVICE_NAME: &str = "linkhop-gateway";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    let _telemetry = linkhop_telemetry::init(
        &TelemetryConfig::builder()
            .service_name(SERVICE_NAME)
            .log_format(config.log_format.into())
            .otlp_endpoint(config.otlp_endpoint.clone())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when storage backend is redis")?;
            let repository = RedisRepository::connect(redis_url, config.redis_key_prefix)
                .await
                .context("failed to connect to the data store")?;
            run_server(config.listen_addr, repository).await?;
        }
    }

    info!("gateway stopped");
    Ok(())
}

async fn run_server<R: Repository>(listen_addr: SocketAddr, repository: R) -> anyhow::Result<()> {
    let app = App::router(AppState::from_repository(repository));

    let listener = TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
