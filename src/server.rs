//! HTTP server initialization and runtime setup.
//!
//! Wires the storage backend, generator selection, and Axum server lifecycle.

use crate::application::metrics::{HashMetricsGenerator, WebMetricsGenerator};
use crate::application::services::SubmissionService;
use crate::config::{Config, MetricsMode};
use crate::domain::MetricsGenerator;
use crate::infrastructure::persistence::JsonFileRepository;
use crate::infrastructure::web::{
    GoogleSearchClient, HttpPageFetcher, NullSearchClient, SearchClient,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Flat-file submission storage (directory and file created on first use)
/// - The configured metrics generator (web or deterministic)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The storage file cannot be created
/// - An HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(JsonFileRepository::open(&config.storage_path).await?);
    tracing::info!("Storage ready at {}", config.storage_path.display());

    let generator = build_generator(&config)?;

    let service = Arc::new(SubmissionService::new(repository, generator));
    let state = AppState::new(service);

    let app = app_router(state, &config.cors_origin);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the metrics generator selected by `METRICS_MODE`.
fn build_generator(config: &Config) -> Result<Arc<dyn MetricsGenerator>> {
    match config.metrics_mode {
        MetricsMode::Deterministic => {
            tracing::info!("Metrics generator: deterministic");
            Ok(Arc::new(HashMetricsGenerator::new()))
        }
        MetricsMode::Web => {
            let timeout = Duration::from_secs(config.fetch_timeout_secs);
            let fetcher = Arc::new(HttpPageFetcher::new(timeout)?);

            let search: Arc<dyn SearchClient> = match &config.search_credentials {
                Some(credentials) => {
                    tracing::info!("Metrics generator: web (live search)");
                    Arc::new(GoogleSearchClient::new(credentials.clone(), timeout)?)
                }
                None => {
                    tracing::info!("Metrics generator: web (search fallback)");
                    Arc::new(NullSearchClient::new())
                }
            };

            Ok(Arc::new(WebMetricsGenerator::new(fetcher, search)))
        }
    }
}

/// Resolves when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install ctrl-c handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
