//! AssetHub - IT Asset Management
//!
//! Serves the web UI on top of the REST backend, or standalone in local mode.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use assethub::{
    backend::LocalBackend,
    client::{token::FileTokenStore, ApiClient},
    config::{AppConfig, BackendMode, LoggingConfig},
    create_router,
    session::Session,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Keep the file writer alive until shutdown
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting AssetHub v{}", env!("CARGO_PKG_VERSION"));

    let session = match config.api.mode {
        BackendMode::Remote => {
            let tokens = Arc::new(FileTokenStore::new(&config.session.token_file));
            let client = ApiClient::new(&config.api, tokens)?;
            tracing::info!("Using REST backend at {}", client.base_url());
            Session::remote(client)
        }
        BackendMode::Local => {
            tracing::info!("Running in local mode; nothing is persisted");
            Session::local(Arc::new(LocalBackend::new()))
        }
    };

    // Initial load; a stale or missing token just leaves the login view up
    if session.is_authenticated() {
        if let Err(e) = session.store.refresh_all().await {
            session.report(&e).await;
        }
    }

    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    let state = AppState {
        config: Arc::new(config),
        session: Arc::new(session),
    };

    let app = create_router(state);

    let addr = SocketAddr::new(server_host.parse()?, server_port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("assethub={},tower_http=debug", logging.level).into());

    let stdout = if logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "assethub.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file)
        .init();

    guard
}
