mod config;
mod routes;

use config::{ConfigError, ServerConfig};

/// Failures that stop the server before it starts serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("bind failed: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "panel gallery stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    tracing::info!(images_dir = %config.images_dir.display(), "serving panel images");

    let app = routes::app(&config).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(StartupError::Bind)?;

    tracing::info!(port = config.port, "panel gallery listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
