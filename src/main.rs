mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "atelier host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "atelier listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
