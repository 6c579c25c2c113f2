mod cms;
mod config;
mod media;
mod render;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let client = match cms::CmsClient::new(&config.cms_base_url, config.timeouts) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "CMS client init failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(cms = client.base_url(), "CMS client initialized");

    let state = state::AppState::new(Arc::new(client), &config);
    let app = routes::app(state);

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, site = %config.site_name, "landing site listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
