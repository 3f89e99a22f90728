// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use skill_ranking::api::ApiClient;
use skill_ranking::config::Config;
use skill_ranking::error::AppError;
use skill_ranking::routes;
use skill_ranking::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // The only place the API location is read; everything else gets it injected.
    let api = ApiClient::new(config.api_url.clone(), config.request_timeout)?;
    tracing::info!("Using ranking API at {}", api.base_url());

    let state = AppState::new(config.clone(), Arc::new(api));

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
