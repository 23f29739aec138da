use anyhow::Result;
use budget_tracker_backend::{config::AppConfig, create_router, initialize_backend};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::parse();

    // RUST_LOG wins over --log-filter when both are set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config.cors_origin)?;

    info!("Starting server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on {}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
