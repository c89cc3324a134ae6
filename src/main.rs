//! Warehouse API server: ensures the schema, mounts all routes, serves.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use warehouse_api::{app, connect, ensure_schema, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("warehouse_api=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env();
    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_schema(&pool).await?;

    let state = AppState::new(pool);
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
