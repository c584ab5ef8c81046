use std::error::Error;

use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

use subway_server::config::AppConfig;
use subway_server::network::PathCache;
use subway_server::repository::MemoryRepository;
use subway_server::service::SubwayService;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let config = AppConfig::from_env()?;

    let subway = SubwayService::new(MemoryRepository::new(), config.removal_policy);
    let paths = PathCache::new(&config.path_cache);
    let state = AppState::new(subway, paths);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        removal_policy = ?config.removal_policy,
        path_cache = config.path_cache.enabled,
        "subway server listening"
    );
    info!("  GET/POST        /stations");
    info!("  GET/DELETE      /stations/:id");
    info!("  GET/POST        /lines");
    info!("  GET/PUT/DELETE  /lines/:id");
    info!("  POST/DELETE     /lines/:id/sections");
    info!("  GET             /paths?source=&target=");

    axum::serve(listener, app).await?;
    Ok(())
}
