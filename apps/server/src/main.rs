//! Filmgraph server binary.

use std::net::SocketAddr;

use catalog_store::{MemoryFilmStore, MemoryUserStore};
use filmgraph_server::{config::Config, create_app, init_tracing, state::create_shared_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&config.log_level);

    tracing::info!("Starting Filmgraph server");

    let state = create_shared_state(config.clone(), MemoryFilmStore::new(), MemoryUserStore::new());

    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
