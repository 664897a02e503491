//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::HttpState;
use backend::outbound::persistence::MemoryRepository;
use backend::server::{self, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    info!(bind_addr = %config.bind_addr(), base_path = config.base_path(), "starting server");

    let store = Arc::new(MemoryRepository::new());
    let state = HttpState::new(config.base_path(), store.clone(), store);
    server::run(config, state).await
}
