use std::sync::Arc;

use clap::Parser;
use student_registry::{http, InMemoryStudentStore, ServerConfig, StudentStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let store = if config.no_seed {
        InMemoryStudentStore::new()
    } else {
        InMemoryStudentStore::seeded()
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        students = store.get_all()?.len(),
        "student registry initializing"
    );

    http::serve(Arc::new(store), &config.addr()).await?;
    Ok(())
}
