use anyhow::Context;
use tokio::net::TcpListener;

use roster::config::Config;
use roster::db::{self, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster::telemetry::init();

    let config = Config::from_env().context("invalid configuration")?;
    let store = db::open(&config.store)
        .await
        .context("failed to open store")?;

    if let Some(seed_path) = &config.seed_path {
        let seed = JsonFileStore::new(seed_path.clone())
            .load()
            .await
            .context("failed to read seed document")?;
        store.reset(&seed).await.context("failed to seed store")?;
        tracing::info!(path = %seed_path.display(), "store reset from seed");
    }

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    roster::api::server::serve(listener, store)
        .await
        .context("server failed")
}
