use std::sync::Arc;

use locker_core::{config::Config, store::FileStore};
use locker_sqlite::SqliteFileStore;

#[tokio::main]
async fn main() -> Result<(), locker_core::Error> {
    locker_core::logging::init("locker")?;

    let cfg = Arc::new(Config::load()?);

    // A store that cannot be opened is fatal: nothing can be saved or listed.
    let store: Arc<dyn FileStore> = Arc::new(SqliteFileStore::open(&cfg.database_path).await?);
    tracing::info!("Store ready: {}", cfg.database_path.display());

    locker_telegram::router::run_polling(cfg, store)
        .await
        .map_err(|e| locker_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
