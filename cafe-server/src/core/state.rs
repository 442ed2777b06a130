use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态
///
/// Holds the configuration and the connection pool. The pool is the only
/// shared resource; all order coordination happens inside the store.
/// Cloning is cheap (the pool is reference counted).
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Open the database described by `config` and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.database_url.is_none() {
            std::fs::create_dir_all(config.database_dir())?;
        }

        let url = config.database_url();
        tracing::info!(database = %url, "Opening order store");
        let db = DbService::new(&url, config.db_max_connections).await?;

        Ok(Self::new(config.clone(), db.pool))
    }
}
