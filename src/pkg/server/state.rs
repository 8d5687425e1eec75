use sqlx::PgPool;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres, Transaction};
use std::sync::Arc;

use crate::{conf::settings, pkg::internal::ai::client::Client as AIClient, prelude::Result};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[async_trait::async_trait]
pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

#[async_trait::async_trait]
impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub ai_client: Arc<AIClient>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let ai = AIClient::from_url(&settings.ai_key, &settings.ai_endpoint)?;
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
            ai_client: Arc::new(ai),
        })
    }
}
