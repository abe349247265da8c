mod quote_api;
mod ride_query_api;

use std::sync::Arc;

use sqlx::{Executor, Pool, Postgres};

use crate::api::API;
use crate::error::Error;
use crate::providers::sampler::{Clock, Sampler, SystemClock, ThreadRngSampler};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    sampler: Arc<dyn Sampler>,
    clock: Arc<dyn Clock>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        Self::with_sources(pool, Arc::new(ThreadRngSampler), Arc::new(SystemClock)).await
    }

    pub async fn with_sources(
        pool: Pool<Database>,
        sampler: Arc<dyn Sampler>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, Error> {
        // ride query service (KV store with queryable status/recency columns)
        pool.execute("DROP TABLE IF EXISTS ride_queries CASCADE")
            .await?;
        pool.execute(
            "CREATE TABLE ride_queries (token UUID PRIMARY KEY, status VARCHAR NOT NULL, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self {
            pool,
            sampler,
            clock,
        })
    }
}

impl API for Engine {}
