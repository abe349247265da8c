use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor};

use crate::{
    api::QuoteAPI,
    entities::{Quote, RideQuery, RouteRequest},
    error::Error,
    providers,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn get_all_quotes(&self, request: RouteRequest) -> Result<Vec<Quote>, Error> {
        let quotes =
            providers::get_all_quotes(&request, self.sampler.clone(), self.clock.clone()).await;

        Ok(quotes)
    }

    #[tracing::instrument(skip(self))]
    async fn search_rides(&self, request: RouteRequest) -> Result<RideQuery, Error> {
        let quotes =
            providers::get_all_quotes(&request, self.sampler.clone(), self.clock.clone()).await;

        let query = RideQuery::new(request, quotes);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query(
                "INSERT INTO ride_queries (token, status, created_at, data) VALUES ($1, $2, $3, $4)",
            )
            .bind(&query.token)
            .bind(query.status.name())
            .bind(&query.created_at)
            .bind(Json(&query)),
        )
        .await?;

        Ok(query)
    }
}
