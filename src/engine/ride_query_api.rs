use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::RideQueryAPI,
    entities::{ProviderId, RideQuery},
    error::{invalid_input_error, Error},
};

impl Engine {
    async fn update_ride_query(&self, query: &RideQuery) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("UPDATE ride_queries SET status = $2, data = $3 WHERE token = $1")
                .bind(&query.token)
                .bind(query.status.name())
                .bind(Json(query)),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl RideQueryAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_ride_query(&self, token: Uuid) -> Result<RideQuery, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM ride_queries WHERE token = $1").bind(&token),
            )
            .await?;

        let result = maybe_result.ok_or_else(invalid_input_error)?;
        let Json(query) = result.try_get("data")?;

        Ok(query)
    }

    #[tracing::instrument(skip(self))]
    async fn ride_history(&self) -> Result<Vec<RideQuery>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query(
                "SELECT data FROM ride_queries ORDER BY created_at DESC",
            ))
            .await?;

        let mut queries = Vec::with_capacity(rows.len());

        for row in rows {
            let Json(query) = row.try_get("data")?;
            queries.push(query);
        }

        Ok(queries)
    }

    #[tracing::instrument(skip(self))]
    async fn book_ride(&self, token: Uuid, provider: ProviderId) -> Result<RideQuery, Error> {
        let mut query = self.find_ride_query(token).await?;

        query.book(provider)?;
        self.update_ride_query(&query).await?;

        Ok(query)
    }

    #[tracing::instrument(skip(self))]
    async fn cancel_ride_query(&self, token: Uuid) -> Result<RideQuery, Error> {
        let mut query = self.find_ride_query(token).await?;

        query.cancel()?;
        self.update_ride_query(&query).await?;

        Ok(query)
    }
}
