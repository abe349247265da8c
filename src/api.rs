use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{ProviderId, Quote, RideQuery, RouteRequest};
use crate::error::Error;

#[async_trait]
pub trait QuoteAPI {
    /// Synthesizes quotes for a request without persisting anything.
    async fn get_all_quotes(&self, request: RouteRequest) -> Result<Vec<Quote>, Error>;

    /// Synthesizes quotes and stores the search as a pending ride query.
    async fn search_rides(&self, request: RouteRequest) -> Result<RideQuery, Error>;
}

#[async_trait]
pub trait RideQueryAPI {
    async fn find_ride_query(&self, token: Uuid) -> Result<RideQuery, Error>;
    async fn ride_history(&self) -> Result<Vec<RideQuery>, Error>;
    async fn book_ride(&self, token: Uuid, provider: ProviderId) -> Result<RideQuery, Error>;
    async fn cancel_ride_query(&self, token: Uuid) -> Result<RideQuery, Error>;
}

pub trait API: QuoteAPI + RideQueryAPI {}
