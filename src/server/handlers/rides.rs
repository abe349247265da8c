use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ComparisonSummary, ProviderId, Quote, RideQuery, RouteRequest, VehicleType};
use crate::error::Error;
use crate::providers::{self, PROVIDERS};
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub vehicle_type: VehicleType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub token: Uuid,
    pub quotes: Vec<Quote>,
    pub comparison: Option<ComparisonSummary>,
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SearchParams>,
) -> Result<Json<SearchResponse>, Error> {
    let request = RouteRequest::new(params.from, params.to, params.vehicle_type)?;

    let query = api.search_rides(request).await?;
    let comparison = providers::compare_prices(&query.results);

    Ok(Json(SearchResponse {
        token: query.token,
        quotes: query.results,
        comparison,
    }))
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<RideQuery>, Error> {
    let query = api.find_ride_query(token).await?;

    Ok(query.into())
}

pub async fn history(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<RideQuery>>, Error> {
    let queries = api.ride_history().await?;

    Ok(queries.into())
}

#[derive(Serialize, Deserialize)]
pub struct BookParams {
    pub provider: ProviderId,
}

pub async fn book(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
    Json(params): Json<BookParams>,
) -> Result<Json<RideQuery>, Error> {
    let query = api.book_ride(token, params.provider).await?;

    Ok(query.into())
}

pub async fn cancel(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<RideQuery>, Error> {
    let query = api.cancel_ride_query(token).await?;

    Ok(query.into())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub provider: ProviderId,
    pub vehicle_types: Vec<VehicleType>,
}

pub async fn providers() -> Json<Vec<ProviderInfo>> {
    let catalog = PROVIDERS
        .iter()
        .map(|config| ProviderInfo {
            provider: config.id,
            vehicle_types: config.supported_vehicle_types(),
        })
        .collect();

    Json(catalog)
}
