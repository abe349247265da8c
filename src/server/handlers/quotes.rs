use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{ComparisonSummary, Quote, RouteRequest, VehicleType};
use crate::error::Error;
use crate::providers;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub vehicle_type: VehicleType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub quotes: Vec<Quote>,
    pub comparison: Option<ComparisonSummary>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<CreateResponse>, Error> {
    let request = RouteRequest::new(params.from, params.to, params.vehicle_type)?;

    let quotes = api.get_all_quotes(request).await?;
    let comparison = providers::compare_prices(&quotes);

    Ok(Json(CreateResponse { quotes, comparison }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_type_defaults_to_car_when_omitted() {
        let params: CreateParams =
            serde_json::from_str(r#"{"from": "MG Road", "to": "Airport"}"#).unwrap();

        assert_eq!(params.vehicle_type, VehicleType::Car);
    }

    #[test]
    fn vehicle_type_parses_from_the_wire_name() {
        let params: CreateParams =
            serde_json::from_str(r#"{"from": "a", "to": "b", "vehicleType": "bike"}"#).unwrap();

        assert_eq!(params.vehicle_type, VehicleType::Bike);
    }
}
