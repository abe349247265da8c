use serde::{Deserialize, Serialize};

use crate::entities::{ProviderId, VehicleType};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub provider: ProviderId,
    pub vehicle_type: VehicleType,
    pub price: u32,
    pub estimated_pickup_time_minutes: u32,
    pub estimated_trip_time_minutes: u32,
    pub vehicle_details: VehicleDetails,
    pub availability: bool,
    pub surge: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleDetails {
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub cheapest: Quote,
    pub most_expensive: Quote,
    pub average_price: u32,
}
