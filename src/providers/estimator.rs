use crate::entities::VehicleType;
use crate::providers::sampler::Sampler;

const BASE_DISTANCE_KM: f64 = 5.0;
const DISTANCE_SPREAD_KM: f64 = 10.0;
const MIN_DISTANCE_KM: f64 = 1.0;
const MAX_TRAFFIC_DELAY_MINUTES: f64 = 15.0;

/// Synthetic route distance in km, always within [1, 15]. Stands in for a
/// real geocoding/directions service, which is why the addresses are unused.
pub fn estimate_distance_km(_from: &str, _to: &str, sampler: &dyn Sampler) -> f64 {
    let distance = BASE_DISTANCE_KM + sampler.uniform(0.0, DISTANCE_SPREAD_KM);

    distance.max(MIN_DISTANCE_KM)
}

/// Nominal travel time at the vehicle's average speed plus a random traffic
/// delay, rounded to whole minutes. Never below the rounded nominal time.
pub fn estimate_trip_minutes(
    distance_km: f64,
    vehicle_type: VehicleType,
    sampler: &dyn Sampler,
) -> u32 {
    let nominal = distance_km / average_speed_kmh(vehicle_type) * 60.0;
    let delay = sampler.uniform(0.0, MAX_TRAFFIC_DELAY_MINUTES);

    (nominal + delay).round() as u32
}

fn average_speed_kmh(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Bike => 25.0,
        VehicleType::Auto => 20.0,
        VehicleType::Car => 30.0,
    }
}
