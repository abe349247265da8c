pub mod estimator;
pub mod sampler;

use std::sync::Arc;

use futures::future::join_all;

use crate::entities::{ComparisonSummary, ProviderId, Quote, RouteRequest, VehicleDetails, VehicleType};
use crate::providers::sampler::{Clock, Sampler};

/// Base economics of one provider for one vehicle type.
#[derive(Clone, Copy, Debug)]
pub struct PricingProfile {
    pub base_price: f64,
    pub per_km_rate: f64,
    pub surge_multiplier: f64,
}

/// Everything that distinguishes one provider from another: the pricing
/// profiles per vehicle type (absent when the provider does not serve it),
/// the pickup-time window and the availability draw threshold. Adding a
/// provider is a new entry here, not new code.
#[derive(Debug)]
pub struct ProviderConfig {
    pub id: ProviderId,
    pub pickup_window_minutes: (f64, f64),
    pub availability_threshold: f64,
    bike: Option<PricingProfile>,
    auto: Option<PricingProfile>,
    car: Option<PricingProfile>,
}

impl ProviderConfig {
    pub fn profile(&self, vehicle_type: VehicleType) -> Option<&PricingProfile> {
        match vehicle_type {
            VehicleType::Bike => self.bike.as_ref(),
            VehicleType::Auto => self.auto.as_ref(),
            VehicleType::Car => self.car.as_ref(),
        }
    }

    pub fn serves(&self, vehicle_type: VehicleType) -> bool {
        self.profile(vehicle_type).is_some()
    }

    pub fn supported_vehicle_types(&self) -> Vec<VehicleType> {
        [VehicleType::Bike, VehicleType::Auto, VehicleType::Car]
            .into_iter()
            .filter(|vehicle_type| self.serves(*vehicle_type))
            .collect()
    }
}

/// Configured providers in precedence order; equal prices rank in this order.
pub static PROVIDERS: [ProviderConfig; 3] = [
    ProviderConfig {
        id: ProviderId::Uber,
        pickup_window_minutes: (3.0, 10.0),
        availability_threshold: 0.0,
        bike: Some(PricingProfile {
            base_price: 15.0,
            per_km_rate: 8.0,
            surge_multiplier: 1.0,
        }),
        auto: Some(PricingProfile {
            base_price: 25.0,
            per_km_rate: 12.0,
            surge_multiplier: 1.0,
        }),
        car: Some(PricingProfile {
            base_price: 40.0,
            per_km_rate: 15.0,
            surge_multiplier: 1.2,
        }),
    },
    ProviderConfig {
        id: ProviderId::Ola,
        pickup_window_minutes: (2.0, 10.0),
        availability_threshold: 0.1,
        bike: Some(PricingProfile {
            base_price: 12.0,
            per_km_rate: 7.0,
            surge_multiplier: 1.0,
        }),
        auto: Some(PricingProfile {
            base_price: 22.0,
            per_km_rate: 11.0,
            surge_multiplier: 1.1,
        }),
        car: Some(PricingProfile {
            base_price: 35.0,
            per_km_rate: 14.0,
            surge_multiplier: 1.0,
        }),
    },
    ProviderConfig {
        id: ProviderId::Rapido,
        pickup_window_minutes: (1.0, 6.0),
        availability_threshold: 0.05,
        bike: Some(PricingProfile {
            base_price: 10.0,
            per_km_rate: 6.0,
            surge_multiplier: 1.0,
        }),
        auto: None,
        car: None,
    },
];

fn category(provider: ProviderId, vehicle_type: VehicleType) -> Option<&'static str> {
    match (provider, vehicle_type) {
        (ProviderId::Uber, VehicleType::Car) => Some("UberGo"),
        (ProviderId::Uber, VehicleType::Auto) => Some("UberAuto"),
        (ProviderId::Uber, VehicleType::Bike) => Some("UberMoto"),
        (ProviderId::Ola, VehicleType::Car) => Some("Ola Micro"),
        (ProviderId::Ola, VehicleType::Auto) => Some("Ola Auto"),
        (ProviderId::Ola, VehicleType::Bike) => Some("Ola Bike"),
        (ProviderId::Rapido, VehicleType::Bike) => Some("Rapido Bike"),
        (ProviderId::Rapido, _) => None,
    }
}

fn peak_multiplier(hour: u32) -> f64 {
    if (8..=10).contains(&hour) || (18..=21).contains(&hour) {
        1.5
    } else {
        1.0
    }
}

/// Demand-driven price for one profile and distance: morning/evening peak
/// surge plus a random traffic factor on top of the base economics. The
/// surge flag compares against the rounded undiscounted base+distance price.
pub fn dynamic_price(
    profile: &PricingProfile,
    distance_km: f64,
    hour: u32,
    sampler: &dyn Sampler,
) -> (u32, bool) {
    let base = profile.base_price + profile.per_km_rate * distance_km;
    let traffic_factor = sampler.uniform(1.0, 1.2);

    let price = (base * profile.surge_multiplier * peak_multiplier(hour) * traffic_factor).round()
        as u32;
    let surge = price > base.round() as u32;

    (price, surge)
}

/// One provider's quote for a request, or `None` when the provider does not
/// serve the requested vehicle type.
pub fn provider_quote(
    config: &ProviderConfig,
    request: &RouteRequest,
    sampler: &dyn Sampler,
    clock: &dyn Clock,
) -> Option<Quote> {
    let vehicle_type = request.vehicle_type;
    let profile = config.profile(vehicle_type)?;
    let category = category(config.id, vehicle_type)?;

    let distance_km = estimator::estimate_distance_km(&request.from, &request.to, sampler);
    let (price, surge) = dynamic_price(profile, distance_km, clock.current_hour(), sampler);

    let (pickup_min, pickup_max) = config.pickup_window_minutes;
    let estimated_pickup_time_minutes = sampler.uniform(pickup_min, pickup_max).round() as u32;
    let estimated_trip_time_minutes =
        estimator::estimate_trip_minutes(distance_km, vehicle_type, sampler);

    let availability = sampler.uniform(0.0, 1.0) >= config.availability_threshold;

    Some(Quote {
        provider: config.id,
        vehicle_type,
        price,
        estimated_pickup_time_minutes,
        estimated_trip_time_minutes,
        vehicle_details: VehicleDetails {
            vehicle_type,
            category: category.into(),
        },
        availability,
        surge,
    })
}

/// Runs every configured provider independently and collects the quotes that
/// settled, sorted ascending by price. A provider that does not serve the
/// vehicle type or whose task fails is skipped; it never fails the aggregate.
pub async fn get_all_quotes(
    request: &RouteRequest,
    sampler: Arc<dyn Sampler>,
    clock: Arc<dyn Clock>,
) -> Vec<Quote> {
    let mut handles = Vec::with_capacity(PROVIDERS.len());

    for config in PROVIDERS.iter() {
        let request = request.clone();
        let sampler = sampler.clone();
        let clock = clock.clone();

        handles.push(tokio::spawn(async move {
            provider_quote(config, &request, sampler.as_ref(), clock.as_ref())
        }));
    }

    let mut quotes = Vec::new();

    for (config, settled) in PROVIDERS.iter().zip(join_all(handles).await) {
        match settled {
            Ok(Some(quote)) => quotes.push(quote),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(provider = config.id.name(), error = ?err, "provider quote failed");
            }
        }
    }

    quotes.sort_by_key(|quote| quote.price);
    quotes
}

/// Summary over an already collected quote list; `None` when there is
/// nothing to compare.
pub fn compare_prices(quotes: &[Quote]) -> Option<ComparisonSummary> {
    let cheapest = quotes.iter().min_by_key(|quote| quote.price)?;
    let most_expensive = quotes.iter().max_by_key(|quote| quote.price)?;

    let total: u64 = quotes.iter().map(|quote| u64::from(quote.price)).sum();
    let average_price = (total as f64 / quotes.len() as f64).round() as u32;

    Some(ComparisonSummary {
        cheapest: cheapest.clone(),
        most_expensive: most_expensive.clone(),
        average_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::sampler::{ConstSampler, FixedClock};

    const OFF_PEAK_HOUR: u32 = 14;

    fn request(vehicle_type: VehicleType) -> RouteRequest {
        RouteRequest::new("MG Road".into(), "Airport".into(), vehicle_type).unwrap()
    }

    fn quotes_for(vehicle_type: VehicleType) -> Vec<Quote> {
        tokio_test::block_on(get_all_quotes(
            &request(vehicle_type),
            Arc::new(ConstSampler(1.0)),
            Arc::new(FixedClock(OFF_PEAK_HOUR)),
        ))
    }

    #[test]
    fn uber_car_fixture_prices_at_192() {
        // distance 8 km, traffic factor pinned to 1.0, hour outside peak:
        // round((40 + 15 * 8) * 1.2) = 192
        let profile = PricingProfile {
            base_price: 40.0,
            per_km_rate: 15.0,
            surge_multiplier: 1.2,
        };

        let (price, surge) = dynamic_price(&profile, 8.0, OFF_PEAK_HOUR, &ConstSampler(1.0));

        assert_eq!(price, 192);
        assert!(surge);
    }

    #[test]
    fn peak_hour_applies_a_distinct_multiplier() {
        let profile = PricingProfile {
            base_price: 35.0,
            per_km_rate: 14.0,
            surge_multiplier: 1.0,
        };
        let sampler = ConstSampler(1.0);

        let (off_peak, off_peak_surge) = dynamic_price(&profile, 8.0, OFF_PEAK_HOUR, &sampler);
        let (peak, peak_surge) = dynamic_price(&profile, 8.0, 9, &sampler);

        assert_eq!(off_peak, 147);
        assert_eq!(peak, 221);
        assert!(!off_peak_surge);
        assert!(peak_surge);
    }

    #[test]
    fn traffic_factor_alone_sets_the_surge_flag() {
        let profile = PricingProfile {
            base_price: 35.0,
            per_km_rate: 14.0,
            surge_multiplier: 1.0,
        };

        // clamps the traffic draw to the 1.2 ceiling
        let (price, surge) = dynamic_price(&profile, 8.0, OFF_PEAK_HOUR, &ConstSampler(5.0));

        assert_eq!(price, 176);
        assert!(surge);
    }

    #[test]
    fn rapido_never_quotes_cars_or_autos() {
        let rapido = &PROVIDERS[2];
        assert_eq!(rapido.id, ProviderId::Rapido);

        let sampler = ConstSampler(1.0);
        let clock = FixedClock(OFF_PEAK_HOUR);

        assert!(provider_quote(rapido, &request(VehicleType::Car), &sampler, &clock).is_none());
        assert!(provider_quote(rapido, &request(VehicleType::Auto), &sampler, &clock).is_none());
        assert!(provider_quote(rapido, &request(VehicleType::Bike), &sampler, &clock).is_some());
    }

    #[test]
    fn quotes_match_the_requested_vehicle_type_and_eligibility() {
        for vehicle_type in [VehicleType::Bike, VehicleType::Auto, VehicleType::Car] {
            let quotes = quotes_for(vehicle_type);

            for quote in &quotes {
                assert_eq!(quote.vehicle_type, vehicle_type);
                assert_eq!(quote.vehicle_details.vehicle_type, vehicle_type);
            }

            let has_rapido = quotes
                .iter()
                .any(|quote| quote.provider == ProviderId::Rapido);
            assert_eq!(has_rapido, vehicle_type == VehicleType::Bike);
        }
    }

    #[test]
    fn quotes_come_back_sorted_by_price() {
        // distance pins at 6 km: uber (15 + 8*6) = 63, ola 54, rapido 46
        let quotes = quotes_for(VehicleType::Bike);

        let prices: Vec<u32> = quotes.iter().map(|quote| quote.price).collect();
        assert_eq!(prices, vec![46, 54, 63]);

        let providers: Vec<ProviderId> = quotes.iter().map(|quote| quote.provider).collect();
        assert_eq!(
            providers,
            vec![ProviderId::Rapido, ProviderId::Ola, ProviderId::Uber]
        );
    }

    #[test]
    fn car_quotes_carry_their_display_categories() {
        let quotes = quotes_for(VehicleType::Car);

        let categories: Vec<&str> = quotes
            .iter()
            .map(|quote| quote.vehicle_details.category.as_str())
            .collect();

        // ola car (35 + 14*6 = 119) undercuts uber car (130 * 1.2 = 156)
        assert_eq!(categories, vec!["Ola Micro", "UberGo"]);
    }

    #[test]
    fn compare_prices_on_empty_input_is_none() {
        assert!(compare_prices(&[]).is_none());
    }

    #[test]
    fn comparison_summary_bounds_and_mean() {
        let quotes = quotes_for(VehicleType::Bike);
        let summary = compare_prices(&quotes).unwrap();

        assert_eq!(summary.cheapest.price, 46);
        assert_eq!(summary.most_expensive.price, 63);
        // round((46 + 54 + 63) / 3) = round(54.33)
        assert_eq!(summary.average_price, 54);

        for quote in &quotes {
            assert!(summary.cheapest.price <= quote.price);
            assert!(quote.price <= summary.most_expensive.price);
        }
    }

    #[test]
    fn pinned_pickup_and_trip_times() {
        let uber = &PROVIDERS[0];
        let quote = provider_quote(
            uber,
            &request(VehicleType::Car),
            &ConstSampler(1.0),
            &FixedClock(OFF_PEAK_HOUR),
        )
        .unwrap();

        // pickup draw clamps to the window floor, trip is 6 km at 30 km/h
        // plus a one-minute delay draw
        assert_eq!(quote.estimated_pickup_time_minutes, 3);
        assert_eq!(quote.estimated_trip_time_minutes, 13);
        assert!(quote.availability);
    }
}
