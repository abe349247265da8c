mod quote;
mod ride;
mod ride_query;

pub use quote::{ComparisonSummary, Quote, VehicleDetails};
pub use ride::{ProviderId, RouteRequest, VehicleType};
pub use ride_query::{RideQuery, RideQueryStatus};
