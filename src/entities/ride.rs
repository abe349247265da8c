use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Auto,
    Car,
}

impl Default for VehicleType {
    fn default() -> Self {
        Self::Car
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Uber,
    Ola,
    Rapido,
}

impl ProviderId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uber => "uber",
            Self::Ola => "ola",
            Self::Rapido => "rapido",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,
}

impl RouteRequest {
    pub fn new(from: String, to: String, vehicle_type: VehicleType) -> Result<Self, Error> {
        if from.trim().is_empty() {
            return Err(validation_error("pickup location is required"));
        }

        if to.trim().is_empty() {
            return Err(validation_error("destination is required"));
        }

        Ok(Self {
            from,
            to,
            vehicle_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_pickup() {
        let result = RouteRequest::new("".into(), "Airport".into(), VehicleType::Car);

        assert_eq!(result.unwrap_err().code, 102);
    }

    #[test]
    fn rejects_blank_destination() {
        let result = RouteRequest::new("MG Road".into(), "   ".into(), VehicleType::Bike);

        assert_eq!(result.unwrap_err().code, 102);
    }

    #[test]
    fn vehicle_type_defaults_to_car() {
        assert_eq!(VehicleType::default(), VehicleType::Car);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProviderId::Rapido).unwrap(),
            "\"rapido\""
        );
        assert_eq!(
            serde_json::to_string(&VehicleType::Auto).unwrap(),
            "\"auto\""
        );
    }
}
