use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ProviderId, Quote, RouteRequest};
use crate::error::{invalid_input_error, invalid_state_error, Error};

/// A persisted fare search: the request, the quotes it produced and the
/// booking outcome, stored as a single snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideQuery {
    pub token: Uuid,
    pub request: RouteRequest,
    pub results: Vec<Quote>,
    pub selected_provider: Option<ProviderId>,
    pub status: RideQueryStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideQueryStatus {
    Pending,
    Completed,
    Cancelled,
}

impl RideQueryStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl RideQuery {
    pub fn new(request: RouteRequest, results: Vec<Quote>) -> Self {
        Self {
            token: Uuid::new_v4(),
            request,
            results,
            selected_provider: None,
            status: RideQueryStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RideQueryStatus::Pending
    }

    /// Selects a provider from the stored results and completes the query.
    /// The provider must be one of the quoted ones and the query must still
    /// be pending.
    #[tracing::instrument]
    pub fn book(&mut self, provider: ProviderId) -> Result<(), Error> {
        if !self.is_pending() {
            return Err(invalid_state_error());
        }

        if !self.results.iter().any(|quote| quote.provider == provider) {
            return Err(invalid_input_error());
        }

        self.selected_provider = Some(provider);
        self.status = RideQueryStatus::Completed;

        Ok(())
    }

    #[tracing::instrument]
    pub fn cancel(&mut self) -> Result<(), Error> {
        if !self.is_pending() {
            return Err(invalid_state_error());
        }

        self.status = RideQueryStatus::Cancelled;

        Ok(())
    }
}
