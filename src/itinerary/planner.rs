use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::{normalize, prompt};
use crate::Result;
use crate::llm::CompletionProvider;
use crate::models::TripRequest;

/// Runs one request through validate → prompt → completion → normalize
pub struct ItineraryPlanner {
    provider: Arc<dyn CompletionProvider>,
}

impl ItineraryPlanner {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate an itinerary. The provider is not called for invalid requests.
    #[instrument(skip_all, fields(city = request.city.as_deref().unwrap_or_default()))]
    pub async fn generate(&self, request: TripRequest) -> Result<String> {
        let trip = request.validate().inspect_err(|e| warn!("Rejected request: {e}"))?;

        let prompt = prompt::build_prompt(&trip);
        info!(
            "Requesting {} itinerary for {} ({})",
            trip.trip_duration, trip.city, trip.budget
        );

        let raw = self
            .provider
            .complete(&prompt)
            .await
            .inspect_err(|e| error!("Itinerary generation error: {e}"))?;

        Ok(normalize::normalize_itinerary(&raw, &trip.budget))
    }
}
