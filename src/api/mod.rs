use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::INVALID_BODY_MESSAGE;
use crate::itinerary::ItineraryPlanner;
use crate::models::TripRequest;
use crate::YatraError;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiItinerary {
    pub itinerary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl YatraError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            YatraError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            YatraError::Validation { .. } => StatusCode::BAD_REQUEST,
            YatraError::Config { .. } | YatraError::Generation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for YatraError {
    fn into_response(self) -> Response {
        let body = ApiError {
            error: self.user_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub fn router(planner: Arc<ItineraryPlanner>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new().route("/itinerary", post(generate_itinerary)),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(planner)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "yatra",
        "version": crate::VERSION,
    }))
}

async fn generate_itinerary(
    State(planner): State<Arc<ItineraryPlanner>>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<ApiItinerary>, YatraError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected request body: {rejection}");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            YatraError::BodyTooLarge {
                limit: MAX_BODY_BYTES,
            }
        } else {
            YatraError::validation(INVALID_BODY_MESSAGE)
        }
    })?;

    let itinerary = planner.generate(request).await?;
    Ok(Json(ApiItinerary { itinerary }))
}
