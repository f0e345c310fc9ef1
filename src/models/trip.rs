//! Itinerary request model and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TravellerLocation;
use crate::error::MISSING_FIELDS_MESSAGE;
use crate::{Result, YatraError};

/// Trip duration used when the caller sends none
pub const DEFAULT_TRIP_DURATION: &str = "1-day";

/// Budget tier used when the caller sends none
pub const DEFAULT_BUDGET: &str = "Moderate";

/// Itinerary request as received on the wire.
///
/// Every field is optional here so that missing values surface as a
/// validation error instead of a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub trip_duration: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

/// A request that passed validation, with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct TripParameters {
    pub city: String,
    pub location: Option<TravellerLocation>,
    pub trip_duration: String,
    pub budget: String,
    pub interests: Vec<String>,
}

impl TripRequest {
    /// Check required fields and fill in defaults.
    ///
    /// `city` must be non-blank and `interests` non-empty. Interest labels are
    /// not checked against the known set here.
    pub fn validate(self) -> Result<TripParameters> {
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_string)
            .ok_or_else(|| YatraError::validation(MISSING_FIELDS_MESSAGE))?;

        let interests = self
            .interests
            .filter(|interests| !interests.is_empty())
            .ok_or_else(|| YatraError::validation(MISSING_FIELDS_MESSAGE))?;

        Ok(TripParameters {
            city,
            location: self.location.and_then(TravellerLocation::from_value),
            trip_duration: self
                .trip_duration
                .unwrap_or_else(|| DEFAULT_TRIP_DURATION.to_string()),
            budget: self.budget.unwrap_or_else(|| DEFAULT_BUDGET.to_string()),
            interests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(city: Option<&str>, interests: Option<Vec<&str>>) -> TripRequest {
        TripRequest {
            city: city.map(str::to_string),
            interests: interests.map(|list| list.into_iter().map(str::to_string).collect()),
            ..TripRequest::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let params = request(Some("Jaipur"), Some(vec!["Forts & Palaces"]))
            .validate()
            .unwrap();
        assert_eq!(params.city, "Jaipur");
        assert_eq!(params.trip_duration, "1-day");
        assert_eq!(params.budget, "Moderate");
        assert!(params.location.is_none());
    }

    #[test]
    fn test_missing_city_rejected() {
        for city in [None, Some(""), Some("   ")] {
            let err = request(city, Some(vec!["Traditional Food"]))
                .validate()
                .unwrap_err();
            assert!(err.is_client_error());
            assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_city_trimmed() {
        let params = request(Some("  Hyderabad \n"), Some(vec!["Forts & Palaces"]))
            .validate()
            .unwrap();
        assert_eq!(params.city, "Hyderabad");
    }

    #[test]
    fn test_location_parsed_or_dropped() {
        let request: TripRequest = serde_json::from_str(
            r#"{"city": "Mumbai", "interests": ["Temples & Shrines"], "location": {}}"#,
        )
        .unwrap();
        assert!(request.validate().unwrap().location.is_none());

        let request: TripRequest = serde_json::from_str(
            r#"{"city": "Mumbai", "interests": ["Temples & Shrines"], "location": "Bandra"}"#,
        )
        .unwrap();
        assert_eq!(
            request.validate().unwrap().location,
            Some(TravellerLocation::Raw("Bandra".to_string()))
        );
    }

    #[test]
    fn test_empty_interests_rejected() {
        assert!(request(Some("Delhi"), None).validate().is_err());
        assert!(request(Some("Delhi"), Some(vec![])).validate().is_err());
    }

    #[test]
    fn test_unknown_interests_still_valid() {
        let params = request(Some("Delhi"), Some(vec!["Skydiving"]))
            .validate()
            .unwrap();
        assert_eq!(params.interests, vec!["Skydiving".to_string()]);
    }

    #[test]
    fn test_explicit_null_uses_defaults() {
        let request: TripRequest = serde_json::from_str(
            r#"{"city": "Kolkata", "interests": ["Cultural Heritage"], "budget": null, "trip_duration": null}"#,
        )
        .unwrap();
        let params = request.validate().unwrap();
        assert_eq!(params.budget, DEFAULT_BUDGET);
        assert_eq!(params.trip_duration, DEFAULT_TRIP_DURATION);
    }
}
