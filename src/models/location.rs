//! Caller-supplied location

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Coordinates of the traveller, passed through to the prompt as-is
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Accepted wire shapes: `[lat, lon]` or an object with named fields
#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinatesWire {
    Pair(f64, f64),
    Named {
        #[serde(alias = "lat")]
        latitude: f64,
        #[serde(alias = "lng", alias = "lon")]
        longitude: f64,
    },
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (latitude, longitude) = match CoordinatesWire::deserialize(deserializer)? {
            CoordinatesWire::Pair(latitude, longitude) => (latitude, longitude),
            CoordinatesWire::Named {
                latitude,
                longitude,
            } => (latitude, longitude),
        };
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_coordinates())
    }
}

/// Where the traveller currently is, as sent by the caller.
///
/// The wire value is opaque: recognised coordinate shapes are normalised,
/// anything else is passed to the prompt as text.
#[derive(Debug, Clone, PartialEq)]
pub enum TravellerLocation {
    Coordinates(Coordinates),
    Raw(String),
}

impl TravellerLocation {
    /// Interpret a wire value. `null`, `""`, `[]` and `{}` mean no location.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match &value {
            Value::Null => return None,
            Value::String(text) if text.trim().is_empty() => return None,
            Value::Array(items) if items.is_empty() => return None,
            Value::Object(fields) if fields.is_empty() => return None,
            _ => {}
        }

        if let Ok(coords) = Coordinates::deserialize(&value) {
            return Some(Self::Coordinates(coords));
        }

        Some(match value {
            Value::String(text) => Self::Raw(text.trim().to_string()),
            other => Self::Raw(other.to_string()),
        })
    }
}

impl fmt::Display for TravellerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravellerLocation::Coordinates(coords) => fmt::Display::fmt(coords, f),
            TravellerLocation::Raw(text) => f.write_str(text),
        }
    }
}
