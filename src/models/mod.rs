//! Data models for the Yatra service
//!
//! - Location: where the caller says they are
//! - Trip: the itinerary request and its validated form

pub mod location;
pub mod trip;

pub use location::{Coordinates, TravellerLocation};
pub use trip::{TripParameters, TripRequest};
