//! Itinerary generation
//!
//! - catalog: interest, budget and landmark tables
//! - prompt: request → model instructions
//! - normalize: model output → caller-facing text
//! - planner: the request flow tying them to a completion provider

pub mod catalog;
pub mod normalize;
pub mod planner;
pub mod prompt;

pub use catalog::{BudgetTier, CostLabel};
pub use normalize::normalize_itinerary;
pub use planner::ItineraryPlanner;
pub use prompt::build_prompt;
