//! Prompt construction
//!
//! Turns validated trip parameters into the system and user instructions sent
//! to the model. The user instruction pins the output to `Day N:` sections and
//! `<Attraction> – <Cost label>` entries so the normalizer can match them.

use super::catalog::{self, COST_SEPARATOR, CostLabel};
use crate::llm::ChatPrompt;
use crate::models::TripParameters;

const SYSTEM_INSTRUCTION: &str = "You are an Indian travel budgeting expert. \
You must prioritize factual accuracy. \
Never invent exact monument entry fees. \
Use cost ranges and categories only.";

/// Build the system/user prompt pair for a trip
#[must_use]
pub fn build_prompt(trip: &TripParameters) -> ChatPrompt {
    ChatPrompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user: build_user_instruction(trip),
    }
}

/// Comma-joined prompt phrases for the known interests; unknown labels are dropped
#[must_use]
pub fn interest_clause(interests: &[String]) -> String {
    interests
        .iter()
        .filter_map(|label| catalog::interest_phrase(label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Guidance text for a budget tier, empty when the tier is unknown
#[must_use]
pub fn budget_guidance(budget: &str) -> &'static str {
    catalog::budget_tier(budget).map_or("", |tier| tier.guidance)
}

fn build_user_instruction(trip: &TripParameters) -> String {
    let location_clause = trip
        .location
        .as_ref()
        .map(|location| format!("User current coordinates: {location}. "))
        .unwrap_or_default();

    let labels: String = CostLabel::ALL
        .into_iter()
        .map(|label| match label.price_band() {
            Some(band) => format!("  • {label} ({band})\n"),
            None => format!("  • {label}\n"),
        })
        .collect();

    format!(
        "You are an expert Indian travel planning and budgeting assistant.

{location_clause}
Plan a {duration} trip in {city}.

User Budget Category: {budget}
Budget Guidance: {guidance}
User Interests: {interests}

STRICT COST RULES (MANDATORY):
- NEVER give exact entry fees for monuments.
- Use ONLY these cost labels for attractions:
{labels}- Write every attraction as \"<Attraction name>{COST_SEPARATOR}<Cost label>\".
- Food costs may be estimated per meal.
- Transport costs may be estimated per day.
- If unsure, say \"Cost varies\".

For EACH DAY include:
- Attractions with cost label
- Suggested visit timings
- Estimated food cost range
- Estimated local transport cost
- Estimated total daily spend range

Respond ONLY in plain text using:
Day 1:
Day 2:
etc.
",
        duration = trip.trip_duration,
        city = trip.city,
        budget = trip.budget,
        guidance = budget_guidance(&trip.budget),
        interests = interest_clause(&trip.interests),
    )
}
