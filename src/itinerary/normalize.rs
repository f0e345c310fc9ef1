//! Post-processing of model output
//!
//! Only substitutes fixed phrases and appends one trailing line; existing
//! content is never removed or reordered.

use super::catalog::{self, COST_SEPARATOR, CostLabel, KNOWN_FREE_LANDMARKS};

/// Labels the model sometimes attaches to free landmarks
const OVERRIDDEN_LABELS: [CostLabel; 2] = [CostLabel::LowCost, CostLabel::Moderate];

/// Force every known free landmark to read `<name> – Free`.
///
/// Plain substring replacement: fires only on the exact
/// `<name> – Low-cost` / `<name> – Moderate` form.
#[must_use]
pub fn normalize_costs(itinerary: &str) -> String {
    let mut text = itinerary.to_string();
    for place in KNOWN_FREE_LANDMARKS {
        let free = format!("{place}{COST_SEPARATOR}{}", CostLabel::Free);
        for label in OVERRIDDEN_LABELS {
            let wrong = format!("{place}{COST_SEPARATOR}{label}");
            if text.contains(&wrong) {
                text = text.replace(&wrong, &free);
            }
        }
    }
    text
}

/// Disclaimer for a daily cap
#[must_use]
pub fn disclaimer_for_cap(daily_cap: u32) -> &'static str {
    if daily_cap <= 2000 {
        "Note: This itinerary prioritizes free attractions, street food, and public transport."
    } else if daily_cap <= 5000 {
        "Note: This itinerary balances popular attractions with comfort."
    } else {
        "Note: This itinerary includes premium experiences and flexibility."
    }
}

/// Disclaimer for a named tier, `None` for an unknown tier
#[must_use]
pub fn budget_disclaimer(budget: &str) -> Option<&'static str> {
    catalog::budget_tier(budget).map(|tier| disclaimer_for_cap(tier.daily_cap))
}

/// Append the tier's disclaimer as a trailing line
#[must_use]
pub fn enforce_budget_language(mut itinerary: String, budget: &str) -> String {
    if let Some(note) = budget_disclaimer(budget) {
        itinerary.push('\n');
        itinerary.push_str(note);
    }
    itinerary
}

/// Full post-processing pass for one completion
#[must_use]
pub fn normalize_itinerary(raw: &str, budget: &str) -> String {
    enforce_budget_language(normalize_costs(raw), budget)
}
