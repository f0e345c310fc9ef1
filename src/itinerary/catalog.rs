//! Static lookup tables for India trip planning

use std::fmt;

/// Interest label → phrase used in the prompt
const INTEREST_PHRASES: &[(&str, &str)] = &[
    ("Temples & Shrines", "temples, shrines, religious sites"),
    ("Forts & Palaces", "historic forts, palaces, royal heritage"),
    ("Cultural Heritage", "cultural heritage, traditional arts"),
    ("Traditional Food", "local cuisine, street food, traditional dishes"),
    ("Museums & Art Galleries", "museums, art galleries, exhibitions"),
];

/// Places with free entry. Their cost label is always forced to Free.
pub const KNOWN_FREE_LANDMARKS: &[&str] = &[
    "Gateway of India",
    "Marine Drive",
    "Juhu Beach",
    "India Gate",
    "Charminar",
    "Howrah Bridge",
    "Rock Beach",
    "Marina Beach",
    "Haji Ali Dargah",
];

/// Separator the model is told to place between an attraction and its label
pub const COST_SEPARATOR: &str = " – ";

/// A named spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetTier {
    pub name: &'static str,
    /// Per-day spending cap in INR
    pub daily_cap: u32,
    pub guidance: &'static str,
}

pub const BUDGET_TIERS: &[BudgetTier] = &[
    BudgetTier {
        name: "Budget Friendly",
        daily_cap: 2000,
        guidance: "Daily spending should stay under ₹2,000 using free attractions, street food, and public transport.",
    },
    BudgetTier {
        name: "Moderate",
        daily_cap: 5000,
        guidance: "Daily spending should be ₹2,000–₹5,000 with a mix of comfort and value.",
    },
    BudgetTier {
        name: "Luxury Experience",
        daily_cap: 12000,
        guidance: "Daily spending can exceed ₹5,000 including premium experiences.",
    },
];

/// Cost categories the model may attach to an attraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostLabel {
    Free,
    LowCost,
    Moderate,
    Premium,
}

impl CostLabel {
    pub const ALL: [CostLabel; 4] = [
        CostLabel::Free,
        CostLabel::LowCost,
        CostLabel::Moderate,
        CostLabel::Premium,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CostLabel::Free => "Free",
            CostLabel::LowCost => "Low-cost",
            CostLabel::Moderate => "Moderate",
            CostLabel::Premium => "Premium",
        }
    }

    /// Price band shown next to the label in the prompt
    #[must_use]
    pub fn price_band(self) -> Option<&'static str> {
        match self {
            CostLabel::Free => None,
            CostLabel::LowCost => Some("₹0–₹100"),
            CostLabel::Moderate => Some("₹100–₹500"),
            CostLabel::Premium => Some("₹500+"),
        }
    }
}

impl fmt::Display for CostLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the prompt phrase for an interest label (exact match)
#[must_use]
pub fn interest_phrase(label: &str) -> Option<&'static str> {
    INTEREST_PHRASES
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, phrase)| *phrase)
}

/// Look up a budget tier by exact name
#[must_use]
pub fn budget_tier(name: &str) -> Option<&'static BudgetTier> {
    BUDGET_TIERS.iter().find(|tier| tier.name == name)
}
