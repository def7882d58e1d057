//! Value objects for the tiffin pricing domain.
//!
//! Defines the plan request, plan, add-on, and aggregate summary records.
//! All types derive Serialize/Deserialize; serialized field names follow the
//! domain contract (`mealType`, `dailyRate`, `totalCost`, ...), hence the
//! camelCase renames.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Meal types
// ============================================================================

/// Subscription tier. Each tier carries a fixed per-day price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Veg,
    NonVeg,
    Jain,
}

impl MealType {
    /// All recognized meal types, in price-table order.
    pub const ALL: [MealType; 3] = [MealType::Veg, MealType::NonVeg, MealType::Jain];

    /// Fixed per-day price for this tier (not configurable).
    pub fn daily_rate(self) -> f64 {
        match self {
            Self::Veg => 80.0,
            Self::NonVeg => 120.0,
            Self::Jain => 90.0,
        }
    }

    /// Parse a meal type name. Returns None for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "veg" => Some(Self::Veg),
            "nonveg" => Some(Self::NonVeg),
            "jain" => Some(Self::Jain),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Veg => write!(f, "veg"),
            Self::NonVeg => write!(f, "nonveg"),
            Self::Jain => write!(f, "jain"),
        }
    }
}

// ============================================================================
// Plan request
// ============================================================================

/// Configuration input for building a plan.
///
/// `meal_type` stays a raw string here so unrecognized values survive
/// deserialization and hit the builder's soft-failure path instead of
/// erroring at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    /// Customer name (required — an empty name rejects the request)
    pub name: String,

    /// Meal type name
    pub meal_type: String,

    /// Billing days
    pub days: u32,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            meal_type: default_meal_type(),
            days: default_days(),
        }
    }
}

fn default_meal_type() -> String {
    "veg".to_string()
}

fn default_days() -> u32 {
    30
}

// ============================================================================
// Plan
// ============================================================================

/// A priced meal-subscription plan for one customer.
///
/// Immutable by convention: operations that change pricing return a new
/// `Plan` and leave their input untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Customer name
    pub name: String,

    /// Subscription tier
    pub meal_type: MealType,

    /// Billing days
    pub days: u32,

    /// Price per day (tier rate plus any applied add-on surcharge)
    pub daily_rate: f64,

    /// Always `daily_rate * days` at the time of computation
    pub total_cost: f64,

    /// Names of applied add-ons, in application order (empty for base plans)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addon_names: Vec<String>,
}

// ============================================================================
// Add-ons
// ============================================================================

/// An optional extra charged per day on top of a plan's daily rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    /// Label of the extra item
    pub name: String,

    /// Per-day surcharge
    pub price: f64,
}

impl Addon {
    /// An add-on counts only with a finite, strictly positive price.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

// ============================================================================
// Aggregate summary
// ============================================================================

/// Summary statistics over a collection of plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    /// Number of plans aggregated
    pub total_customers: u32,

    /// Sum of every plan's total cost
    pub total_revenue: f64,

    /// Plan count per meal type, keyed in first-occurrence order
    pub meal_breakdown: IndexMap<MealType, u32>,
}

// ============================================================================
// Tests
// ============================================================================
