//! Core pricing logic — types, plan building, add-ons, aggregation, rosters.

pub mod addons;
pub mod aggregate;
pub mod builder;
pub mod roster;
pub mod types;

pub use addons::apply_addons;
pub use aggregate::combine_plans;
pub use builder::build_plan;
pub use types::{Addon, AggregateSummary, MealType, Plan, PlanRequest};
