//! Plan aggregation — summary statistics over a collection of plans.

use super::types::{AggregateSummary, Plan};
use indexmap::IndexMap;

/// Combine any number of plans into an aggregate summary.
///
/// Returns `None` when no plans are supplied. Plans are not re-validated;
/// revenue is accumulated left-to-right from 0 and the meal breakdown is
/// keyed in first-occurrence order.
pub fn combine_plans(plans: &[Plan]) -> Option<AggregateSummary> {
    if plans.is_empty() {
        return None;
    }

    let mut total_revenue = 0.0;
    let mut meal_breakdown: IndexMap<_, u32> = IndexMap::new();

    for plan in plans {
        total_revenue += plan.total_cost;
        *meal_breakdown.entry(plan.meal_type).or_insert(0) += 1;
    }

    Some(AggregateSummary {
        total_customers: plans.len() as u32,
        total_revenue,
        meal_breakdown,
    })
}
