//! Plan building — turn a request into a priced plan.

use super::types::{MealType, Plan, PlanRequest};

/// Build a plan from a request.
///
/// Soft failure by design: a missing/empty name or an unrecognized meal
/// type yields `None`, never an error. The price table is fixed per
/// [`MealType::daily_rate`].
pub fn build_plan(req: &PlanRequest) -> Option<Plan> {
    if req.name.is_empty() {
        return None;
    }
    let meal_type = MealType::from_name(&req.meal_type)?;

    let daily_rate = meal_type.daily_rate();
    Some(Plan {
        name: req.name.clone(),
        meal_type,
        days: req.days,
        daily_rate,
        total_cost: daily_rate * f64::from(req.days),
        addon_names: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let plan = build_plan(&PlanRequest {
            name: "Rahul".to_string(),
            ..PlanRequest::default()
        })
        .unwrap();
        assert_eq!(plan.name, "Rahul");
        assert_eq!(plan.meal_type, MealType::Veg);
        assert_eq!(plan.days, 30);
        assert_eq!(plan.daily_rate, 80.0);
        assert_eq!(plan.total_cost, 2400.0);
        assert!(plan.addon_names.is_empty());
    }

    #[test]
    fn test_builder_empty_request_rejected() {
        // All-defaults request has no name
        assert!(build_plan(&PlanRequest::default()).is_none());
    }

    #[test]
    fn test_builder_unknown_meal_type_rejected() {
        let req = PlanRequest {
            name: "X".to_string(),
            meal_type: "vegan".to_string(),
            days: 30,
        };
        assert!(build_plan(&req).is_none());
    }

    #[test]
    fn test_builder_each_tier() {
        for (meal, rate) in [("veg", 80.0), ("nonveg", 120.0), ("jain", 90.0)] {
            let plan = build_plan(&PlanRequest {
                name: "T".to_string(),
                meal_type: meal.to_string(),
                days: 10,
            })
            .unwrap();
            assert_eq!(plan.daily_rate, rate);
            assert_eq!(plan.total_cost, rate * 10.0);
        }
    }

    #[test]
    fn test_builder_cost_invariant() {
        for days in [0u32, 1, 7, 30, 365] {
            let plan = build_plan(&PlanRequest {
                name: "I".to_string(),
                meal_type: "jain".to_string(),
                days,
            })
            .unwrap();
            assert_eq!(plan.total_cost, plan.daily_rate * f64::from(plan.days));
        }
    }
}
