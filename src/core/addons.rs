//! Add-on application — derive a re-priced plan from a base plan.

use super::types::{Addon, Plan};

/// Apply add-ons to a plan, producing a new plan with the surcharge folded
/// into the daily rate and the total recomputed.
///
/// An absent base plan short-circuits to `None` before add-ons are looked
/// at. Invalid add-ons (zero, negative, or non-finite price) are silently
/// excluded from both the surcharge and the name list; this is tolerant
/// filtering, not an error. The input plan is never mutated.
pub fn apply_addons(plan: Option<&Plan>, addons: &[Addon]) -> Option<Plan> {
    let plan = plan?;

    let valid: Vec<&Addon> = addons.iter().filter(|a| a.is_valid()).collect();
    let surcharge: f64 = valid.iter().map(|a| a.price).sum();

    let daily_rate = plan.daily_rate + surcharge;
    Some(Plan {
        daily_rate,
        total_cost: daily_rate * f64::from(plan.days),
        addon_names: valid.iter().map(|a| a.name.clone()).collect(),
        ..plan.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_plan;
    use crate::core::types::PlanRequest;

    fn base_plan() -> Plan {
        build_plan(&PlanRequest {
            name: "Rahul".to_string(),
            ..PlanRequest::default()
        })
        .unwrap()
    }

    fn addon(name: &str, price: f64) -> Addon {
        Addon {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_addons_absent_plan_is_none() {
        assert!(apply_addons(None, &[addon("raita", 15.0)]).is_none());
        assert!(apply_addons(None, &[]).is_none());
    }

    #[test]
    fn test_addons_none_applied() {
        let plan = base_plan();
        let derived = apply_addons(Some(&plan), &[]).unwrap();
        assert_eq!(derived.daily_rate, plan.daily_rate);
        assert_eq!(derived.total_cost, plan.total_cost);
        assert!(derived.addon_names.is_empty());
    }

    #[test]
    fn test_addons_invalid_filtered() {
        // dailyRate 80, days 30; only raita counts
        let plan = base_plan();
        let addons = vec![addon("raita", 15.0), addon("bad", -5.0), addon("free", 0.0)];
        let derived = apply_addons(Some(&plan), &addons).unwrap();
        assert_eq!(derived.daily_rate, 95.0);
        assert_eq!(derived.total_cost, 2850.0);
        assert_eq!(derived.addon_names, vec!["raita"]);
    }

    #[test]
    fn test_addons_non_finite_filtered() {
        let plan = base_plan();
        let addons = vec![addon("nan", f64::NAN), addon("papad", 10.0)];
        let derived = apply_addons(Some(&plan), &addons).unwrap();
        assert_eq!(derived.daily_rate, 90.0);
        assert_eq!(derived.addon_names, vec!["papad"]);
    }

    #[test]
    fn test_addons_order_preserved() {
        let plan = base_plan();
        let addons = vec![
            addon("raita", 15.0),
            addon("pickle", 5.0),
            addon("sweet", 20.0),
        ];
        let derived = apply_addons(Some(&plan), &addons).unwrap();
        assert_eq!(derived.addon_names, vec!["raita", "pickle", "sweet"]);
        assert_eq!(derived.daily_rate, 120.0);
        assert_eq!(derived.total_cost, 3600.0);
    }

    #[test]
    fn test_addons_original_untouched() {
        let plan = base_plan();
        let before = plan.clone();
        let _ = apply_addons(Some(&plan), &[addon("raita", 15.0)]).unwrap();
        assert_eq!(plan, before);
    }

    #[test]
    fn test_addons_other_fields_copied() {
        let plan = build_plan(&PlanRequest {
            name: "Meera".to_string(),
            meal_type: "nonveg".to_string(),
            days: 15,
        })
        .unwrap();
        let derived = apply_addons(Some(&plan), &[addon("egg", 12.0)]).unwrap();
        assert_eq!(derived.name, plan.name);
        assert_eq!(derived.meal_type, plan.meal_type);
        assert_eq!(derived.days, plan.days);
        assert_eq!(derived.daily_rate, 132.0);
        assert_eq!(derived.total_cost, 1980.0);
    }
}
