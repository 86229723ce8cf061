use gym_pricing::domain::catalog::{default_features, default_plans};
use gym_pricing::{Feature, Plan, PricingEngine, PricingRules};
use proptest::prelude::*;

const GROUP: &str = "Group discount applied (10%)";
const TIER_50: &str = "Special discount applied: $50";
const TIER_20: &str = "Special discount applied: $20";
const SURCHARGE: &str = "Premium membership surcharge applied (15%)";

fn plan_strategy() -> impl Strategy<Value = Plan> {
    proptest::sample::select(default_plans())
}

fn features_strategy() -> impl Strategy<Value = Vec<Feature>> {
    proptest::collection::vec(proptest::sample::select(default_features()), 0..8)
}

fn post_group_total(plan: &Plan, features: &[Feature], group_size: u32) -> f64 {
    let base = f64::from(plan.cost + features.iter().map(|f| f.cost).sum::<u32>());
    if group_size >= 2 {
        base * 0.90
    } else {
        base
    }
}

proptest! {
    #[test]
    fn total_is_never_negative(
        plan in plan_strategy(),
        features in features_strategy(),
        group_size in 1u32..50,
    ) {
        let result = PricingEngine::default().calculate(&plan, &features, group_size);
        prop_assert!(result.total >= 0.0);
        prop_assert!(result.display_total() >= 0);
    }

    #[test]
    fn group_discount_is_first_and_only_for_groups(
        plan in plan_strategy(),
        features in features_strategy(),
        group_size in 1u32..50,
    ) {
        let result = PricingEngine::default().calculate(&plan, &features, group_size);
        let has_group = result.adjustments.iter().any(|a| a == GROUP);

        prop_assert_eq!(has_group, group_size >= 2);
        if has_group {
            prop_assert_eq!(result.adjustments[0].as_str(), GROUP);
        }
    }

    #[test]
    fn at_most_one_tier_discount_gated_on_discounted_total(
        plan in plan_strategy(),
        features in features_strategy(),
        group_size in 1u32..50,
    ) {
        let result = PricingEngine::default().calculate(&plan, &features, group_size);
        let has_50 = result.adjustments.iter().any(|a| a == TIER_50);
        let has_20 = result.adjustments.iter().any(|a| a == TIER_20);
        let gated = post_group_total(&plan, &features, group_size);

        prop_assert!(!(has_50 && has_20));
        prop_assert_eq!(has_50, gated > 400.0);
        prop_assert_eq!(has_20, gated > 200.0 && gated <= 400.0);
    }

    #[test]
    fn surcharge_is_last_and_only_for_premium(
        plan in plan_strategy(),
        features in features_strategy(),
        group_size in 1u32..50,
    ) {
        let result = PricingEngine::default().calculate(&plan, &features, group_size);
        let premium = plan.name == "premium" || features.iter().any(|f| f.name == "vip_facilities");

        prop_assert_eq!(result.adjustments.iter().any(|a| a == SURCHARGE), premium);
        if premium {
            prop_assert_eq!(result.adjustments.last().map(String::as_str), Some(SURCHARGE));
        }
    }

    #[test]
    fn identical_inputs_give_identical_results(
        plan in plan_strategy(),
        features in features_strategy(),
        group_size in 1u32..50,
    ) {
        let engine = PricingEngine::new(PricingRules::default());
        let first = engine.calculate(&plan, &features, group_size);
        let second = engine.calculate(&plan, &features, group_size);
        prop_assert_eq!(first, second);
    }
}
