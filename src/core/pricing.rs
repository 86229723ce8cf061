use crate::domain::model::{Feature, Plan, PriceBreakdown, Quote};
use crate::domain::rules::PricingRules;

/// Applies the pricing rules to a selection.
///
/// The order is fixed: group discount, then at most one value-tier discount
/// (judged on the discounted total), then the premium surcharge. The total is
/// never rounded here.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rules: PricingRules,
}

impl PricingEngine {
    pub fn new(rules: PricingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn calculate(&self, plan: &Plan, features: &[Feature], group_size: u32) -> PriceBreakdown {
        let base: u64 = u64::from(plan.cost) + features.iter().map(|f| u64::from(f.cost)).sum::<u64>();
        let mut total = base as f64;
        let mut adjustments = Vec::new();

        if self.rules.qualifies_for_group_discount(group_size) {
            total *= self.rules.group_multiplier;
            adjustments.push(self.rules.group_discount_label());
        }

        if let Some(discount) = self.rules.tier_discount(total) {
            total -= f64::from(discount);
            adjustments.push(PricingRules::special_discount_label(discount));
        }

        if self.rules.is_premium(plan, features) {
            total *= self.rules.premium_surcharge;
            adjustments.push(self.rules.surcharge_label());
        }

        for adjustment in &adjustments {
            tracing::debug!("{}", adjustment);
        }
        tracing::debug!(
            plan = %plan.name,
            features = features.len(),
            group_size,
            base,
            total,
            "Price calculated"
        );

        PriceBreakdown { total, adjustments }
    }

    pub fn quote(&self, plan: Plan, features: Vec<Feature>, group_size: u32) -> Quote {
        let breakdown = self.calculate(&plan, &features, group_size);
        Quote {
            plan,
            features,
            group_size,
            breakdown,
        }
    }
}
