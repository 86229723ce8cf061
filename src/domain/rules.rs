use crate::domain::model::{Feature, Plan};
use serde::{Deserialize, Serialize};

/// Discount and surcharge constants the pricing engine applies, in order:
/// group discount, one value-tier discount, premium surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingRules {
    pub group_min_size: u32,
    pub group_multiplier: f64,
    pub high_value_threshold: u32,
    pub high_value_discount: u32,
    pub medium_value_threshold: u32,
    pub medium_value_discount: u32,
    pub premium_surcharge: f64,
    pub premium_plan: String,
    pub premium_feature: String,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            group_min_size: 2,
            group_multiplier: 0.90,
            high_value_threshold: 400,
            high_value_discount: 50,
            medium_value_threshold: 200,
            medium_value_discount: 20,
            premium_surcharge: 1.15,
            premium_plan: "premium".to_string(),
            premium_feature: "vip_facilities".to_string(),
        }
    }
}

impl PricingRules {
    pub fn group_discount_percent(&self) -> u32 {
        ((1.0 - self.group_multiplier) * 100.0).round() as u32
    }

    pub fn surcharge_percent(&self) -> u32 {
        ((self.premium_surcharge - 1.0) * 100.0).round() as u32
    }

    pub fn group_discount_label(&self) -> String {
        format!("Group discount applied ({}%)", self.group_discount_percent())
    }

    pub fn special_discount_label(amount: u32) -> String {
        format!("Special discount applied: ${}", amount)
    }

    pub fn surcharge_label(&self) -> String {
        format!(
            "Premium membership surcharge applied ({}%)",
            self.surcharge_percent()
        )
    }

    pub fn qualifies_for_group_discount(&self, group_size: u32) -> bool {
        group_size >= self.group_min_size
    }

    /// Flat discount for a running total, if one of the value tiers is crossed.
    /// Both thresholds are strict.
    pub fn tier_discount(&self, total: f64) -> Option<u32> {
        if total > f64::from(self.high_value_threshold) {
            Some(self.high_value_discount)
        } else if total > f64::from(self.medium_value_threshold) {
            Some(self.medium_value_discount)
        } else {
            None
        }
    }

    pub fn is_premium(&self, plan: &Plan, features: &[Feature]) -> bool {
        plan.name == self.premium_plan || features.iter().any(|f| f.name == self.premium_feature)
    }
}
