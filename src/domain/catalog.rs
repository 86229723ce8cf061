//! Built-in plan and feature catalogs.
//!
//! Order matters: it is the order the prompter lists entries in.

use crate::domain::model::{Feature, Plan};

pub const DEFAULT_PLANS: &[(&str, u32)] = &[("basic", 100), ("premium", 180), ("family", 250)];

pub const DEFAULT_FEATURES: &[(&str, u32)] = &[
    ("personal_training", 50),
    ("group_classes", 30),
    ("spa_access", 40),
    ("vip_facilities", 60),
];

/// Token that ends feature selection; no catalog entry may use it.
pub const DONE_TOKEN: &str = "done";

pub fn default_plans() -> Vec<Plan> {
    DEFAULT_PLANS
        .iter()
        .map(|(name, cost)| Plan::new(*name, *cost))
        .collect()
}

pub fn default_features() -> Vec<Feature> {
    DEFAULT_FEATURES
        .iter()
        .map(|(name, cost)| Feature::new(*name, *cost))
        .collect()
}

/// `personal_training` -> `Personal training`
pub fn display_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `- Basic ($100)` style listing line.
pub fn listing_line(name: &str, cost: u32) -> String {
    format!("- {} (${})", display_name(name), cost)
}
