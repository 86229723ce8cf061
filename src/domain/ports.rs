use crate::domain::model::{Feature, Plan};
use crate::domain::rules::PricingRules;

/// Read-only source of catalogs and pricing rules.
pub trait CatalogProvider: Send + Sync {
    fn plans(&self) -> &[Plan];
    fn features(&self) -> &[Feature];
    fn rules(&self) -> &PricingRules;

    /// Exact-name lookup; callers normalise the input first.
    fn find_plan(&self, name: &str) -> Option<&Plan> {
        self.plans().iter().find(|p| p.name == name)
    }

    fn find_feature(&self, name: &str) -> Option<&Feature> {
        self.features().iter().find(|f| f.name == name)
    }
}
