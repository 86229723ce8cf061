use crate::core::pricing::PricingEngine;
use crate::domain::model::Quote;
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{GymError, Result};
use crate::utils::validation::{parse_feature_choice, parse_group_size, parse_plan_choice, FeatureChoice};

/// Prices a selection given up front, e.g. from command-line arguments.
/// Unlike the prompter there is nobody to re-ask, so an unknown feature is
/// an error.
pub fn build_quote<C, S>(catalog: &C, plan: &str, features: &[S], group_size: &str) -> Result<Quote>
where
    C: CatalogProvider + ?Sized,
    S: AsRef<str>,
{
    let plan = parse_plan_choice(catalog, plan)?;

    let mut selected = Vec::with_capacity(features.len());
    for raw in features {
        match parse_feature_choice(catalog, raw.as_ref()) {
            FeatureChoice::Add(feature) => selected.push(feature),
            FeatureChoice::Done | FeatureChoice::Unknown(_) => {
                return Err(GymError::InvalidInput {
                    field: "feature".to_string(),
                    value: raw.as_ref().to_string(),
                })
            }
        }
    }

    let group_size = parse_group_size(group_size)?;
    let engine = PricingEngine::new(catalog.rules().clone());
    Ok(engine.quote(plan, selected, group_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::PricingConfig;

    #[test]
    fn test_build_quote() {
        let config = PricingConfig::default();
        let quote = build_quote(
            &config,
            "Premium",
            &["vip_facilities", "spa access", "personal_training", "group_classes"],
            "4",
        )
        .unwrap();

        assert_eq!(quote.features.len(), 4);
        assert_eq!(quote.breakdown.display_total(), 349);
    }

    #[test]
    fn test_build_quote_without_features() {
        let config = PricingConfig::default();
        let none: [&str; 0] = [];
        let quote = build_quote(&config, "basic", &none, "1").unwrap();
        assert_eq!(quote.breakdown.total, 100.0);
        assert!(quote.breakdown.adjustments.is_empty());
    }

    #[test]
    fn test_build_quote_rejects_bad_input() {
        let config = PricingConfig::default();
        assert!(matches!(
            build_quote(&config, "gold", &["spa_access"], "1"),
            Err(GymError::InvalidSelection { .. })
        ));
        assert!(matches!(
            build_quote(&config, "basic", &["sauna"], "1"),
            Err(GymError::InvalidInput { ref field, .. }) if field == "feature"
        ));
        assert!(matches!(
            build_quote(&config, "basic", &["done"], "1"),
            Err(GymError::InvalidInput { .. })
        ));
        assert!(matches!(
            build_quote(&config, "basic", &["spa_access"], "0"),
            Err(GymError::InvalidInput { ref field, .. }) if field == "group size"
        ));
    }

    #[test]
    fn test_build_quote_uses_configured_rules() {
        let config = PricingConfig::from_toml_str("[rules]\ngroup_min_size = 5\n").unwrap();
        let quote = build_quote(&config, "basic", &["spa_access"], "4").unwrap();
        assert!(quote.breakdown.adjustments.is_empty());
    }
}
