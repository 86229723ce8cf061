use crate::domain::catalog::{default_features, default_plans};
use crate::domain::model::{Feature, Plan};
use crate::domain::ports::CatalogProvider;
use crate::domain::rules::PricingRules;
use crate::utils::error::{GymError, Result};
use crate::utils::validation::{
    validate_catalog_names, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalogs and rules in effect. Every section of the TOML file is optional
/// and falls back to the built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub plans: Vec<Plan>,
    pub features: Vec<Feature>,
    pub rules: PricingRules,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            plans: default_plans(),
            features: default_features(),
            rules: PricingRules::default(),
        }
    }
}

impl PricingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GymError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GymError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.plans.is_empty() {
            return Err(GymError::InvalidConfigValueError {
                field: "plans".to_string(),
                value: "[]".to_string(),
                reason: "At least one plan is required".to_string(),
            });
        }

        validate_catalog_names("plans", self.plans.iter().map(|p| p.name.as_str()))?;
        validate_catalog_names("features", self.features.iter().map(|f| f.name.as_str()))?;

        for plan in &self.plans {
            validate_positive_number(&format!("plans.{}.cost", plan.name), plan.cost.into(), 1)?;
        }
        for feature in &self.features {
            validate_positive_number(
                &format!("features.{}.cost", feature.name),
                feature.cost.into(),
                1,
            )?;
        }

        let rules = &self.rules;
        validate_positive_number("rules.group_min_size", rules.group_min_size.into(), 1)?;
        validate_range("rules.group_multiplier", rules.group_multiplier, f64::MIN_POSITIVE, 1.0)?;
        validate_range("rules.premium_surcharge", rules.premium_surcharge, 1.0, 10.0)?;

        if rules.high_value_threshold <= rules.medium_value_threshold {
            return Err(GymError::InvalidConfigValueError {
                field: "rules.high_value_threshold".to_string(),
                value: rules.high_value_threshold.to_string(),
                reason: format!(
                    "Must be greater than rules.medium_value_threshold ({})",
                    rules.medium_value_threshold
                ),
            });
        }
        validate_range(
            "rules.high_value_discount",
            rules.high_value_discount,
            0,
            rules.high_value_threshold,
        )?;
        validate_range(
            "rules.medium_value_discount",
            rules.medium_value_discount,
            0,
            rules.medium_value_threshold,
        )?;

        validate_non_empty_string("rules.premium_plan", &rules.premium_plan)?;
        validate_non_empty_string("rules.premium_feature", &rules.premium_feature)?;
        if self.find_plan(&rules.premium_plan).is_none() {
            tracing::warn!(
                "Premium plan '{}' is not in the plan catalog; only the feature can trigger the surcharge",
                rules.premium_plan
            );
        }

        Ok(())
    }
}

impl CatalogProvider for PricingConfig {
    fn plans(&self) -> &[Plan] {
        &self.plans
    }

    fn features(&self) -> &[Feature] {
        &self.features
    }

    fn rules(&self) -> &PricingRules {
        &self.rules
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
