use crate::domain::catalog::DONE_TOKEN;
use crate::domain::model::{Feature, Plan};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{GymError, Result};
use std::collections::HashSet;
use std::num::IntErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails this check.
    if !(value >= min && value <= max) {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Catalog names must be usable as typed answers: non-empty, already
/// normalised, unique, and not the feature-loop sentinel.
pub fn validate_catalog_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;

        let reason = if name != normalize_feature_token(name) {
            Some("Name must be lowercase with underscores instead of spaces")
        } else if name == DONE_TOKEN {
            Some("Name is reserved")
        } else if !seen.insert(name) {
            Some("Duplicate name")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(GymError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: reason.to_string(),
            });
        }
    }
    Ok(())
}

pub fn normalize_choice(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `Spa Access ` -> `spa_access`
pub fn normalize_feature_token(raw: &str) -> String {
    normalize_choice(raw).replace(' ', "_")
}

pub fn parse_plan_choice<C: CatalogProvider + ?Sized>(catalog: &C, raw: &str) -> Result<Plan> {
    let choice = normalize_choice(raw);
    catalog
        .find_plan(&choice)
        .cloned()
        .ok_or(GymError::InvalidSelection { choice })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureChoice {
    Done,
    Add(Feature),
    Unknown(String),
}

pub fn parse_feature_choice<C: CatalogProvider + ?Sized>(catalog: &C, raw: &str) -> FeatureChoice {
    if normalize_choice(raw) == DONE_TOKEN {
        return FeatureChoice::Done;
    }
    let key = normalize_feature_token(raw);
    match catalog.find_feature(&key) {
        Some(feature) => FeatureChoice::Add(feature.clone()),
        None => FeatureChoice::Unknown(key),
    }
}

/// Any integer of at least one. Sizes beyond `u32::MAX` saturate; only the
/// group threshold comparison depends on the value.
pub fn parse_group_size(raw: &str) -> Result<u32> {
    let invalid = || GymError::InvalidInput {
        field: "group size".to_string(),
        value: raw.to_string(),
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(invalid()),
        Ok(size) => Ok(size),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u32::MAX),
        Err(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::PricingConfig;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rules.group_min_size", 2, 1).is_ok());
        assert!(validate_positive_number("rules.group_min_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rules.group_multiplier", 0.9, 0.0, 1.0).is_ok());
        assert!(validate_range("rules.group_multiplier", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("rules.group_multiplier", f64::NAN, 0.0, 1.0).is_err());
        assert!(validate_range("rules.premium_surcharge", f64::INFINITY, 1.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_catalog_names() {
        assert!(validate_catalog_names("plans", ["basic", "premium"]).is_ok());
        assert!(validate_catalog_names("plans", ["basic", "basic"]).is_err());
        assert!(validate_catalog_names("plans", ["Basic"]).is_err());
        assert!(validate_catalog_names("features", ["spa access"]).is_err());
        assert!(validate_catalog_names("features", ["done"]).is_err());
        assert!(validate_catalog_names("features", [" "]).is_err());
    }

    #[test]
    fn test_parse_plan_choice_is_case_and_space_insensitive() {
        let config = PricingConfig::default();
        let plan = parse_plan_choice(&config, "  PREMIUM \n").unwrap();
        assert_eq!(plan, Plan::new("premium", 180));

        let err = parse_plan_choice(&config, "gold").unwrap_err();
        assert!(matches!(err, GymError::InvalidSelection { ref choice } if choice == "gold"));
    }

    #[test]
    fn test_parse_feature_choice() {
        let config = PricingConfig::default();
        assert_eq!(parse_feature_choice(&config, " Done "), FeatureChoice::Done);
        assert_eq!(
            parse_feature_choice(&config, "Spa Access"),
            FeatureChoice::Add(Feature::new("spa_access", 40))
        );
        assert_eq!(
            parse_feature_choice(&config, "vip_facilities"),
            FeatureChoice::Add(Feature::new("vip_facilities", 60))
        );
        assert_eq!(
            parse_feature_choice(&config, "sauna"),
            FeatureChoice::Unknown("sauna".to_string())
        );
    }

    #[test]
    fn test_parse_group_size() {
        assert_eq!(parse_group_size("1").unwrap(), 1);
        assert_eq!(parse_group_size("  4 \n").unwrap(), 4);
        assert_eq!(parse_group_size("+3").unwrap(), 3);
        assert!(parse_group_size("0").is_err());
        assert!(parse_group_size("-2").is_err());
        assert!(parse_group_size("2.5").is_err());
        assert!(parse_group_size("two").is_err());
        assert!(parse_group_size("").is_err());
        assert!(parse_group_size("-99999999999").is_err());
    }

    #[test]
    fn test_parse_group_size_saturates_huge_groups() {
        assert_eq!(parse_group_size("5000000000").unwrap(), u32::MAX);
        assert_eq!(parse_group_size("4294967295").unwrap(), u32::MAX);
        assert_eq!(parse_group_size("99999999999999999999999999").unwrap(), u32::MAX);
    }
}
