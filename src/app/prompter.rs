use crate::adapters::console::Console;
use crate::domain::catalog::listing_line;
use crate::domain::model::{Feature, Plan};
use crate::domain::ports::CatalogProvider;
use crate::domain::rules::PricingRules;
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_feature_choice, parse_group_size, parse_plan_choice, FeatureChoice,
};
use std::io::{BufRead, Write};

pub fn select_plan<C, R, W>(console: &mut Console<R, W>, catalog: &C) -> Result<Plan>
where
    C: CatalogProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    console.say("\nAvailable plans:")?;
    for plan in catalog.plans() {
        console.say(listing_line(&plan.name, plan.cost))?;
    }

    let answer = console.ask("\nChoose a membership plan: ")?;
    let plan = parse_plan_choice(catalog, &answer)?;
    tracing::debug!(plan = %plan.name, "Plan selected");
    Ok(plan)
}

/// Collects features until `done`. Unknown names are reported and asked again.
pub fn select_features<C, R, W>(console: &mut Console<R, W>, catalog: &C) -> Result<Vec<Feature>>
where
    C: CatalogProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    console.say("\nAvailable additional features:")?;
    for feature in catalog.features() {
        console.say(listing_line(&feature.name, feature.cost))?;
    }

    let mut selected = Vec::new();
    loop {
        let answer = console.ask("\nEnter a feature name to add (or 'done'): ")?;
        match parse_feature_choice(catalog, &answer) {
            FeatureChoice::Done => break,
            FeatureChoice::Add(feature) => {
                tracing::debug!(feature = %feature.name, "Feature added");
                selected.push(feature);
            }
            FeatureChoice::Unknown(name) => {
                tracing::debug!(feature = %name, "Unknown feature requested");
                console.say("Feature not available. Please try again.")?;
            }
        }
    }

    Ok(selected)
}

pub fn read_group_size<R, W>(console: &mut Console<R, W>, rules: &PricingRules) -> Result<u32>
where
    R: BufRead,
    W: Write,
{
    let prompt = format!(
        "\nHow many people will sign up together?\n**{}% DISCOUNT FOR {} OR MORE PEOPLE**: ",
        rules.group_discount_percent(),
        rules.group_min_size
    );
    let answer = console.ask(&prompt)?;
    parse_group_size(&answer)
}
