use crate::adapters::console::Console;
use crate::domain::catalog::{display_name, listing_line};
use crate::domain::model::Quote;
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use crate::utils::validation::normalize_choice;
use std::io::{BufRead, Write};

const AFFIRMATIVE: &str = "y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Only the affirmative token confirms; anything else, blank included, cancels.
pub fn parse_confirmation(raw: &str) -> Confirmation {
    if normalize_choice(raw) == AFFIRMATIVE {
        Confirmation::Confirmed
    } else {
        Confirmation::Cancelled
    }
}

pub fn summary_lines(quote: &Quote) -> Vec<String> {
    let mut lines = vec![
        "Selection summary:".to_string(),
        format!(
            "- Plan: {} (${})",
            display_name(&quote.plan.name),
            quote.plan.cost
        ),
        "- Additional features:".to_string(),
    ];
    lines.extend(
        quote
            .features
            .iter()
            .map(|f| format!("  * {} (${})", display_name(&f.name), f.cost)),
    );
    lines.extend(quote.breakdown.adjustments.iter().map(|a| format!("- {}", a)));
    lines.push(format!(
        "- Calculated total: ${}",
        quote.breakdown.display_total()
    ));
    lines
}

pub fn confirm<R, W>(console: &mut Console<R, W>, quote: &Quote) -> Result<Confirmation>
where
    R: BufRead,
    W: Write,
{
    console.say("")?;
    for line in summary_lines(quote) {
        console.say(line)?;
    }

    let answer = console.ask("\nDo you confirm this selection? (y/n): ")?;
    let confirmation = parse_confirmation(&answer);
    tracing::debug!(?confirmation, "Confirmation answered");
    Ok(confirmation)
}

/// Plans, features and rules, as printed by the `catalog` command.
pub fn catalog_lines<C: CatalogProvider + ?Sized>(catalog: &C) -> Vec<String> {
    let rules = catalog.rules();
    let mut lines = vec!["Membership plans:".to_string()];
    lines.extend(catalog.plans().iter().map(|p| listing_line(&p.name, p.cost)));

    lines.push(String::new());
    lines.push("Additional features:".to_string());
    lines.extend(
        catalog
            .features()
            .iter()
            .map(|f| listing_line(&f.name, f.cost)),
    );

    lines.push(String::new());
    lines.push("Pricing rules (applied in order):".to_string());
    lines.push(format!(
        "1. {}% group discount for {} or more people",
        rules.group_discount_percent(),
        rules.group_min_size
    ));
    lines.push(format!(
        "2. ${} off above ${}, otherwise ${} off above ${}",
        rules.high_value_discount,
        rules.high_value_threshold,
        rules.medium_value_discount,
        rules.medium_value_threshold
    ));
    lines.push(format!(
        "3. {}% surcharge for the {} plan or the {} feature",
        rules.surcharge_percent(),
        display_name(&rules.premium_plan),
        display_name(&rules.premium_feature)
    ));
    lines
}
