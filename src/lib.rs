pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::console::Console;
pub use crate::config::{toml_config::PricingConfig, CliConfig, Command, QuoteArgs};
pub use crate::core::{
    pricing::PricingEngine,
    session::{SessionOutcome, SignupSession},
};
pub use crate::domain::model::{Feature, Plan, PriceBreakdown, Quote};
pub use crate::domain::ports::CatalogProvider;
pub use crate::domain::rules::PricingRules;
pub use crate::utils::error::{GymError, Result};
