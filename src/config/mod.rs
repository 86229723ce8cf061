pub mod toml_config;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gym-pricing")]
#[command(about = "Interactive gym membership pricing calculator")]
pub struct CliConfig {
    /// Path to a TOML file overriding the built-in catalogs and pricing rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the plans, features and pricing rules in effect
    Catalog,
    /// Price a selection without prompting
    Quote(QuoteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    #[arg(long)]
    pub plan: String,

    /// Add-on feature; repeat to add several (duplicates are charged each time)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    #[arg(long, default_value = "1")]
    pub group_size: String,

    /// Print the price breakdown as JSON
    #[arg(long)]
    pub json: bool,
}
