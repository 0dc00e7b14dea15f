use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use procuredata_core::{ListingQueryBuilder, ListingScope};
use procuredata_model::{FilterState, OrganizationID, PriceTier};

#[derive(Parser, Debug)]
#[command(name = "procurectl", version)]
#[command(about = "Browse the PROCUREDATA data catalog from the terminal")]
pub struct Cli {
    /// Path to procuredata.toml (defaults to PROCUREDATA_CONFIG or ./procuredata.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Env file loaded before reading the environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch listings (with fallback) and print those matching the filters
    Listings {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the categories present in the catalog, "all" first
    Categories {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Only listings owned by this provider organization
    #[arg(long, value_name = "ORG_ID")]
    pub provider: Option<OrganizationID>,
    /// Print JSON instead of tab-separated text
    #[arg(long)]
    pub json: bool,
    /// Use the built-in sample marketplace instead of the configured store
    #[arg(long)]
    pub demo: bool,
}

impl SourceArgs {
    pub fn scope(&self) -> ListingScope {
        match self.provider {
            Some(org) => ListingScope::Provider(org),
            None => ListingScope::Marketplace,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive match on listing or provider name
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category ("all" disables the filter)
    #[arg(long)]
    pub category: Option<String>,
    /// Only listings with the sustainability badge
    #[arg(long)]
    pub sustainable: bool,
    /// Only listings from verified providers
    #[arg(long)]
    pub verified: bool,
    #[arg(long, value_enum, default_value = "all")]
    pub price_tier: PriceTierArg,
}

impl FilterArgs {
    pub fn to_filter(&self) -> FilterState {
        let mut builder =
            ListingQueryBuilder::new().price_tier(self.price_tier.into());
        if let Some(search) = &self.search {
            builder = builder.search(search.clone());
        }
        if let Some(category) = &self.category {
            builder = builder.category(category.clone());
        }
        if self.sustainable {
            builder = builder.sustainable_only();
        }
        if self.verified {
            builder = builder.verified_only();
        }
        builder.build()
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum PriceTierArg {
    #[default]
    All,
    Free,
    Paid,
}

impl From<PriceTierArg> for PriceTier {
    fn from(value: PriceTierArg) -> Self {
        match value {
            PriceTierArg::All => PriceTier::All,
            PriceTierArg::Free => PriceTier::Free,
            PriceTierArg::Paid => PriceTier::Paid,
        }
    }
}
