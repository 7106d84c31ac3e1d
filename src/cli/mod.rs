//! CLI interface for tier-gate
//!
//! Provides subcommands for:
//! - `tiers`: Print the tier table
//! - `symbols` / `timeframes`: List what a tier can chart
//! - `check` / `quota`: Evaluate access and quota decisions
//! - `price`: Apply the affiliate discount
//! - `trial`: Resolve a trial scenario
//! - `token`: Generate an account token
//! - `config`: Show configuration

mod check;
mod price;
mod tiers;
mod token;
mod trial;

pub use check::{CheckArgs, QuotaArg, QuotaArgs};
pub use price::PriceArgs;
pub use tiers::{show_tiers, TierArgs};
pub use token::{TokenArg, TokenArgs};
pub use trial::TrialArgs;

use crate::tier::{Tier, TierError};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tier-gate")]
#[command(about = "Subscription tier entitlements for charting access")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every tier's limits
    Tiers,
    /// List symbols a tier can access
    Symbols(TierArgs),
    /// List timeframes a tier can access
    Timeframes(TierArgs),
    /// Check access to a symbol or chart
    Check(CheckArgs),
    /// Check a resource quota
    Quota(QuotaArgs),
    /// Price after affiliate discount
    Price(PriceArgs),
    /// Effective tier for a trial scenario
    Trial(TrialArgs),
    /// Generate an account token
    Token(TokenArgs),
    /// Show configuration
    Config,
}

/// Tier names are accepted in any case on the command line
pub(crate) fn parse_tier(value: &str) -> Result<Tier, TierError> {
    value.to_ascii_uppercase().parse()
}
