//! Tier listing commands

use crate::entitlement::{upgrade_path, EntitlementResolver};
use crate::tier::{timeframe_label, Tier};
use clap::Args;

#[derive(Args, Debug)]
pub struct TierArgs {
    /// Tier name (FREE or PRO)
    #[arg(value_parser = super::parse_tier)]
    pub tier: Tier,
}

/// Print the limits of every tier
pub fn show_tiers() {
    println!(
        "{:<6} {:>7} {:>8} {:>11} {:>7} {:>7} {:>10} {:>6}",
        "Tier", "Price", "Symbols", "Timeframes", "Charts", "Alerts", "Watchlist", "Req/h"
    );
    for tier in Tier::ALL {
        let config = tier.config();
        println!(
            "{:<6} {:>7} {:>8} {:>11} {:>7} {:>7} {:>10} {:>6}",
            config.name,
            format!("${}", config.price),
            config.symbols,
            config.timeframes,
            config.chart_combinations,
            config.max_alerts,
            config.max_watchlist_items,
            config.rate_limit,
        );
    }
}

impl TierArgs {
    pub fn list_symbols(&self) {
        let symbols = EntitlementResolver::new().accessible_symbols(self.tier);
        println!("{} symbols ({}):", self.tier.display_name(), symbols.len());
        for symbol in symbols {
            println!("  {symbol}");
        }
        print_upgrades(self.tier);
    }

    pub fn list_timeframes(&self) {
        let timeframes = EntitlementResolver::new().accessible_timeframes(self.tier);
        println!("{} timeframes ({}):", self.tier.display_name(), timeframes.len());
        for &timeframe in timeframes {
            println!("  {:<4} {}", timeframe, timeframe_label(timeframe).unwrap_or(""));
        }
        print_upgrades(self.tier);
    }
}

fn print_upgrades(tier: Tier) {
    let path = upgrade_path(tier);
    if !path.is_empty() {
        let names: Vec<_> = path.iter().map(Tier::as_str).collect();
        println!("Upgrade to {} for more", names.join(", "));
    }
}
