//! Per-tier configuration table

use super::{symbols_for, timeframes_for, Tier, TierError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Limits and pricing for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    /// Tier this record describes
    pub tier: Tier,
    /// Display name
    pub name: &'static str,
    /// Monthly price in USD
    pub price: Decimal,
    /// Number of accessible symbols
    pub symbols: usize,
    /// Number of accessible timeframes
    pub timeframes: usize,
    /// symbols × timeframes
    pub chart_combinations: usize,
    /// Maximum concurrent alerts
    pub max_alerts: usize,
    /// Maximum watchlist items
    pub max_watchlist_items: usize,
    /// Requests per hour
    pub rate_limit: u32,
}

impl TierConfig {
    /// Configuration for a tier.
    ///
    /// | Tier | Price | Symbols | Timeframes | Alerts | Watchlist | Req/h |
    /// |------|-------|---------|------------|--------|-----------|-------|
    /// | FREE | $0    | 5       | 3          | 5      | 5         | 60    |
    /// | PRO  | $29   | 15      | 9          | 20     | 50        | 300   |
    ///
    /// Counts come from the catalog, so they cannot drift from the
    /// accessible sets.
    pub fn for_tier(tier: Tier) -> Self {
        let symbols = symbols_for(tier).len();
        let timeframes = timeframes_for(tier).len();
        let (price, max_alerts, max_watchlist_items, rate_limit) = match tier {
            Tier::Free => (dec!(0), 5, 5, 60),
            Tier::Pro => (dec!(29), 20, 50, 300),
        };

        Self {
            tier,
            name: tier.as_str(),
            price,
            symbols,
            timeframes,
            chart_combinations: symbols * timeframes,
            max_alerts,
            max_watchlist_items,
            rate_limit,
        }
    }

    /// Check the record against the catalog it was derived from
    pub fn validate(&self) -> bool {
        self.symbols == symbols_for(self.tier).len()
            && self.timeframes == timeframes_for(self.tier).len()
            && self.chart_combinations == self.symbols * self.timeframes
    }
}

/// Look up a tier configuration from an untyped tier value
pub fn tier_config_for(value: &str) -> Result<TierConfig, TierError> {
    let tier: Tier = value.parse()?;
    Ok(TierConfig::for_tier(tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_config() {
        let config = TierConfig::for_tier(Tier::Free);
        assert_eq!(config.name, "FREE");
        assert_eq!(config.price, dec!(0));
        assert_eq!(config.symbols, 5);
        assert_eq!(config.timeframes, 3);
        assert_eq!(config.chart_combinations, 15);
        assert_eq!(config.max_alerts, 5);
        assert_eq!(config.max_watchlist_items, 5);
        assert_eq!(config.rate_limit, 60);
    }

    #[test]
    fn test_pro_config() {
        let config = TierConfig::for_tier(Tier::Pro);
        assert_eq!(config.name, "PRO");
        assert_eq!(config.price, dec!(29));
        assert_eq!(config.symbols, 15);
        assert_eq!(config.timeframes, 9);
        assert_eq!(config.chart_combinations, 135);
        assert_eq!(config.max_alerts, 20);
        assert_eq!(config.max_watchlist_items, 50);
        assert_eq!(config.rate_limit, 300);
    }

    #[test]
    fn test_every_config_validates() {
        for tier in Tier::ALL {
            assert!(tier.config().validate(), "{tier} config out of sync");
        }
    }

    #[test]
    fn test_validate_catches_drift() {
        let mut config = TierConfig::for_tier(Tier::Free);
        config.chart_combinations = 16;
        assert!(!config.validate());
    }

    #[test]
    fn test_lookup_by_string() {
        assert_eq!(tier_config_for("PRO").unwrap().tier, Tier::Pro);
        let err = tier_config_for("BOGUS").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid tier: BOGUS. Valid tiers are: FREE, PRO"
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(TierConfig::for_tier(Tier::Free)).unwrap();
        assert_eq!(json["chartCombinations"], 15);
        assert_eq!(json["maxWatchlistItems"], 5);
        assert_eq!(json["tier"], "FREE");
    }
}
