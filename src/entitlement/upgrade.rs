//! Upgrade path between tiers

use crate::tier::Tier;
use rust_decimal::Decimal;
use serde::Serialize;

/// Whether moving from `current` to `target` is an upgrade
pub fn can_upgrade(current: Tier, target: Tier) -> bool {
    target.rank() > current.rank()
}

/// Tiers reachable by upgrading from `tier`, nearest first
pub fn upgrade_path(tier: Tier) -> Vec<Tier> {
    Tier::ALL
        .into_iter()
        .filter(|&target| can_upgrade(tier, target))
        .collect()
}

/// What an upgrade adds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeInfo {
    pub current_tier: Tier,
    pub target_tier: Tier,
    pub additional_symbols: usize,
    pub additional_timeframes: usize,
    pub additional_alerts: usize,
    pub additional_watchlist_items: usize,
    /// Monthly price of the target tier, not the difference
    pub price_per_month: Decimal,
}

impl UpgradeInfo {
    /// Describe the upgrade, or `None` if `target` is not above `current`
    pub fn between(current: Tier, target: Tier) -> Option<Self> {
        if !can_upgrade(current, target) {
            return None;
        }

        let from = current.config();
        let to = target.config();
        Some(Self {
            current_tier: current,
            target_tier: target,
            additional_symbols: to.symbols - from.symbols,
            additional_timeframes: to.timeframes - from.timeframes,
            additional_alerts: to.max_alerts - from.max_alerts,
            additional_watchlist_items: to.max_watchlist_items - from.max_watchlist_items,
            price_per_month: to.price,
        })
    }
}
