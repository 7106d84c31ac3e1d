//! Entitlement resolver
//!
//! Stateless lookups over the tier table. Every symbol, timeframe and quota
//! gate goes through here.

use super::{AccessDecision, DenyReason, QuotaDecision, QuotaKind};
use crate::telemetry;
use crate::tier::{symbols_for, timeframes_for, Tier, TierConfig, TierError};

/// Answers what a tier may access
#[derive(Debug, Clone, Copy, Default)]
pub struct EntitlementResolver;

impl EntitlementResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Configuration record for a tier
    pub fn tier_config(&self, tier: Tier) -> TierConfig {
        TierConfig::for_tier(tier)
    }

    /// Ordered symbol codes for a tier
    pub fn accessible_symbols(&self, tier: Tier) -> &'static [&'static str] {
        symbols_for(tier)
    }

    /// Ordered timeframe codes for a tier
    pub fn accessible_timeframes(&self, tier: Tier) -> &'static [&'static str] {
        timeframes_for(tier)
    }

    /// Symbol codes for an untyped tier value
    pub fn accessible_symbols_by_name(
        &self,
        tier: &str,
    ) -> Result<&'static [&'static str], TierError> {
        Ok(self.accessible_symbols(tier.parse()?))
    }

    /// Timeframe codes for an untyped tier value
    pub fn accessible_timeframes_by_name(
        &self,
        tier: &str,
    ) -> Result<&'static [&'static str], TierError> {
        Ok(self.accessible_timeframes(tier.parse()?))
    }

    /// Number of (symbol, timeframe) pairs a tier can chart
    pub fn chart_combinations(&self, tier: Tier) -> usize {
        self.accessible_symbols(tier).len() * self.accessible_timeframes(tier).len()
    }

    /// Whether the symbol is in the tier's accessible set
    pub fn is_symbol_accessible(&self, tier: Tier, symbol: &str) -> bool {
        self.accessible_symbols(tier).iter().any(|&s| s == symbol)
    }

    /// Whether the timeframe is in the tier's accessible set
    pub fn is_timeframe_accessible(&self, tier: Tier, timeframe: &str) -> bool {
        self.accessible_timeframes(tier).iter().any(|&t| t == timeframe)
    }

    /// Check a symbol, explaining a refusal
    pub fn check_symbol(&self, tier: Tier, symbol: &str) -> AccessDecision {
        if self.is_symbol_accessible(tier, symbol) {
            return AccessDecision::Allow;
        }

        let reason = match lowest_tier_where(|t| self.is_symbol_accessible(t, symbol)) {
            Some(required) => DenyReason::SymbolRequiresUpgrade {
                symbol: symbol.to_string(),
                current: tier,
                required,
            },
            None => DenyReason::UnknownSymbol(symbol.to_string()),
        };
        AccessDecision::Deny(reason)
    }

    /// Check a timeframe, explaining a refusal
    pub fn check_timeframe(&self, tier: Tier, timeframe: &str) -> AccessDecision {
        if self.is_timeframe_accessible(tier, timeframe) {
            return AccessDecision::Allow;
        }

        let reason = match lowest_tier_where(|t| self.is_timeframe_accessible(t, timeframe)) {
            Some(required) => DenyReason::TimeframeRequiresUpgrade {
                timeframe: timeframe.to_string(),
                current: tier,
                required,
            },
            None => DenyReason::UnknownTimeframe(timeframe.to_string()),
        };
        AccessDecision::Deny(reason)
    }

    /// Check a chart (symbol first, then timeframe)
    pub fn check_chart_access(&self, tier: Tier, symbol: &str, timeframe: &str) -> AccessDecision {
        let decision = match self.check_symbol(tier, symbol) {
            AccessDecision::Allow => self.check_timeframe(tier, timeframe),
            denied => denied,
        };

        if let AccessDecision::Deny(ref reason) = decision {
            tracing::debug!(%tier, symbol, timeframe, %reason, "Chart access denied");
        }
        telemetry::record_access_check(tier, decision.is_allowed());
        decision
    }

    /// Check whether one more item of `kind` may be added.
    ///
    /// Allowed only while `current < limit`; at the limit the next item is
    /// refused.
    pub fn check_quota(&self, tier: Tier, kind: QuotaKind, current: usize) -> QuotaDecision {
        let config = self.tier_config(tier);
        let limit = match kind {
            QuotaKind::Alerts => config.max_alerts,
            QuotaKind::WatchlistItems => config.max_watchlist_items,
            QuotaKind::HourlyRequests => config.rate_limit as usize,
        };

        let decision = QuotaDecision {
            kind,
            current,
            limit,
        };
        if !decision.is_allowed() {
            tracing::debug!(%tier, kind = kind.as_str(), current, limit, "Quota reached");
        }
        telemetry::record_quota_check(tier, kind, decision.is_allowed());
        decision
    }

    /// Check the hourly request budget
    pub fn check_rate_limit(&self, tier: Tier, requests_this_hour: usize) -> QuotaDecision {
        self.check_quota(tier, QuotaKind::HourlyRequests, requests_this_hour)
    }
}

fn lowest_tier_where(mut grants: impl FnMut(Tier) -> bool) -> Option<Tier> {
    Tier::ALL.into_iter().find(|&tier| grants(tier))
}
