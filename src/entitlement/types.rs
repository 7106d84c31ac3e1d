//! Entitlement decision types

use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of an access check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// Access granted
    Allow,
    /// Access refused
    Deny(DenyReason),
}

impl AccessDecision {
    /// Whether access was granted
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Tier that would grant the refused resource, if any does
    pub fn required_tier(&self) -> Option<Tier> {
        match self {
            AccessDecision::Deny(reason) => reason.required_tier(),
            AccessDecision::Allow => None,
        }
    }
}

/// Reason an access check was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenyReason {
    /// Symbol is not offered on any tier
    UnknownSymbol(String),
    /// Timeframe is not offered on any tier
    UnknownTimeframe(String),
    /// Symbol exists but needs a higher tier
    SymbolRequiresUpgrade {
        symbol: String,
        current: Tier,
        required: Tier,
    },
    /// Timeframe exists but needs a higher tier
    TimeframeRequiresUpgrade {
        timeframe: String,
        current: Tier,
        required: Tier,
    },
}

impl DenyReason {
    /// Tier that would grant access, if any
    pub fn required_tier(&self) -> Option<Tier> {
        match self {
            DenyReason::SymbolRequiresUpgrade { required, .. }
            | DenyReason::TimeframeRequiresUpgrade { required, .. } => Some(*required),
            DenyReason::UnknownSymbol(_) | DenyReason::UnknownTimeframe(_) => None,
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::UnknownSymbol(symbol) => write!(f, "{symbol} is not a valid symbol"),
            DenyReason::UnknownTimeframe(timeframe) => {
                write!(f, "{timeframe} is not a valid timeframe")
            }
            DenyReason::SymbolRequiresUpgrade {
                symbol,
                current,
                required,
            } => write!(
                f,
                "{current} tier cannot access {symbol}. Upgrade to {required} for access to all {} symbols.",
                required.config().symbols
            ),
            DenyReason::TimeframeRequiresUpgrade {
                timeframe,
                current,
                required,
            } => write!(
                f,
                "{current} tier cannot access {timeframe} timeframe. Upgrade to {required} for access to all {} timeframes.",
                required.config().timeframes
            ),
        }
    }
}

/// Countable resource with a per-tier ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaKind {
    /// Concurrent alerts
    Alerts,
    /// Watchlist items
    WatchlistItems,
    /// Requests in the current hour
    HourlyRequests,
}

impl QuotaKind {
    /// Metric/log label
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotaKind::Alerts => "alerts",
            QuotaKind::WatchlistItems => "watchlist_items",
            QuotaKind::HourlyRequests => "hourly_requests",
        }
    }
}

/// Outcome of a quota check, with usage for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaDecision {
    /// Resource checked
    pub kind: QuotaKind,
    /// Items already held
    pub current: usize,
    /// Ceiling for the tier
    pub limit: usize,
}

impl QuotaDecision {
    /// One more item may be added
    pub fn is_allowed(&self) -> bool {
        self.current < self.limit
    }

    /// Items that may still be added
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.current)
    }

    /// `current/limit` usage string
    pub fn usage(&self) -> String {
        format!("{}/{}", self.current, self.limit)
    }
}
