//! Subscription tiers
//!
//! The closed set of tiers, the symbol and timeframe catalog, and the
//! per-tier configuration table.

mod catalog;
mod config;
mod types;

pub(crate) use catalog::{symbols_for, timeframes_for};
pub use catalog::{
    timeframe_label, FREE_SYMBOLS, FREE_TIMEFRAMES, PRO_EXCLUSIVE_SYMBOLS,
    PRO_EXCLUSIVE_TIMEFRAMES, PRO_SYMBOLS, PRO_TIMEFRAMES,
};
pub use config::{tier_config_for, TierConfig};
pub use types::TierError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    /// 5 symbols, 3 timeframes, no charge
    Free,
    /// 15 symbols, 9 timeframes, paid monthly
    Pro,
}

impl Tier {
    /// Every tier, lowest rank first
    pub const ALL: [Tier; 2] = [Tier::Free, Tier::Pro];

    /// Canonical persisted form
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "FREE",
            Tier::Pro => "PRO",
        }
    }

    /// Label shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Pro => "Pro",
        }
    }

    /// Numeric rank, higher grants more
    pub fn rank(&self) -> u8 {
        match self {
            Tier::Free => 0,
            Tier::Pro => 1,
        }
    }

    /// Whether this tier is billed
    pub fn is_paid(&self) -> bool {
        matches!(self, Tier::Pro)
    }

    /// Configuration record for this tier
    pub fn config(&self) -> TierConfig {
        TierConfig::for_tier(*self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = TierError;

    /// Parse a persisted tier value. Only the exact upper-case names are
    /// accepted; anything else is rejected here rather than deeper in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FREE" => Ok(Tier::Free),
            "PRO" => Ok(Tier::Pro),
            other => Err(TierError::InvalidTier {
                value: other.to_string(),
            }),
        }
    }
}
