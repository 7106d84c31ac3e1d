//! Symbol and timeframe catalog
//!
//! PRO sets are built from the FREE sets followed by the PRO-exclusive
//! codes, so every FREE code stays reachable on PRO.

use super::Tier;

/// Symbols available on the FREE tier, in display order
pub const FREE_SYMBOLS: [&str; 5] = [
    "BTCUSD", // Bitcoin
    "EURUSD", // Euro / US Dollar
    "USDJPY", // US Dollar / Japanese Yen
    "US30",   // Dow Jones Industrial Average
    "XAUUSD", // Gold
];

/// Symbols only available on PRO
pub const PRO_EXCLUSIVE_SYMBOLS: [&str; 10] = [
    "AUDJPY", // Australian Dollar / Japanese Yen
    "AUDUSD", // Australian Dollar / US Dollar
    "ETHUSD", // Ethereum
    "GBPJPY", // British Pound / Japanese Yen
    "GBPUSD", // British Pound / US Dollar
    "NDX100", // Nasdaq 100
    "NZDUSD", // New Zealand Dollar / US Dollar
    "USDCAD", // US Dollar / Canadian Dollar
    "USDCHF", // US Dollar / Swiss Franc
    "XAGUSD", // Silver
];

/// All PRO symbols: FREE first, then PRO-exclusive
pub const PRO_SYMBOLS: [&str; 15] = concat(&FREE_SYMBOLS, &PRO_EXCLUSIVE_SYMBOLS);

/// Timeframes available on the FREE tier
pub const FREE_TIMEFRAMES: [&str; 3] = ["H1", "H4", "D1"];

/// Timeframes only available on PRO
pub const PRO_EXCLUSIVE_TIMEFRAMES: [&str; 6] = ["M5", "M15", "M30", "H2", "H8", "H12"];

/// All PRO timeframes: FREE first, then PRO-exclusive
pub const PRO_TIMEFRAMES: [&str; 9] = concat(&FREE_TIMEFRAMES, &PRO_EXCLUSIVE_TIMEFRAMES);

const fn concat<const A: usize, const B: usize, const C: usize>(
    head: &[&'static str; A],
    tail: &[&'static str; B],
) -> [&'static str; C] {
    assert!(A + B == C);
    let mut out = [""; C];
    let mut i = 0;
    while i < A {
        out[i] = head[i];
        i += 1;
    }
    let mut j = 0;
    while j < B {
        out[A + j] = tail[j];
        j += 1;
    }
    out
}

/// Ordered symbol codes accessible on a tier
pub(crate) fn symbols_for(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Free => &FREE_SYMBOLS,
        Tier::Pro => &PRO_SYMBOLS,
    }
}

/// Ordered timeframe codes accessible on a tier
pub(crate) fn timeframes_for(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Free => &FREE_TIMEFRAMES,
        Tier::Pro => &PRO_TIMEFRAMES,
    }
}

/// Human label for a timeframe code
pub fn timeframe_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "M5" => "5 Minutes",
        "M15" => "15 Minutes",
        "M30" => "30 Minutes",
        "H1" => "1 Hour",
        "H2" => "2 Hours",
        "H4" => "4 Hours",
        "H8" => "8 Hours",
        "H12" => "12 Hours",
        "D1" => "1 Day",
        _ => return None,
    };
    Some(label)
}
