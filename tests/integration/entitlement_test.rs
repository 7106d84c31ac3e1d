//! Integration tests for tier entitlements

use std::collections::HashSet;
use tier_gate::entitlement::{AccessDecision, DenyReason, EntitlementResolver, QuotaKind};
use tier_gate::tier::{tier_config_for, Tier, TierError};

#[test]
fn test_chart_combinations_match_set_sizes() {
    let resolver = EntitlementResolver::new();
    for tier in Tier::ALL {
        let expected =
            resolver.accessible_symbols(tier).len() * resolver.accessible_timeframes(tier).len();
        assert_eq!(resolver.chart_combinations(tier), expected);
        assert_eq!(resolver.tier_config(tier).chart_combinations, expected);
        assert!(tier.config().validate());
    }
}

#[test]
fn test_free_sets_are_subsets_of_pro() {
    let resolver = EntitlementResolver::new();
    let pro_symbols: HashSet<_> = resolver.accessible_symbols(Tier::Pro).iter().collect();
    let pro_timeframes: HashSet<_> = resolver.accessible_timeframes(Tier::Pro).iter().collect();

    for symbol in resolver.accessible_symbols(Tier::Free) {
        assert!(pro_symbols.contains(symbol), "{symbol} missing from PRO");
    }
    for timeframe in resolver.accessible_timeframes(Tier::Free) {
        assert!(pro_timeframes.contains(timeframe), "{timeframe} missing from PRO");
    }
}

#[test]
fn test_set_sizes_without_duplicates() {
    let resolver = EntitlementResolver::new();
    let cases = [(Tier::Free, 5, 3), (Tier::Pro, 15, 9)];

    for (tier, symbols, timeframes) in cases {
        let symbol_set: HashSet<_> = resolver.accessible_symbols(tier).iter().collect();
        let timeframe_set: HashSet<_> = resolver.accessible_timeframes(tier).iter().collect();
        assert_eq!(resolver.accessible_symbols(tier).len(), symbols);
        assert_eq!(symbol_set.len(), symbols);
        assert_eq!(resolver.accessible_timeframes(tier).len(), timeframes);
        assert_eq!(timeframe_set.len(), timeframes);
    }
}

#[test]
fn test_unknown_tier_is_rejected_at_boundary() {
    let err = tier_config_for("BOGUS").unwrap_err();
    assert_eq!(
        err,
        TierError::InvalidTier {
            value: "BOGUS".to_string()
        }
    );
    let message = err.to_string();
    assert!(message.contains("BOGUS"));
    assert!(message.contains("FREE, PRO"));

    let resolver = EntitlementResolver::new();
    assert!(resolver.accessible_symbols_by_name("BOGUS").is_err());
    assert!(resolver.accessible_timeframes_by_name("BOGUS").is_err());
    assert_eq!(resolver.accessible_symbols_by_name("PRO").unwrap().len(), 15);
}

#[test]
fn test_alert_quota_boundary() {
    let resolver = EntitlementResolver::new();
    assert!(!resolver.check_quota(Tier::Free, QuotaKind::Alerts, 5).is_allowed());
    assert!(resolver.check_quota(Tier::Free, QuotaKind::Alerts, 4).is_allowed());
    assert!(resolver.check_quota(Tier::Pro, QuotaKind::Alerts, 5).is_allowed());
}

#[test]
fn test_accessors_are_deterministic() {
    let resolver = EntitlementResolver::new();
    for tier in Tier::ALL {
        assert_eq!(resolver.accessible_symbols(tier), resolver.accessible_symbols(tier));
        assert_eq!(resolver.accessible_timeframes(tier), resolver.accessible_timeframes(tier));
    }
}

#[test]
fn test_every_pro_chart_is_reachable() {
    let resolver = EntitlementResolver::new();
    let mut allowed = 0;
    for symbol in resolver.accessible_symbols(Tier::Pro) {
        for timeframe in resolver.accessible_timeframes(Tier::Pro) {
            if resolver.check_chart_access(Tier::Pro, symbol, timeframe).is_allowed() {
                allowed += 1;
            }
        }
    }
    assert_eq!(allowed, resolver.chart_combinations(Tier::Pro));
}

#[test]
fn test_free_user_denied_pro_chart_points_to_upgrade() {
    let resolver = EntitlementResolver::new();
    let decision = resolver.check_chart_access(Tier::Free, "GBPJPY", "M30");

    // Symbol is checked before timeframe
    match &decision {
        AccessDecision::Deny(DenyReason::SymbolRequiresUpgrade { symbol, .. }) => {
            assert_eq!(symbol, "GBPJPY");
        }
        other => panic!("unexpected decision: {other:?}"),
    }
    assert_eq!(decision.required_tier(), Some(Tier::Pro));
}
