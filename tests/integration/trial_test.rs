//! Integration tests for the trial lifecycle

use chrono::{Duration, TimeZone, Utc};
use tier_gate::entitlement::EntitlementResolver;
use tier_gate::tier::Tier;
use tier_gate::trial::{Account, PersistedAccount, TrialError, TrialPolicy, TrialState};
use uuid::Uuid;

fn granted_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_trial_elevates_then_reverts() {
    let t = granted_at();
    let mut account = Account::new(Uuid::new_v4(), Tier::Free);
    account.start_trial(t, &TrialPolicy::default()).unwrap();

    assert_eq!(account.effective_tier(t + Duration::days(6)), Tier::Pro);
    assert_eq!(account.effective_tier(t + Duration::days(8)), Tier::Free);
}

#[test]
fn test_trial_user_gets_pro_entitlements() {
    let t = granted_at();
    let mut account = Account::new(Uuid::new_v4(), Tier::Free);
    account.start_trial(t, &TrialPolicy::default()).unwrap();

    let resolver = EntitlementResolver::new();
    let during = account.effective_tier(t + Duration::days(1));
    assert!(resolver.check_chart_access(during, "ETHUSD", "M5").is_allowed());

    let after = account.effective_tier(t + Duration::days(7));
    assert!(!resolver.check_chart_access(after, "ETHUSD", "M5").is_allowed());
}

#[test]
fn test_subscription_during_trial_keeps_pro() {
    let t = granted_at();
    let mut account = Account::new(Uuid::new_v4(), Tier::Free);
    account.start_trial(t, &TrialPolicy::default()).unwrap();
    account.attach_subscription(t + Duration::days(3));

    let later = t + Duration::days(30);
    assert_eq!(account.effective_tier(later), Tier::Pro);
    assert!(matches!(
        account.trial_state(later),
        TrialState::Converted { .. }
    ));
}

#[test]
fn test_second_trial_is_refused() {
    let t = granted_at();
    let mut account = Account::new(Uuid::new_v4(), Tier::Free);
    account.start_trial(t, &TrialPolicy::default()).unwrap();

    let result = account.start_trial(t + Duration::days(30), &TrialPolicy::default());
    assert_eq!(result, Err(TrialError::AlreadyUsed));
}

#[test]
fn test_persisted_round_trip_preserves_trial() {
    let t = granted_at();
    let mut account = Account::new(Uuid::new_v4(), Tier::Free);
    account.start_trial(t, &TrialPolicy::days(14)).unwrap();

    let stored = account.to_persisted(t + Duration::days(1));
    assert_eq!(stored.tier, "PRO");

    let json = serde_json::to_string(&stored).unwrap();
    let restored: PersistedAccount = serde_json::from_str(&json).unwrap();
    let reloaded = Account::from_persisted(&restored).unwrap();

    assert_eq!(reloaded.effective_tier(t + Duration::days(13)), Tier::Pro);
    assert_eq!(reloaded.effective_tier(t + Duration::days(15)), Tier::Free);
}

#[test]
fn test_persisted_unknown_tier_is_rejected() {
    let stored = PersistedAccount {
        id: Uuid::new_v4(),
        tier: "ENTERPRISE".to_string(),
        trial_expires_at: None,
        subscribed_at: None,
    };
    assert!(matches!(
        Account::from_persisted(&stored),
        Err(TrialError::InvalidTier(_))
    ));
}
