//! Integration tests for pricing and account tokens

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tier_gate::pricing::{
    discounted_price, AffiliateConfig, AffiliateConfigCache, AffiliateConfigSource,
};
use tier_gate::tier::Tier;
use tier_gate::token::{
    generate_reset_token, generate_verification_token, InMemoryTokenStore, TokenError, TokenKind,
    TokenStore,
};
use uuid::Uuid;

#[test]
fn test_discount_examples() {
    assert_eq!(discounted_price(dec!(29), dec!(20)), dec!(23.20));
    assert_eq!(discounted_price(dec!(99.999), dec!(0)), dec!(100.00));
}

#[test]
fn test_affiliate_price_for_pro_tier() {
    let config = AffiliateConfig::default();
    let price = config.discounted_price(Tier::Pro.config().price);
    assert_eq!(price, dec!(23.20));
    assert_eq!(config.commission(price), dec!(4.64));
}

/// Source whose value can be switched while the cache holds it
struct SwitchableSource {
    raised: Arc<AtomicBool>,
}

#[async_trait]
impl AffiliateConfigSource for SwitchableSource {
    async fn fetch(&self) -> anyhow::Result<AffiliateConfig> {
        let discount = if self.raised.load(Ordering::SeqCst) {
            dec!(30)
        } else {
            dec!(20)
        };
        Ok(AffiliateConfig::new(discount, dec!(20))?)
    }
}

#[test]
fn test_cache_picks_up_changed_value_after_invalidate() {
    tokio_test::block_on(async {
        let raised = Arc::new(AtomicBool::new(false));
        let source = SwitchableSource {
            raised: Arc::clone(&raised),
        };
        let cache = AffiliateConfigCache::new(source, std::time::Duration::from_secs(3600));
        assert_eq!(cache.get().await.discount_percent, dec!(20));

        // Served from cache until invalidated
        raised.store(true, Ordering::SeqCst);
        assert_eq!(cache.get().await.discount_percent, dec!(20));

        cache.invalidate().await;
        assert_eq!(cache.get().await.discount_percent, dec!(30));
    });
}

#[tokio::test]
async fn test_cache_refetches_when_interval_elapsed() {
    let raised = Arc::new(AtomicBool::new(false));
    let cache = AffiliateConfigCache::new(
        SwitchableSource {
            raised: Arc::clone(&raised),
        },
        std::time::Duration::ZERO,
    );
    assert_eq!(cache.get().await.discount_percent, dec!(20));

    raised.store(true, Ordering::SeqCst);
    assert_eq!(cache.get().await.discount_percent, dec!(30));
}

#[test]
fn test_reset_token_lifecycle() {
    let store = InMemoryTokenStore::new();
    let user = Uuid::new_v4();
    let now = Utc::now();
    let token = generate_reset_token(now, Duration::hours(1));
    assert_eq!(token.value.len(), 64);
    store.issue(user, &token);

    assert_eq!(
        store.consume(TokenKind::PasswordReset, &token.value, now + Duration::minutes(30)),
        Ok(user)
    );
    assert_eq!(
        store.consume(TokenKind::PasswordReset, &token.value, now + Duration::minutes(31)),
        Err(TokenError::InvalidToken)
    );
}

#[test]
fn test_expired_reset_token_errors_and_clears() {
    let store = InMemoryTokenStore::new();
    let now = Utc::now();
    let token = generate_reset_token(now, Duration::hours(1));
    store.issue(Uuid::new_v4(), &token);

    assert_eq!(
        store.consume(TokenKind::PasswordReset, &token.value, now + Duration::hours(1)),
        Err(TokenError::ExpiredToken)
    );
    assert!(store.is_empty());
}

#[test]
fn test_verification_token_shape() {
    let token = generate_verification_token();
    assert_eq!(token.value.len(), 32);
    assert!(token.value.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(!token.is_expired(Utc::now() + Duration::days(365)));
}
