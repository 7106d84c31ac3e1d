//! Shared affiliate configuration accessor
//!
//! The percentages belong to an external configuration store. Consumers read
//! them through one `AffiliateConfigCache`, which refetches once the cached
//! value is older than the refresh interval or after `invalidate`.

use super::AffiliateConfig;
use crate::config::PricingConfig;
use crate::telemetry;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Where the current affiliate configuration comes from
#[async_trait]
pub trait AffiliateConfigSource: Send + Sync {
    /// Fetch the current values
    async fn fetch(&self) -> anyhow::Result<AffiliateConfig>;
}

/// Serves fixed values from the configuration file
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    config: AffiliateConfig,
}

impl StaticConfigSource {
    /// Wrap a fixed configuration
    pub fn new(config: AffiliateConfig) -> Self {
        Self { config }
    }

    /// Validate and wrap the `[pricing]` section
    pub fn from_pricing(pricing: &PricingConfig) -> anyhow::Result<Self> {
        let config = AffiliateConfig::new(pricing.discount_percent, pricing.commission_percent)?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl AffiliateConfigSource for StaticConfigSource {
    async fn fetch(&self) -> anyhow::Result<AffiliateConfig> {
        Ok(self.config)
    }
}

#[derive(Debug, Clone, Copy)]
struct Cached {
    config: AffiliateConfig,
    fetched_at: Instant,
}

/// Caches the affiliate configuration with a refetch policy
pub struct AffiliateConfigCache<S> {
    source: S,
    refresh_interval: Duration,
    cached: Arc<RwLock<Option<Cached>>>,
}

impl<S: AffiliateConfigSource> AffiliateConfigCache<S> {
    /// Create a cache that refetches after `refresh_interval`
    pub fn new(source: S, refresh_interval: Duration) -> Self {
        Self {
            source,
            refresh_interval,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Current configuration.
    ///
    /// On fetch failure the last good value is served, or the defaults if
    /// nothing was ever fetched; either way the next fetch waits a full
    /// refresh interval.
    pub async fn get(&self) -> AffiliateConfig {
        if let Some(cached) = *self.cached.read().await {
            if cached.fetched_at.elapsed() < self.refresh_interval {
                return cached.config;
            }
        }

        let mut slot = self.cached.write().await;
        // Another caller may have refreshed while we waited for the lock
        if let Some(cached) = *slot {
            if cached.fetched_at.elapsed() < self.refresh_interval {
                return cached.config;
            }
        }

        let config = match self.source.fetch().await {
            Ok(config) => {
                tracing::debug!(
                    discount = %config.discount_percent,
                    commission = %config.commission_percent,
                    "Fetched affiliate config"
                );
                config
            }
            Err(e) => {
                telemetry::record_config_fetch_failure();
                let fallback = (*slot).map(|c| c.config).unwrap_or_default();
                tracing::warn!(error = %e, "Affiliate config fetch failed, serving fallback");
                fallback
            }
        };

        *slot = Some(Cached {
            config,
            fetched_at: Instant::now(),
        });
        config
    }

    /// Force the next `get` to refetch
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }
}
