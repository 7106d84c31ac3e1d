//! Configuration types for tier-gate

use crate::pricing::AffiliateConfig;
use crate::telemetry::LogFormat;
use crate::trial::TrialPolicy;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub trial: TrialConfig,
    #[serde(default)]
    pub tokens: TokenConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Affiliate pricing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Discount for referred customers, in percent
    #[serde(default = "default_percent")]
    pub discount_percent: Decimal,

    /// Commission paid to affiliates, in percent
    #[serde(default = "default_percent")]
    pub commission_percent: Decimal,

    /// How long a fetched value is served before refetching (seconds)
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_percent() -> Decimal {
    Decimal::new(20, 0)
}
fn default_refresh_interval_secs() -> u64 {
    300
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount_percent: default_percent(),
            commission_percent: default_percent(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

/// Trial configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrialConfig {
    /// Length of the PRO trial
    #[serde(default = "default_trial_days")]
    pub duration_days: i64,
}

/// Longest trial the config accepts
pub const MAX_TRIAL_DAYS: i64 = 365;

fn default_trial_days() -> i64 {
    7
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            duration_days: default_trial_days(),
        }
    }
}

impl TrialConfig {
    /// Trial policy for these settings
    pub fn policy(&self) -> TrialPolicy {
        TrialPolicy::days(self.duration_days)
    }
}

/// Account token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Password-reset token lifetime (seconds)
    #[serde(default = "default_reset_token_ttl_secs")]
    pub reset_token_ttl_secs: i64,
}

/// Longest reset-token lifetime the config accepts: one week
pub const MAX_RESET_TOKEN_TTL_SECS: i64 = 7 * 86_400;

fn default_reset_token_ttl_secs() -> i64 {
    3600
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            reset_token_ttl_secs: default_reset_token_ttl_secs(),
        }
    }
}

impl TokenConfig {
    /// Reset token lifetime. Values too large for a `Duration` saturate.
    pub fn reset_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.reset_token_ttl_secs).unwrap_or(chrono::Duration::MAX)
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus listener port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the crate cannot use
    pub fn validate(&self) -> anyhow::Result<()> {
        AffiliateConfig::new(self.pricing.discount_percent, self.pricing.commission_percent)?;
        anyhow::ensure!(
            (1..=MAX_TRIAL_DAYS).contains(&self.trial.duration_days),
            "trial.duration_days must be between 1 and {}, got {}",
            MAX_TRIAL_DAYS,
            self.trial.duration_days
        );
        anyhow::ensure!(
            (1..=MAX_RESET_TOKEN_TTL_SECS).contains(&self.tokens.reset_token_ttl_secs),
            "tokens.reset_token_ttl_secs must be between 1 and {}, got {}",
            MAX_RESET_TOKEN_TTL_SECS,
            self.tokens.reset_token_ttl_secs
        );
        Ok(())
    }
}
