//! Prometheus metrics

use crate::entitlement::QuotaKind;
use crate::tier::Tier;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Symbol/timeframe access decisions
    AccessCheck,
    /// Quota decisions
    QuotaCheck,
    /// Failed affiliate config fetches
    ConfigFetchFailure,
}

impl CounterMetric {
    fn name(&self) -> &'static str {
        match self {
            CounterMetric::AccessCheck => "tiergate_access_checks_total",
            CounterMetric::QuotaCheck => "tiergate_quota_checks_total",
            CounterMetric::ConfigFetchFailure => "tiergate_config_fetch_failures_total",
        }
    }
}

fn outcome(allowed: bool) -> &'static str {
    if allowed {
        "allowed"
    } else {
        "denied"
    }
}

/// Count an access decision
pub fn record_access_check(tier: Tier, allowed: bool) {
    ::metrics::counter!(
        CounterMetric::AccessCheck.name(),
        "tier" => tier.as_str(),
        "outcome" => outcome(allowed)
    )
    .increment(1);
}

/// Count a quota decision
pub fn record_quota_check(tier: Tier, kind: QuotaKind, allowed: bool) {
    ::metrics::counter!(
        CounterMetric::QuotaCheck.name(),
        "tier" => tier.as_str(),
        "kind" => kind.as_str(),
        "outcome" => outcome(allowed)
    )
    .increment(1);
}

/// Count a failed config fetch
pub fn record_config_fetch_failure() {
    ::metrics::counter!(CounterMetric::ConfigFetchFailure.name()).increment(1);
}

/// Serve metrics over HTTP on `port`
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()?;
    tracing::info!(port, "Prometheus exporter listening");
    Ok(())
}
