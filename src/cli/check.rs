//! Access and quota check commands

use crate::entitlement::{AccessDecision, EntitlementResolver, QuotaKind, UpgradeInfo};
use crate::tier::Tier;
use clap::{Args, ValueEnum};
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Tier name (FREE or PRO)
    #[arg(value_parser = super::parse_tier)]
    pub tier: Tier,

    /// Instrument code, e.g. EURUSD
    pub symbol: String,

    /// Timeframe code, e.g. H4; checks the symbol alone when omitted
    pub timeframe: Option<String>,
}

impl CheckArgs {
    /// Decision text, with upgrade details on a denial
    pub fn render(&self) -> anyhow::Result<String> {
        let resolver = EntitlementResolver::new();
        let decision = match &self.timeframe {
            Some(timeframe) => resolver.check_chart_access(self.tier, &self.symbol, timeframe),
            None => resolver.check_symbol(self.tier, &self.symbol),
        };

        let mut out = String::new();
        match &decision {
            AccessDecision::Allow => writeln!(out, "ALLOW")?,
            AccessDecision::Deny(reason) => {
                writeln!(out, "DENY: {reason}")?;
                if let Some(info) = decision
                    .required_tier()
                    .and_then(|required| UpgradeInfo::between(self.tier, required))
                {
                    writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
                }
            }
        }
        Ok(out)
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }
}

/// Quota resource as named on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaArg {
    Alerts,
    Watchlist,
    Requests,
}

impl From<QuotaArg> for QuotaKind {
    fn from(arg: QuotaArg) -> Self {
        match arg {
            QuotaArg::Alerts => QuotaKind::Alerts,
            QuotaArg::Watchlist => QuotaKind::WatchlistItems,
            QuotaArg::Requests => QuotaKind::HourlyRequests,
        }
    }
}

#[derive(Args, Debug)]
pub struct QuotaArgs {
    /// Tier name (FREE or PRO)
    #[arg(value_parser = super::parse_tier)]
    pub tier: Tier,

    /// Resource to check
    #[arg(value_enum)]
    pub kind: QuotaArg,

    /// Items currently held
    pub count: usize,
}

impl QuotaArgs {
    pub fn render(&self) -> String {
        let decision = EntitlementResolver::new().check_quota(self.tier, self.kind.into(), self.count);
        let outcome = if decision.is_allowed() { "ALLOW" } else { "DENY" };
        format!(
            "{outcome}: {} {} used, {} remaining",
            decision.kind.as_str(),
            decision.usage(),
            decision.remaining()
        )
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        println!("{}", self.render());
        Ok(())
    }
}
