//! Trial scenario command

use crate::tier::Tier;
use crate::trial::{Account, TrialPolicy};
use chrono::{DateTime, Utc};
use clap::Args;
use std::fmt::Write;
use uuid::Uuid;

#[derive(Args, Debug)]
pub struct TrialArgs {
    /// When the trial was granted (RFC 3339)
    #[arg(long)]
    pub granted_at: DateTime<Utc>,

    /// Instant to evaluate at (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Attach a paid subscription at the evaluation instant
    #[arg(long)]
    pub subscribed: bool,
}

impl TrialArgs {
    /// Trial state and effective tier at the evaluation instant
    pub fn render(&self, policy: &TrialPolicy) -> anyhow::Result<String> {
        let at = self.at.unwrap_or_else(Utc::now);

        let mut account = Account::new(Uuid::new_v4(), Tier::Free);
        account.start_trial(self.granted_at, policy)?;
        if self.subscribed {
            account.attach_subscription(at);
        }

        let state = account.trial_state(at);
        let mut out = String::new();
        writeln!(out, "Evaluated at:   {}", at.to_rfc3339())?;
        writeln!(out, "Trial state:    {}", serde_json::to_string(&state)?)?;
        if let Some(days) = state.days_remaining(at) {
            writeln!(out, "Days remaining: {days}")?;
        }
        writeln!(out, "Effective tier: {}", account.effective_tier(at))?;
        writeln!(
            out,
            "Persisted:      {}",
            serde_json::to_string(&account.to_persisted(at))?
        )?;
        Ok(out)
    }

    pub fn execute(&self, policy: &TrialPolicy) -> anyhow::Result<()> {
        print!("{}", self.render(policy)?);
        Ok(())
    }
}
