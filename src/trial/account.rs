//! Account tier resolution

use super::{TrialError, TrialPolicy, TrialState};
use crate::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tier-related fields of a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account identifier
    pub id: Uuid,
    /// Tier held without any trial
    pub base_tier: Tier,
    /// Trial lifecycle
    pub trial: TrialState,
    /// When a paid subscription was attached
    pub subscribed_at: Option<DateTime<Utc>>,
}

/// Account fields as the storage layer keeps them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedAccount {
    pub id: Uuid,
    pub tier: String,
    pub trial_expires_at: Option<DateTime<Utc>>,
    pub subscribed_at: Option<DateTime<Utc>>,
}

impl Account {
    /// New account on `tier` with no trial
    pub fn new(id: Uuid, tier: Tier) -> Self {
        Self {
            id,
            base_tier: tier,
            trial: TrialState::None,
            subscribed_at: None,
        }
    }

    /// Rebuild from stored fields.
    ///
    /// A stored trial with no subscription means any PRO in the tier column
    /// came from the trial, so the base tier is FREE.
    pub fn from_persisted(stored: &PersistedAccount) -> Result<Self, TrialError> {
        let tier: Tier = stored.tier.parse()?;

        let trial = match (stored.trial_expires_at, stored.subscribed_at) {
            (None, _) => TrialState::None,
            (Some(expires_at), Some(converted_at)) if converted_at < expires_at => {
                TrialState::Converted {
                    expires_at,
                    converted_at,
                }
            }
            (Some(expires_at), _) => TrialState::Trialing { expires_at },
        };

        let base_tier = match (&trial, stored.subscribed_at) {
            (TrialState::None, _) | (_, Some(_)) => tier,
            _ => Tier::Free,
        };

        Ok(Self {
            id: stored.id,
            base_tier,
            trial,
            subscribed_at: stored.subscribed_at,
        })
    }

    /// Fields to write back, with the tier column set to the tier in force
    /// at `now`
    pub fn to_persisted(&self, now: DateTime<Utc>) -> PersistedAccount {
        PersistedAccount {
            id: self.id,
            tier: self.effective_tier(now).to_string(),
            trial_expires_at: self.trial.expires_at(),
            subscribed_at: self.subscribed_at,
        }
    }

    /// Grant the trial at `now`, returning its expiry
    pub fn start_trial(
        &mut self,
        now: DateTime<Utc>,
        policy: &TrialPolicy,
    ) -> Result<DateTime<Utc>, TrialError> {
        if self.subscribed_at.is_some() {
            return Err(TrialError::AlreadySubscribed);
        }

        let trial = self.trial.start(now, policy)?;
        self.trial = trial;

        let expires_at = trial.expires_at().unwrap_or(now);
        tracing::info!(account = %self.id, %expires_at, "Trial started");
        Ok(expires_at)
    }

    /// Record a paid subscription at `now`
    pub fn attach_subscription(&mut self, now: DateTime<Utc>) {
        self.subscribed_at = Some(now);
        self.trial = self.trial.convert(now);
        tracing::info!(account = %self.id, trial = ?self.trial, "Subscription attached");
    }

    /// Trial state as observed at `now`
    pub fn trial_state(&self, now: DateTime<Utc>) -> TrialState {
        self.trial.resolve(now)
    }

    /// Tier in force at `now`, evaluated on every call
    pub fn effective_tier(&self, now: DateTime<Utc>) -> Tier {
        if self.subscribed_at.is_some() {
            return Tier::Pro;
        }

        match self.trial.resolve(now) {
            TrialState::Trialing { .. } | TrialState::Converted { .. } => Tier::Pro,
            TrialState::Expired { .. } => Tier::Free,
            TrialState::None => self.base_tier,
        }
    }
}
