//! Trial elevation state machine
//!
//! NONE -> TRIALING -> {CONVERTED, EXPIRED}. Expiry is never pushed by a
//! background job: it is resolved against the caller's clock on read.

use super::TrialError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the no-cost PRO grant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialPolicy {
    /// How long PRO access lasts
    pub duration: Duration,
}

impl TrialPolicy {
    /// Trial lasting the given number of days. Counts too large for a
    /// `Duration` saturate.
    pub fn days(days: i64) -> Self {
        Self {
            duration: Duration::try_days(days).unwrap_or(Duration::MAX),
        }
    }
}

impl Default for TrialPolicy {
    fn default() -> Self {
        Self::days(7)
    }
}

/// Where an account is in its trial lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrialState {
    /// Never trialed
    None,
    /// PRO access until `expires_at`
    Trialing { expires_at: DateTime<Utc> },
    /// Paid subscription attached before expiry
    Converted {
        expires_at: DateTime<Utc>,
        converted_at: DateTime<Utc>,
    },
    /// Ran out with no subscription
    Expired { expires_at: DateTime<Utc> },
}

impl TrialState {
    /// Begin a trial at `now`
    pub fn start(&self, now: DateTime<Utc>, policy: &TrialPolicy) -> Result<Self, TrialError> {
        match self {
            TrialState::None => {
                let expires_at = now
                    .checked_add_signed(policy.duration)
                    .ok_or(TrialError::DurationOutOfRange)?;
                Ok(TrialState::Trialing { expires_at })
            }
            _ => Err(TrialError::AlreadyUsed),
        }
    }

    /// State as observed at `now`. A trial whose expiry has been reached
    /// reads as expired.
    pub fn resolve(&self, now: DateTime<Utc>) -> Self {
        match *self {
            TrialState::Trialing { expires_at } if now >= expires_at => {
                TrialState::Expired { expires_at }
            }
            other => other,
        }
    }

    /// Attach a paid subscription at `now`. Converts a live trial; any other
    /// state is left as it reads at `now`.
    pub fn convert(&self, now: DateTime<Utc>) -> Self {
        match self.resolve(now) {
            TrialState::Trialing { expires_at } => TrialState::Converted {
                expires_at,
                converted_at: now,
            },
            other => other,
        }
    }

    /// Whether the trial grants PRO at `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        matches!(self.resolve(now), TrialState::Trialing { .. })
    }

    /// Whole days of trial left at `now`, rounded up
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        match self.resolve(now) {
            TrialState::Trialing { expires_at } => {
                let left = expires_at - now;
                let days = left.num_days();
                if left > Duration::days(days) {
                    Some(days + 1)
                } else {
                    Some(days)
                }
            }
            _ => None,
        }
    }

    /// Persisted expiry instant, if a trial was ever granted
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match *self {
            TrialState::None => None,
            TrialState::Trialing { expires_at }
            | TrialState::Converted { expires_at, .. }
            | TrialState::Expired { expires_at } => Some(expires_at),
        }
    }
}
