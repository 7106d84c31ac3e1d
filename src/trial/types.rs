//! Trial errors

use crate::tier::TierError;
use thiserror::Error;

/// Trial lifecycle errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrialError {
    /// Account already had a trial
    #[error("Trial already used")]
    AlreadyUsed,
    /// Account already pays for PRO
    #[error("Account already has a paid subscription")]
    AlreadySubscribed,
    /// Trial expiry would fall outside the supported calendar
    #[error("Trial duration is out of range")]
    DurationOutOfRange,
    /// Persisted tier value is not recognized
    #[error(transparent)]
    InvalidTier(#[from] TierError),
}
