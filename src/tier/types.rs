//! Tier errors

use thiserror::Error;

/// Errors raised at the tier boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierError {
    /// Value is not one of the recognized tiers
    #[error("Invalid tier: {value}. Valid tiers are: FREE, PRO")]
    InvalidTier { value: String },
}
