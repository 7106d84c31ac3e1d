//! Token errors

use thiserror::Error;

/// Token consumption errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Unknown, malformed, or already used
    #[error("Invalid or expired token")]
    InvalidToken,
    /// Past its expiry
    #[error("Token has expired")]
    ExpiredToken,
}
