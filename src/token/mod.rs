//! Single-use account tokens
//!
//! Password-reset and email-verification tokens. Generation lives here;
//! persistence sits behind `TokenStore`, whose `consume` must check and
//! clear in one step.

mod store;
mod types;

pub use store::{InMemoryTokenStore, TokenStore};
pub use types::TokenError;

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Random bytes in a reset token
pub const RESET_TOKEN_BYTES: usize = 32;
/// Random bytes in a verification token
pub const VERIFICATION_TOKEN_BYTES: usize = 16;

/// Purpose of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Password reset, short-lived
    PasswordReset,
    /// Email verification, no expiry
    EmailVerification,
}

/// A freshly generated token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub kind: TokenKind,
    /// Hex-encoded secret
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl IssuedToken {
    /// Whether the token has lapsed at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Generate a password-reset token valid for `ttl` from `now`
pub fn generate_reset_token(now: DateTime<Utc>, ttl: Duration) -> IssuedToken {
    IssuedToken {
        kind: TokenKind::PasswordReset,
        value: random_hex(RESET_TOKEN_BYTES),
        expires_at: Some(now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)),
    }
}

/// Generate an email-verification token
pub fn generate_verification_token() -> IssuedToken {
    IssuedToken {
        kind: TokenKind::EmailVerification,
        value: random_hex(VERIFICATION_TOKEN_BYTES),
        expires_at: None,
    }
}

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
