//! Token storage

use super::{IssuedToken, TokenError, TokenKind};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Persistence for single-use tokens
pub trait TokenStore: Send + Sync {
    /// Record `token` for `subject`, replacing any earlier token of the same
    /// kind for that subject
    fn issue(&self, subject: Uuid, token: &IssuedToken);

    /// Redeem a token, returning its subject.
    ///
    /// Must check validity and clear the token as one atomic step, so a
    /// token redeems at most once. An expired token is cleared too.
    fn consume(&self, kind: TokenKind, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError>;
}

#[derive(Debug, Clone)]
struct Entry {
    subject: Uuid,
    expires_at: Option<DateTime<Utc>>,
}

/// Mutex-guarded in-process store
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    tokens: Mutex<HashMap<(TokenKind, String), Entry>>,
}

impl InMemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outstanding tokens
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no tokens are outstanding
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every token that has lapsed at `now`, returning how many
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut tokens = self.lock();
        let before = tokens.len();
        sweep_expired(&mut tokens, now);
        before - tokens.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(TokenKind, String), Entry>> {
        self.tokens.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for InMemoryTokenStore {
    fn issue(&self, subject: Uuid, token: &IssuedToken) {
        let mut tokens = self.lock();
        tokens.retain(|(kind, _), entry| !(*kind == token.kind && entry.subject == subject));
        tokens.insert(
            (token.kind, token.value.clone()),
            Entry {
                subject,
                expires_at: token.expires_at,
            },
        );
        tracing::debug!(%subject, kind = ?token.kind, "Token issued");
    }

    fn consume(&self, kind: TokenKind, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError> {
        let entry = {
            let mut tokens = self.lock();
            let entry = tokens.remove(&(kind, token.to_string()));
            sweep_expired(&mut tokens, now);
            entry
        }
        .ok_or(TokenError::InvalidToken)?;

        if entry.expires_at.is_some_and(|expires_at| now >= expires_at) {
            tracing::debug!(subject = %entry.subject, ?kind, "Expired token presented");
            return Err(TokenError::ExpiredToken);
        }
        Ok(entry.subject)
    }
}

fn sweep_expired(tokens: &mut HashMap<(TokenKind, String), Entry>, now: DateTime<Utc>) {
    tokens.retain(|_, entry| !entry.expires_at.is_some_and(|expires_at| now >= expires_at));
}
