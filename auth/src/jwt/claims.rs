use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Claims carried inside a session token.
///
/// Timestamps are Unix seconds, using the registered `iat`/`exp` names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account the token was issued to
    pub account_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an account, valid for `validity` from `issued_at`.
    pub fn for_account(account_id: i64, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            account_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + validity).timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    ///
    /// A token is no longer valid at the exact second it expires.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

/// Identity and expiry recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub account_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl TryFrom<Claims> for TokenPayload {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or_else(|| {
            TokenError::Malformed(format!("exp claim out of range: {}", claims.exp))
        })?;

        Ok(Self {
            account_id: claims.account_id,
            expires_at,
        })
    }
}
