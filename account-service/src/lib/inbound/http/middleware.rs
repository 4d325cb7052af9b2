use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;

use crate::account::models::AccountId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated account in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// The request did not present a usable bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingToken {
    #[error("Missing Authorization header")]
    Absent,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    Malformed,
}

impl From<MissingToken> for ApiError {
    fn from(err: MissingToken) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

/// Middleware that validates session tokens and adds the account to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers()).map_err(|e| {
        tracing::debug!(reason = %e, "Request rejected before token verification");
        ApiError::from(e)
    })?;

    let payload = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(kind = e.kind(), error = %e, "Token verification failed");
        ApiError::InvalidToken(e.kind().to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedAccount {
        account_id: AccountId(payload.account_id),
    });

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The header must split on a single space into exactly two parts.
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, MissingToken> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(MissingToken::Absent)?
        .to_str()
        .map_err(|_| MissingToken::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(MissingToken::Malformed),
    }
}
