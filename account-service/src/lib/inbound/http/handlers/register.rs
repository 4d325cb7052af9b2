use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::IdentifierError;
use crate::account::models::Identifier;
use crate::account::models::RegisterCommand;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .account_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::acknowledge(StatusCode::CREATED, "Register Success"))
}

/// HTTP request body for registering an account (raw JSON)
///
/// A missing `email` is treated like an empty one so both are rejected
/// with the same validation error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    img_url: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, IdentifierError> {
        let identifier = Identifier::new(self.email)?;
        let profile_uri = self.img_url.filter(|uri| !uri.is_empty());
        Ok(RegisterCommand::new(identifier, self.password, profile_uri))
    }
}
