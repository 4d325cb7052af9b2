use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::account::errors::AccountError;
use crate::account::models::AccountId;
use crate::account::models::LoginCommand;
use crate::account::models::NewAccount;
use crate::account::models::RegisterCommand;
use crate::account::ports::AccountDirectory;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AuthenticationService<AD>
where
    AD: AccountDirectory,
{
    directory: Arc<AD>,
    authenticator: Arc<Authenticator>,
}

impl<AD> AuthenticationService<AD>
where
    AD: AccountDirectory,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Account persistence implementation
    /// * `authenticator` - Credential hashing and token issuance
    pub fn new(directory: Arc<AD>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }
}

#[async_trait]
impl<AD> AccountServicePort for AuthenticationService<AD>
where
    AD: AccountDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<AccountId, AccountError> {
        let credential_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::Credential(e.to_string()))?;

        let account = NewAccount {
            identifier: command.identifier,
            credential_hash,
            profile_uri: command.profile_uri,
        };

        match self.directory.insert(account).await {
            Ok(account_id) => {
                tracing::info!(account_id = %account_id, "Account registered");
                Ok(account_id)
            }
            Err(e @ AccountError::IdentifierAlreadyExists(_)) => {
                tracing::warn!("Registration rejected, identifier already exists");
                Err(e)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist account");
                Err(e)
            }
        }
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AccountError> {
        // Unknown identifier and wrong password must be indistinguishable to the
        // caller, in body and in time.
        let Some(account) = self
            .directory
            .find_by_identifier(&command.identifier)
            .await?
        else {
            self.authenticator.reject_unknown_account(&command.password);
            tracing::debug!("Login rejected, no account for identifier");
            return Err(AccountError::InvalidCredentials);
        };

        self.authenticator
            .authenticate(&command.password, &account.credential_hash, account.id.0)
            .map(|result| {
                tracing::info!(account_id = %account.id, "Login succeeded");
                result.access_token
            })
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(account_id = %account.id, "Login rejected, password mismatch");
                    AccountError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(account_id = %account.id, error = %err, "Stored credential is unreadable");
                    AccountError::Credential(err.to_string())
                }
                AuthenticationError::TokenError(err) => AccountError::Token(err.to_string()),
            })
    }
}
