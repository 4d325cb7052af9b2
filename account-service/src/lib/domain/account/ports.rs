use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::Identifier;
use crate::account::models::LoginCommand;
use crate::account::models::NewAccount;
use crate::account::models::RegisterCommand;

/// Port for authentication service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with a hashed credential.
    ///
    /// # Arguments
    /// * `command` - Validated identifier, plaintext password and optional profile uri
    ///
    /// # Returns
    /// Id assigned to the new account
    ///
    /// # Errors
    /// * `IdentifierAlreadyExists` - Identifier is already registered
    /// * `Credential` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AccountId, AccountError>;

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Identifier and plaintext password
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountDirectory: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// Must fail atomically if the identifier is already taken.
    ///
    /// # Returns
    /// Id assigned by the directory
    ///
    /// # Errors
    /// * `IdentifierAlreadyExists` - Identifier is already registered
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, account: NewAccount) -> Result<AccountId, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Account>, AccountError>;
}
