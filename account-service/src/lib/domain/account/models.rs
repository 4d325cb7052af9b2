use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::IdentifierError;

/// Account aggregate entity.
///
/// Created once at registration and never mutated by this service.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub identifier: Identifier,
    pub credential_hash: String,
    pub profile_uri: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Account identifier assigned by the directory on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique login identifier (the account's email).
///
/// Must be present and contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create a new validated identifier.
    ///
    /// # Errors
    /// * `Empty` - Identifier is empty or only whitespace
    pub fn new(identifier: String) -> Result<Self, IdentifierError> {
        if identifier.trim().is_empty() {
            Err(IdentifierError::Empty)
        } else {
            Ok(Self(identifier))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row handed to the directory on registration. The directory assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub identifier: Identifier,
    pub credential_hash: String,
    pub profile_uri: Option<String>,
}

/// Command to register a new account
#[derive(Debug)]
pub struct RegisterCommand {
    pub identifier: Identifier,
    pub password: String,
    pub profile_uri: Option<String>,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `identifier` - Validated identifier
    /// * `password` - Plain text password (will be hashed by service)
    /// * `profile_uri` - Optional profile image location
    pub fn new(identifier: Identifier, password: String, profile_uri: Option<String>) -> Self {
        Self {
            identifier,
            password,
            profile_uri,
        }
    }
}

/// Command to log in with an identifier and password
#[derive(Debug)]
pub struct LoginCommand {
    pub identifier: Identifier,
    pub password: String,
}

impl LoginCommand {
    pub fn new(identifier: Identifier, password: String) -> Self {
        Self {
            identifier,
            password,
        }
    }
}
