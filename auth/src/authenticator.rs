use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::jwt::TokenPayload;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Plaintext behind the decoy hash. Never matches a stored credential.
const DECOY_PASSWORD: &str = "decoy-credential-for-unknown-accounts";

/// Authentication coordinator combining credential verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    decoy_hash: String,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with the default hashing work factor.
    ///
    /// # Arguments
    /// * `token_secret` - Process-wide secret for token signing
    ///
    /// # Errors
    /// * `PasswordError` - The decoy credential could not be hashed
    pub fn new(token_secret: &[u8]) -> Result<Self, PasswordError> {
        Self::with_password_hasher(token_secret, PasswordHasher::new())
    }

    /// Create a new authenticator with a preconfigured password hasher.
    ///
    /// A decoy hash is computed up front with the same hasher so that
    /// [`Authenticator::reject_unknown_account`] costs as much as a real check.
    pub fn with_password_hasher(
        token_secret: &[u8],
        password_hasher: PasswordHasher,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            token_codec: TokenCodec::new(token_secret),
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the account.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `account_id` - Account the token is issued to
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        account_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.issue(account_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login for an identifier with no account.
    ///
    /// Runs one full password verification against the decoy hash before
    /// returning, so the miss path takes as long as a wrong password.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, &self.decoy_hash);
        AuthenticationError::InvalidCredentials
    }

    /// Validate a token and recover its payload.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, tampered, unsupported or expired
    pub fn validate_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        self.token_codec.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        let hasher = PasswordHasher::with_cost(8, 1, 1).expect("Failed to build hasher");
        Authenticator::with_password_hasher(b"test_secret_key_at_least_32_bytes!", hasher)
            .expect("Failed to build authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, 17)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let payload = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(payload.account_id, 17);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 17);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "not-a-phc-string", 17);
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_decoy_hash_uses_configured_cost() {
        let authenticator = authenticator();

        assert!(authenticator.decoy_hash.starts_with("$argon2id$"));
        assert!(authenticator.decoy_hash.contains("m=8,t=1,p=1"));
        assert!(authenticator
            .password_hasher
            .verify(DECOY_PASSWORD, &authenticator.decoy_hash)
            .expect("Decoy hash should parse"));
    }

    #[test]
    fn test_reject_unknown_account() {
        let authenticator = authenticator();

        assert!(matches!(
            authenticator.reject_unknown_account("my_password"),
            AuthenticationError::InvalidCredentials
        ));
        // Even the decoy's own plaintext is rejected.
        assert!(matches!(
            authenticator.reject_unknown_account(DECOY_PASSWORD),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }
}
