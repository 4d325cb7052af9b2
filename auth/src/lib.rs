//! Authentication utilities library
//!
//! Provides the cryptographic side of account authentication:
//! - Credential hashing (Argon2id, salted, cost travels with the hash)
//! - Session token issuance and verification (HS256, ten minute validity)
//! - Authentication coordination
//!
//! The library knows nothing about how accounts are stored; the service
//! crate owns the domain and hands account ids and stored hashes in.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue(42).unwrap();
//! let payload = codec.verify(&token).unwrap();
//! assert_eq!(payload.account_id, 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, 42).unwrap();
//!
//! // Gate: validate token
//! let payload = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(payload.account_id, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use jwt::TokenPayload;
pub use password::PasswordError;
pub use password::PasswordHasher;
