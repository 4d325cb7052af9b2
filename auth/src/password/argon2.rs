use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Salted one-way credential hashing.
///
/// Hashes are Argon2id PHC strings: algorithm, version, cost parameters and
/// salt are all encoded alongside the digest. Verification reads them back
/// from the stored string, so raising the cost of this hasher never breaks
/// credentials hashed under an older cost.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the argon2 default work factor.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with an explicit Argon2id work factor.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes over memory
    /// * `parallelism` - Degree of parallelism (lanes)
    ///
    /// # Errors
    /// * `InvalidCost` - Parameters are outside argon2's accepted ranges
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext secret with a fresh random salt.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext secret against a stored hash.
    ///
    /// A mismatch is `Ok(false)`. The digest comparison is constant time.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored value is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(8, 1, 1).expect("Failed to build hasher")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "pw123";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains(password));
        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hasher = cheap_hasher();
        let hash = hasher.hash("pw123").expect("Failed to hash password");

        assert!(!hasher
            .verify("pw124", &hash)
            .expect("Failed to verify password"));
        assert!(!hasher.verify("", &hash).expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = cheap_hasher();

        let first = hasher.hash("same secret").expect("Failed to hash password");
        let second = hasher.hash("same secret").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("same secret", &first).unwrap());
        assert!(hasher.verify("same secret", &second).unwrap());
    }

    #[test]
    fn test_raised_cost_still_verifies_old_hashes() {
        let old = cheap_hasher();
        let stored = old.hash("pw123").expect("Failed to hash password");

        let raised = PasswordHasher::with_cost(16, 2, 1).expect("Failed to build hasher");
        assert!(raised.verify("pw123", &stored).unwrap());

        let rehashed = raised.hash("pw123").unwrap();
        assert!(rehashed.contains("m=16,t=2,p=1"));
    }

    #[test]
    fn test_invalid_cost() {
        let result = PasswordHasher::with_cost(0, 0, 0);
        assert!(matches!(result, Err(PasswordError::InvalidCost(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
