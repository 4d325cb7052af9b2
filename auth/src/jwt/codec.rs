use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::claims::TokenPayload;
use super::errors::TokenError;

/// Lifetime of an issued token.
pub const TOKEN_VALIDITY_SECONDS: i64 = 600;

const ALGORITHM: Algorithm = Algorithm::HS256;
const ALGORITHM_NAME: &str = "HS256";

/// Issues and verifies HMAC-signed session tokens.
///
/// The signing algorithm is fixed to HS256 by the codec. Whatever a token's
/// header claims, it is only ever checked against HS256 with the secret
/// given at construction.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

#[derive(Deserialize)]
struct AlgorithmHeader {
    alg: String,
}

impl TokenCodec {
    /// Create a codec from the process-wide signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked by the codec against its own clock, with no leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            validity: Duration::seconds(TOKEN_VALIDITY_SECONDS),
        }
    }

    /// Issue a token for an account, expiring ten minutes from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, account_id: i64) -> Result<String, TokenError> {
        self.issue_at(account_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, account_id: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_account(account_id, now, self.validity);

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's structure, algorithm, signature and expiry.
    ///
    /// # Errors
    /// * `Malformed` - Token is not three base64url JSON segments
    /// * `Unsupported` - Header names an algorithm other than HS256
    /// * `SignatureInvalid` - Header or claims were not signed with our secret
    /// * `Expired` - Current time is at or past the `exp` claim
    pub fn verify(&self, token: &str) -> Result<TokenPayload, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenPayload, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::Malformed(format!(
                "expected 3 segments, got {}",
                segments.len()
            )));
        }

        let algorithm = Self::header_algorithm(segments[0])?;
        if algorithm != ALGORITHM_NAME {
            return Err(TokenError::Unsupported(algorithm));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        let claims = token_data.claims;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        TokenPayload::try_from(claims)
    }

    fn header_algorithm(segment: &str) -> Result<String, TokenError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(segment)
            .map_err(|e| TokenError::Malformed(format!("header is not base64url: {}", e)))?;

        serde_json::from_slice::<AlgorithmHeader>(&bytes)
            .map(|header| header.alg)
            .map_err(|e| TokenError::Malformed(format!("header is not valid JSON: {}", e)))
    }
}
