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
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;

/// Marker prepended to issued tokens so they can be echoed straight into an
/// `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// JWT token handler for encoding and decoding tokens.
///
/// Signs with HS256. Verification accepts the HMAC family only (HS256,
/// HS384, HS512) so a token cannot pick an algorithm the secret was never
/// meant for.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
        }
    }

    /// Encode claims into a JWT token (without the bearer prefix).
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Requires an `exp` claim and checks it with zero leeway.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` has passed
    /// * `TokenNotYetValid` - `nbf` is in the future
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `InvalidAlgorithm` - Header names an algorithm outside the HMAC family
    /// * `MissingClaim` - `exp` is absent
    /// * `DecodingFailed` - Token is malformed
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let token_data = decode::<T>(token, &self.decoding_key, &self.validation)?;

        Ok(token_data.claims)
    }

    /// Issue a bearer token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Identifier stored in the `user_id` claim
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// `"Bearer <jwt>"`
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, user_id: i64, ttl: Duration) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, ttl);
        let token = self.encode(&claims)?;

        Ok(format!("{}{}", BEARER_PREFIX, token))
    }

    /// Parse and validate a token, with or without the bearer prefix.
    ///
    /// A token is valid while the current time is strictly before `exp`.
    ///
    /// # Errors
    /// Any error from [`JwtHandler::decode`]
    pub fn parse_and_validate(&self, token: &str) -> Result<Claims, JwtError> {
        let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token);

        let claims: Claims = self.decode(token)?;

        // The library only rejects exp < now
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
