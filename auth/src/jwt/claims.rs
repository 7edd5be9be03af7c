use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Name of the claim carrying the authenticated user's identifier.
pub const USER_ID_CLAIM: &str = "user_id";

/// JWT claims structure.
///
/// Only the time-bound claims are typed. Everything else, including
/// `user_id`, lives in the `extra` map exactly as it came off the wire, so a
/// token minted by another issuer decodes the same way as one of ours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claims {
    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Not before (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Storage-assigned user identifier
    /// * `ttl` - Lifetime of the token, counted from now
    ///
    /// # Returns
    /// Claims with `user_id` and `exp` set
    pub fn for_user(user_id: i64, ttl: Duration) -> Self {
        let expiration = Utc::now() + ttl;

        Self::new()
            .with_expiration(expiration.timestamp())
            .with_extra(USER_ID_CLAIM, user_id)
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set not-before (Unix timestamp).
    pub fn with_not_before(mut self, nbf: i64) -> Self {
        self.nbf = Some(nbf);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Extract the `user_id` claim as a 64-bit integer.
    ///
    /// JSON round trips can turn an integer into any numeric form, so every
    /// representation that holds a whole number is accepted.
    ///
    /// # Errors
    /// * `MissingClaim` - No `user_id` claim
    /// * `InvalidClaim` - Claim is not numeric or not a whole number in `i64` range
    pub fn user_id(&self) -> Result<i64, JwtError> {
        let value = self
            .extra
            .get(USER_ID_CLAIM)
            .ok_or_else(|| JwtError::MissingClaim(USER_ID_CLAIM.to_string()))?;

        let numeric = NumericClaim::deserialize(value).map_err(|_| {
            JwtError::InvalidClaim(format!("{} is not numeric: {}", USER_ID_CLAIM, value))
        })?;

        numeric.to_i64().ok_or_else(|| {
            JwtError::InvalidClaim(format!(
                "{} is not a 64-bit integer: {}",
                USER_ID_CLAIM, value
            ))
        })
    }

    /// Check if token is expired.
    ///
    /// A token is valid strictly before `exp`; claims without `exp` are
    /// treated as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(true, |exp| exp <= current_timestamp)
    }
}

/// Every shape a numeric claim can take after JSON (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericClaim {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl NumericClaim {
    /// Normalize to `i64`, or `None` when the value has no exact `i64` form.
    pub fn to_i64(self) -> Option<i64> {
        match self {
            NumericClaim::Signed(v) => Some(v),
            NumericClaim::Unsigned(v) => i64::try_from(v).ok(),
            NumericClaim::Float(v) => {
                // i64::MAX as f64 rounds up to 2^63, hence the strict bound
                let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
                if v.is_finite() && v.fract() == 0.0 && in_range {
                    Some(v as i64)
                } else {
                    None
                }
            }
        }
    }
}
