use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Wraps bcrypt: salted, adaptive and deliberately slow. The salt is generated
/// per hash and embedded in the returned modular-crypt string (`$2b$10$...`).
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Cost used by [`PasswordHasher::new`].
    pub const DEFAULT_COST: u32 = 10;

    /// Lowest cost bcrypt accepts. Only suitable for tests.
    pub const MIN_COST: u32 = 4;

    /// bcrypt only reads the first 72 bytes of its input.
    pub const MAX_PASSWORD_BYTES: usize = 72;

    /// Create a new password hasher with the default cost.
    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit bcrypt cost factor.
    ///
    /// Out-of-range costs are not rejected here; `hash` reports them as
    /// `HashingFailed`.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// bcrypt hash string (includes version, cost and salt)
    ///
    /// # Errors
    /// * `TooLong` - Password exceeds 72 bytes and would otherwise be truncated
    /// * `HashingFailed` - bcrypt rejected the input or the cost factor
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > Self::MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong {
                max: Self::MAX_PASSWORD_BYTES,
                actual: password.len(),
            });
        }

        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored bcrypt hash
    ///
    /// # Returns
    /// Unit when the password matches
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match the hash
    /// * `VerificationFailed` - Stored hash is malformed or uses an unknown scheme
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        // No stored hash can come from an input longer than the limit, and
        // bcrypt would compare only its prefix.
        if password.len() > Self::MAX_PASSWORD_BYTES {
            return Err(PasswordError::Mismatch);
        }

        match bcrypt::verify(password, hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::Mismatch),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
