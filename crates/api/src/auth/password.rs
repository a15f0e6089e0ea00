//! Argon2id password hashing and verification.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself, which
//! lets verification work across cost-factor changes.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2 cost parameters used when hashing new passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordConfig {
    /// Load hashing parameters from environment variables with defaults.
    ///
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `PASSWORD_HASH_MEMORY_KIB`  | `19456` |
    /// | `PASSWORD_HASH_ITERATIONS`  | `2`     |
    /// | `PASSWORD_HASH_PARALLELISM` | `1`     |
    ///
    /// Panics if a value does not parse or the combination is rejected by
    /// Argon2, so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let memory_kib = env_u32("PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib);
        let iterations = env_u32("PASSWORD_HASH_ITERATIONS", defaults.iterations);
        let parallelism = env_u32("PASSWORD_HASH_PARALLELISM", defaults.parallelism);

        let config = Self {
            memory_kib,
            iterations,
            parallelism,
        };
        if let Err(e) = config.params() {
            panic!("Invalid password hashing parameters: {e}");
        }
        config
    }

    fn params(&self) -> Result<Params, argon2::Error> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
    }

    fn hasher(&self) -> Result<Argon2<'static>, argon2::Error> {
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params()?))
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u32")),
        Err(_) => default,
    }
}

/// Hash a plaintext password using Argon2id with a fresh random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(
    config: &PasswordConfig,
    password: &str,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = config.hasher()?.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
/// The cost parameters are read from the hash, not from the current config.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
