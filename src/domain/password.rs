//! Password value object - Domain layer password handling.
//!
//! Encapsulates the salted PBKDF2 derivation behind an immutable
//! value object so the plaintext never leaves this module.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::config::{DERIVED_KEY_LENGTH, PBKDF2_ROUNDS, SALT_LENGTH};
use crate::errors::{AppError, AppResult};

/// Password value object holding the storable hash string.
///
/// The stored format is `hex(salt):hex(derived_key)` with a fresh
/// 16-byte salt for every derivation. There is no verify operation:
/// nothing in this system ever compares a plaintext against a stored
/// hash.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a validation error if the plaintext is empty.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        Ok(Self {
            hash: Self::derive(plain_text),
        })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Derive the storable hash string from a plaintext.
    ///
    /// An OS entropy failure aborts the process; there is no
    /// meaningful recovery from a broken randomness source.
    fn derive(plain_text: &str) -> String {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);

        let mut key = [0u8; DERIVED_KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(plain_text.as_bytes(), &salt, PBKDF2_ROUNDS, &mut key);

        format!("{}:{}", hex::encode(salt), hex::encode(key))
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_format() {
        let password = Password::new("secret1").unwrap();
        let hash = password.as_str();

        let parts: Vec<&str> = hash.split(':').collect();
        assert_eq!(parts.len(), 2);
        // 16-byte salt and 32-byte key, hex encoded
        assert_eq!(parts[0].len(), 32);
        assert_eq!(parts[1].len(), 64);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn test_plaintext_never_stored() {
        let plain = "my-plain-password";
        let password = Password::new(plain).unwrap();

        assert_ne!(password.as_str(), plain);
        assert!(!password.as_str().contains(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        // Fresh salt per call, so the stored strings differ
        assert_ne!(pass1.as_str(), pass2.as_str());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = Password::new("");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_hash_round_trip() {
        let password = Password::new("secret1").unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash.clone());
        assert_eq!(restored.into_string(), hash);
    }
}
