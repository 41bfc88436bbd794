//! Password hashing and secret comparison.
//!
//! Passwords are hashed with Argon2id and a per-hash random salt; raw
//! passwords never touch storage. Security answers are compared with a
//! constant-time equality check.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};

/// Hash a password using Argon2id with a fresh random salt.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a password against its stored hash.
///
/// The comparison inside the argon2 crate is constant-time.
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::Unauthorized)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Constant-time equality for two strings.
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("potter").unwrap();

        assert_ne!(hash, "potter");
        assert!(verify_password("potter", &hash).unwrap());
        assert!(!verify_password("porter", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("potter").unwrap();
        let second = hash_password("potter").unwrap();

        // Fresh salts, so fresh hashes; both still verify.
        assert_ne!(first, second);
        assert!(verify_password("potter", &first).unwrap());
        assert!(verify_password("potter", &second).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_unauthorized() {
        assert!(matches!(
            verify_password("potter", "not-a-phc-string"),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_constant_time_comparison() {
        assert!(constant_time_str_eq("Hedwig", "Hedwig"));
        assert!(!constant_time_str_eq("Hedwig", "Fluffy"));
        assert!(!constant_time_str_eq("Hedwig", "Hedwig!"));
    }
}
