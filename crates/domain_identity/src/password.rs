//! Password hashing
//!
//! Argon2id with a random per-hash salt, stored in PHC string format.
//! Plaintext passwords exist only transiently on the stack.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::IdentityError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hashes a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| IdentityError::HashingFailed)?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored hash
///
/// Returns false for both a mismatch and a malformed stored hash; callers
/// must not be able to distinguish the two.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Validates the minimum-length rule applied at user creation and
/// password change
pub fn validate_password(password: &str) -> Result<(), IdentityError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(IdentityError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Lecturer@123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Lecturer@123", &hash));
        assert!(!verify_password("Lecturer@124", &hash));
    }

    #[test]
    fn test_salted_hashes_differ() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same-password", &a));
        assert!(verify_password("same-password", &b));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_minimum_length() {
        assert!(validate_password("Short1!").is_err());
        assert!(validate_password("LongEnough1!").is_ok());
    }
}
