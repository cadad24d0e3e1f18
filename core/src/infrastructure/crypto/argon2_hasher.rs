use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{Error as PasswordHashError, SaltString},
};
use rand::rngs::OsRng;
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!("Failed to parse stored password hash: {}", e);
            CoreError::InternalServerError
        })?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => {
                error!("Failed to verify password: {}", e);
                Err(CoreError::InternalServerError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash_password("s3cret-pass").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify_password("s3cret-pass", &hash).unwrap());
        assert!(!hasher.verify_password("otra", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let hasher = Argon2Hasher::new();

        assert!(hasher.verify_password("x", "not-a-hash").is_err());
    }
}
