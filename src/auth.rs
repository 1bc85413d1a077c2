use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sha2::{Digest, Sha256};

use crate::error::{internal_error, AdminError};

enum AdminSecret {
    Digest([u8; 32]),
    Argon2(String),
}

/// Holds the process-wide administrator secret and answers whether a
/// presented credential matches it.
pub struct AccessGuard {
    secret: AdminSecret,
}

impl AccessGuard {
    pub fn from_password(password: &str) -> Self {
        Self {
            secret: AdminSecret::Digest(digest(password)),
        }
    }

    /// Builds a guard from an Argon2 PHC string such as the one printed by
    /// `hash-admin-password`.
    pub fn from_argon2_hash(hash: &str) -> Result<Self, AdminError> {
        PasswordHash::new(hash)
            .map_err(|err| AdminError::Config(format!("invalid ADMIN_PASSWORD_HASH: {err}")))?;
        Ok(Self {
            secret: AdminSecret::Argon2(hash.to_string()),
        })
    }

    pub fn verify(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        match &self.secret {
            AdminSecret::Digest(expected) => constant_time_eq(expected, &digest(candidate)),
            AdminSecret::Argon2(hash) => verify_password(candidate, hash).is_ok(),
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, AdminError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(internal_error)?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<(), AdminError> {
    let parsed = PasswordHash::new(hash).map_err(internal_error)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AdminError::Unauthorized)
}

fn digest(value: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

// Both inputs are fixed-size digests, so the fold touches every byte no
// matter where the first difference is.
fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_secret_accepts_exact_match_only() {
        let guard = AccessGuard::from_password("s3cret");
        assert!(guard.verify("s3cret"));
        assert!(!guard.verify("s3cret "));
        assert!(!guard.verify("S3CRET"));
        assert!(!guard.verify("other"));
    }

    #[test]
    fn empty_candidate_is_rejected() {
        let guard = AccessGuard::from_password("");
        assert!(!guard.verify(""));

        let guard = AccessGuard::from_password("s3cret");
        assert!(!guard.verify(""));
    }

    #[test]
    fn argon2_secret_round_trips() {
        let hash = hash_password("hunter2").expect("hash");
        let guard = AccessGuard::from_argon2_hash(&hash).expect("guard");
        assert!(guard.verify("hunter2"));
        assert!(!guard.verify("hunter3"));
    }

    #[test]
    fn malformed_argon2_hash_is_a_config_error() {
        let result = AccessGuard::from_argon2_hash("not-a-phc-string");
        assert!(matches!(result, Err(AdminError::Config(_))));
    }

    #[test]
    fn constant_time_eq_detects_last_byte_difference() {
        let a = [7u8; 32];
        let mut b = a;
        assert!(constant_time_eq(&a, &b));
        b[31] = 8;
        assert!(!constant_time_eq(&a, &b));
    }
}
