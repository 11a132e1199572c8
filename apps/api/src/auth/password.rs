use std::fmt;

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Salted SHA-256 digest of an account password.
#[derive(Clone)]
pub struct PasswordDigest {
    salt: String,
    hash: String,
}

impl PasswordDigest {
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let hash = digest(&salt, password);
        Self { salt, hash }
    }

    pub fn verify(&self, password: &str) -> bool {
        digest(&self.salt, password) == self.hash
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

fn digest(salt: &str, password: &str) -> String {
    hex::encode(
        Sha256::new()
            .chain_update(salt.as_bytes())
            .chain_update(password.as_bytes())
            .finalize(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_round_trip() {
        let digest = PasswordDigest::new("correct horse");
        assert!(digest.verify("correct horse"));
        assert!(!digest.verify("Correct horse"));
    }

    #[test]
    fn test_same_password_different_salt() {
        let a = PasswordDigest::new("password123");
        let b = PasswordDigest::new("password123");
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_hash_is_lowercase_hex_sha256() {
        let digest = PasswordDigest::new("password123");
        assert_eq!(digest.hash.len(), 64);
        assert!(digest.hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_debug_does_not_leak_hash() {
        let digest = PasswordDigest::new("secret");
        assert_eq!(format!("{digest:?}"), "PasswordDigest(..)");
    }
}
