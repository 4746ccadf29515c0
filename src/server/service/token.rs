//! API token generation and verification.
//!
//! Tokens are 16 random bytes, hex encoded. Only `sha256(secret + token)` is persisted;
//! verification recomputes that digest and compares it to the stored value without
//! short-circuiting on the first differing byte.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of random bytes in a generated token (hex encoded to twice this length).
const TOKEN_BYTES: usize = 16;

/// Generates a new plaintext API token.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

/// Hashes a token with the server secret as a lowercase hex SHA-256 digest.
pub fn hash_token(secret: &str, token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks a presented token against a stored hash.
///
/// The comparison time depends only on the digest length, not on how many leading
/// characters match.
pub fn verify_token(secret: &str, token: &str, stored_hash: &str) -> bool {
    let computed = hash_token(secret, token);
    constant_time_eq(computed.as_bytes(), stored_hash.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_hex_tokens_of_fixed_length() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

        assert_ne!(token, generate_token());
    }

    #[test]
    fn hash_matches_sha256_of_secret_then_token() {
        // sha256("abc")
        assert_eq!(
            hash_token("a", "bc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn verifies_matching_token() {
        let hash = hash_token("secret", "token");
        assert!(verify_token("secret", "token", &hash));
    }

    #[test]
    fn rejects_wrong_token_secret_or_hash() {
        let hash = hash_token("secret", "token");
        assert!(!verify_token("secret", "other", &hash));
        assert!(!verify_token("other", "token", &hash));
        assert!(!verify_token("secret", "token", &hash[..63]));
        assert!(!verify_token("secret", "token", ""));
    }
}
