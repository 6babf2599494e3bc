use sha2::{Digest, Sha256};

/// Hash a token using SHA-256 for storage
/// Never store raw tokens in the revocation list!
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
